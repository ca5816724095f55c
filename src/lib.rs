//! # Heng (衡)
//!
//! 纯 Rust 实现的定点 AAC 立体声频谱重建库.
//!
//! Heng 覆盖双声道频域解码管线的中段: 对被 PNS (感知噪声替换) 或
//! 强度立体声标记的 scalefactor 频带, 在 Huffman/scalefactor 解码之后、
//! 反量化与 IMDCT 之前原地重建右声道频谱. 全程使用 (尾数, Q-format)
//! 定点表示, 数值契约逐位确定.
//!
//! # 快速开始
//!
//! ```rust
//! use heng::codec::decoders::aac::{NoiseRng, synthesize_noise_band};
//!
//! // 固定种子下噪声序列完全可复现
//! let mut rng = NoiseRng::new(0x2bc0_ffee);
//! let mut band = [0i32; 16];
//! let q = synthesize_noise_band(&mut band, &mut rng, 8);
//! println!("Q-format: {q}");
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `heng-core` | 核心类型、错误与定点运算工具 |
//! | `heng-codec` | AAC 频谱重建解码核心 |

/// 核心类型与定点工具
pub use heng_core as core;

/// 解码核心
pub use heng_codec as codec;

/// 获取 Heng 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
