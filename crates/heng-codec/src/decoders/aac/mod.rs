//! AAC 右声道频谱重建 (定点): PNS 与强度立体声.
//!
//! 处于双声道频域解码管线的中段, 在 Huffman/scalefactor 解码之后、
//! 反量化与 IMDCT 之前运行:
//! 1. 帧头与原始数据块解析, Huffman 解码频谱/scalefactor (上游)
//! 2. 被标记频带的右声道频谱重建 (本模块)
//! 3. 反量化, IMDCT, 加窗 overlap-add (下游)
//!
//! 频谱数据为 (尾数, Q-format) 定点表示, Q-format 按 (窗口, 频带)
//! 逐条记录. 噪声游标是整个解码会话的串行状态, 跨帧复用, 必须显式
//! 传递; 左声道数据在本阶段只读.

mod intensity;
mod noise;
mod stereo;


pub use intensity::reconstruct_intensity;
pub use noise::{
    DEFAULT_NOISE_SEED, NoiseRng, reconstruct_correlated_noise, synthesize_noise_band,
};
pub use stereo::reconstruct_right_channel;

/// AAC 特殊码本定义
pub const NOISE_HCB: u8 = 13;
pub const INTENSITY_HCB2: u8 = 14;
pub const INTENSITY_HCB: u8 = 15;

/// 单帧可处理的 (组, 频带) 总数上限 (8 窗 × 15 频带)
///
/// 计数达到上限视为畸形码流, 整帧丢弃.
pub const MAX_BANDS: usize = 120;

/// 44100Hz 下 1024 点 LONG 窗口的 SFB 上界表 (49 个 band)
pub const SFB_TOP_1024_44100: [u16; 49] = [
    4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 48, 56, 64, 72, 80, 88, 96, 108, 120, 132, 144, 160,
    176, 196, 216, 240, 264, 292, 320, 352, 384, 416, 448, 480, 512, 544, 576, 608, 640, 672, 704,
    736, 768, 800, 832, 864, 896, 928, 1024,
];

/// 44100Hz 下 128 点 SHORT 窗口的 SFB 上界表 (14 个 band)
pub const SFB_TOP_128_44100: [u16; 14] = [4, 8, 12, 16, 20, 28, 36, 44, 56, 68, 80, 96, 112, 128];

/// M/S 掩码模式, 对应码流字段 ms_mask_present.
///
/// 只有 [`MsMode::PerBand`] 会让掩码位真正生效 (PNS 相关路径 / 强度
/// 符号翻转); 其余两种模式下被标记的频带仍走非耦合路径.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MsMode {
    /// 0: 本帧未启用 M/S
    Off,
    /// 1: 逐频带掩码生效
    PerBand,
    /// 2: 全帧标记, 掩码位不单独生效
    FrameWide,
}

/// 帧的窗口/分组拓扑, 由帧头解析阶段产出, 重建过程中不可变.
#[derive(Clone, Debug)]
pub struct FrameGeometry {
    /// 窗口数 (长窗 1, 短窗 8)
    pub num_win: usize,
    /// 每窗口 scalefactor 频带数
    pub sfb_per_win: usize,
    /// 每窗口频谱系数数
    pub coef_per_win: usize,
    /// 每个窗口一张累计频带上界表 (第 i 项为频带 i 的末尾系数索引)
    pub win_sfb_top: Vec<Vec<u16>>,
}

impl FrameGeometry {
    /// 单长窗拓扑 (44100Hz, 1024 系数, 49 频带)
    pub fn long_window_44100() -> Self {
        Self {
            num_win: 1,
            sfb_per_win: SFB_TOP_1024_44100.len(),
            coef_per_win: 1024,
            win_sfb_top: vec![SFB_TOP_1024_44100.to_vec()],
        }
    }

    /// 8 短窗拓扑 (44100Hz, 每窗 128 系数, 14 频带)
    pub fn short_windows_44100() -> Self {
        Self {
            num_win: 8,
            sfb_per_win: SFB_TOP_128_44100.len(),
            coef_per_win: 128,
            win_sfb_top: vec![SFB_TOP_128_44100.to_vec(); 8],
        }
    }
}

/// 声道对的逐频带只读属性表.
///
/// 码本与掩码按 (组, 频带) 顺序平铺; scalefactor 按 (窗口, 频带)
/// 平铺, 组内后续窗口的条目与首窗口重复.
#[derive(Clone, Copy, Debug)]
pub struct BandInfo<'a> {
    /// 每个 (组, 频带) 的 Huffman 码本号
    pub codebooks: &'a [u8],
    /// 每个 (组, 频带) 的 M/S 掩码位
    pub ms_mask: &'a [bool],
    /// 左声道逐 (窗口, 频带) scalefactor
    pub factors_left: &'a [i32],
    /// 右声道逐 (窗口, 频带) scalefactor
    pub factors_right: &'a [i32],
}
