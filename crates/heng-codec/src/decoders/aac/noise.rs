//! PNS 噪声合成与 M/S 相关噪声重建.
//!
//! 噪声源为线性同余发生器 (Numerical Recipes 参数), 游标显式传递,
//! 输出序列只取决于种子与调用顺序. 每条谱线恰好消耗一次随机数, 因此
//! 游标推进量是频带长度的确定函数, 跨帧可复现.

use heng_core::fixed::{QuarterScale, isqrt64, mul_q30};

/// 默认噪声种子
pub const DEFAULT_NOISE_SEED: u32 = 0x1f2e3d4c;

/// 显式传递的噪声随机游标.
///
/// 整个解码会话共用一个游标; 并行解码多路流时每路各持一个.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseRng {
    state: u32,
}

impl NoiseRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// 当前游标值, 可随解码会话状态持久化
    pub fn state(&self) -> u32 {
        self.state
    }

    /// 产生下一个 32 位伪随机数
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state as i32
    }
}

impl Default for NoiseRng {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}

/// 用定点伪随机噪声填充一个频带 (单个窗口), 返回写入数据的 Q-format.
///
/// 频带先归一化到单位 RMS, 再按 2^(scale_factor/4) 缩放; 缩放的 2 的
/// 整数次幂部分全部进入返回的 Q-format, 尾数只乘 Q30 分数.
pub fn synthesize_noise_band(dst: &mut [i32], rng: &mut NoiseRng, scale_factor: i32) -> i32 {
    // 右移 5 位保证 1024 条谱线的能量和不溢出 u64
    let mut energy: u64 = 0;
    for line in dst.iter_mut() {
        let raw = rng.next_i32() >> 5;
        *line = raw;
        energy += (raw as i64 * raw as i64) as u64;
    }
    if dst.is_empty() {
        return 0;
    }

    let rms = isqrt64(energy / dst.len() as u64);
    if rms == 0 {
        return 0;
    }

    // 归一化: 值 = raw / rms. 把 rms 分解为 m × 2^p, m ∈ [1, 2),
    // 尾数乘 1/m 的 Q30 倒数, 2^p 并入 Q-format.
    let p = 31 - rms.leading_zeros() as i32;
    let m_q30 = (rms as i64) << (30 - p);
    let inv_q30 = ((1i64 << 60) / m_q30) as i32;

    // 与 2^(scale_factor/4) 的分数部分合并为单个 Q30 乘数
    let qs = QuarterScale::from_quarters(scale_factor);
    let mult = ((inv_q30 as i64 * qs.frac_q30 as i64) >> 30) as i32;
    for line in dst.iter_mut() {
        *line = mul_q30(*line, mult);
    }
    qs.rescale_exponent(p)
}

/// 以左声道噪声为源重建整组右声道频带: 右 = 左 × 2^(sf_delta/4).
///
/// sf_delta 为右、左 scalefactor 之差. 本路径不触碰随机游标, 输出是
/// 左声道数据与 delta 的确定函数. 整组共用单一源指数 (组首窗口的左
/// 声道条目), 每个窗口的右声道 Q-format 槽位均被写入.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_correlated_noise(
    sf_delta: i32,
    coef_per_win: usize,
    sfb_per_win: usize,
    wins_in_group: usize,
    band_length: usize,
    q_left: i32,
    q_right: &mut [i32],
    left: &[i32],
    right: &mut [i32],
) {
    let qs = QuarterScale::from_quarters(sf_delta);
    let q = qs.rescale_exponent(q_left);

    for win in 0..wins_in_group {
        let base = win * coef_per_win;
        for i in 0..band_length {
            let idx = base + i;
            if idx >= left.len() || idx >= right.len() {
                break;
            }
            right[idx] = qs.scale_mantissa(left[idx]);
        }
        if let Some(slot) = q_right.get_mut(win * sfb_per_win) {
            *slot = q;
        }
    }
}
