//! 强度立体声 (IS) 右声道重建.

use heng_core::fixed::QuarterScale;

use super::INTENSITY_HCB;

/// 从左声道重建整组右声道强度频带: 右 = 符号 × 左 × 2^(−sf/4).
///
/// 两个强度码本的基准符号相反: INTENSITY_HCB2 为正相, INTENSITY_HCB
/// 为反相; invert 在基准符号上再翻转一次. 左声道 Q-format 逐窗口读取
/// (步长 sfb_per_win), 右声道对应槽位逐窗口写回.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_intensity(
    scale_factor: i32,
    coef_per_win: usize,
    sfb_per_win: usize,
    wins_in_group: usize,
    band_length: usize,
    codebook: u8,
    invert: bool,
    q_left: &[i32],
    q_right: &mut [i32],
    left: &[i32],
    right: &mut [i32],
) {
    let qs = QuarterScale::from_quarters(-scale_factor);
    let negate = (codebook == INTENSITY_HCB) ^ invert;

    for win in 0..wins_in_group {
        let base = win * coef_per_win;
        for i in 0..band_length {
            let idx = base + i;
            if idx >= left.len() || idx >= right.len() {
                break;
            }
            let m = qs.scale_mantissa(left[idx]);
            right[idx] = if negate { -m } else { m };
        }
        let q_idx = win * sfb_per_win;
        if let (Some(&ql), Some(slot)) = (q_left.get(q_idx), q_right.get_mut(q_idx)) {
            *slot = qs.rescale_exponent(ql);
        }
    }
}
