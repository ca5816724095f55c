//! 右声道 PNS / 强度立体声重建 (Stereo Processing).
//!
//! 按窗口组遍历每个 scalefactor 频带, 根据码本分派:
//! - NOISE_HCB 且未被长时预测占用: 独立噪声合成, 或 M/S 掩码生效时的
//!   相关噪声重建
//! - INTENSITY_HCB / INTENSITY_HCB2: 从左声道重建, 掩码控制符号翻转
//! - 其余码本: 频带保持上游解码结果不变

use heng_core::{HengError, HengResult};
use log::debug;

use super::intensity::reconstruct_intensity;
use super::noise::{NoiseRng, reconstruct_correlated_noise, synthesize_noise_band};
use super::{BandInfo, FrameGeometry, INTENSITY_HCB2, MAX_BANDS, MsMode, NOISE_HCB};

/// 重建右声道所有噪声/强度频带, 原地改写 coef_right 与 q_right.
///
/// 每帧对声道对调用一次. 组内所有窗口共享同一组码本/掩码/scalefactor
/// 赋值, 组级重建调用一次性覆盖整组窗口. 返回
/// [`HengError::BandOverflow`] 时本帧数据不可继续使用: 几何/分组声明
/// 的频带数超出单帧上限, 码流畸形, 出错频带之前的写入保持原样.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_right_channel(
    ms_mode: MsMode,
    geometry: &FrameGeometry,
    grouping: &[usize],
    bands: &BandInfo<'_>,
    prediction_used: &mut [bool],
    ltp_present: bool,
    coef_left: &[i32],
    coef_right: &mut [i32],
    q_left: &[i32],
    q_right: &mut [i32],
    rng: &mut NoiseRng,
) -> HengResult<()> {
    validate_grouping(grouping, geometry.num_win)?;

    let coef_per_win = geometry.coef_per_win;
    let sfb_per_win = geometry.sfb_per_win;

    debug!(
        "AAC 右声道重建: ms_mode={:?}, num_win={}, groups={}, sfb_per_win={}",
        ms_mode,
        geometry.num_win,
        grouping.len(),
        sfb_per_win
    );

    // tot_sfb 指向 (窗口, 频带) 平铺表中当前组首窗口的条目, 组尾跳过
    // 组内其余窗口的重复条目 (scalefactor / Q-format / 预测标志共用
    // 这一游标); 码本与掩码按 (组, 频带) 平铺, grouped_sfb 逐条推进,
    // 不参与组尾跳过.
    let mut window_start = 0usize;
    let mut tot_sfb = 0usize;
    let mut grouped_sfb = 0usize;
    let mut coef_base = 0usize;
    let mut bands_counted = 0usize;

    for &partition in grouping {
        let band_tops = geometry
            .win_sfb_top
            .get(window_start)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let wins_in_group = partition - window_start;
        let mut band_start = 0usize;

        for sfb in 0..sfb_per_win {
            // 频带计数上限检查先于该频带的任何读写
            bands_counted += 1;
            if bands_counted >= MAX_BANDS {
                return Err(HengError::BandOverflow {
                    count: bands_counted,
                    limit: MAX_BANDS,
                });
            }

            let band_stop = band_tops.get(sfb).copied().unwrap_or(0) as usize;
            let codebook = bands.codebooks.get(grouped_sfb).copied().unwrap_or(0);
            let mask = bands.ms_mask.get(grouped_sfb).copied().unwrap_or(false);
            grouped_sfb += 1;

            let band_length = band_stop.saturating_sub(band_start);

            if codebook == NOISE_HCB {
                if let Some(pred) = prediction_used.get_mut(tot_sfb) {
                    *pred &= ltp_present;
                }
                if !prediction_used.get(tot_sfb).copied().unwrap_or(false) {
                    // 掩码与 M/S 模式的组合 (仅 PerBand 触发相关路径):
                    //
                    // mask == 0, mode == 任意      -- 独立噪声
                    // mask == 1, mode == PerBand   -- 相关噪声
                    // mask == 1, mode == Off       -- 独立噪声
                    // mask == 1, mode == FrameWide -- 独立噪声
                    let coupled = mask && ms_mode == MsMode::PerBand;

                    if !coupled {
                        // 逐窗口合成噪声, Q-format 写入各窗口自己的槽位
                        let factor = bands.factors_right.get(tot_sfb).copied().unwrap_or(0);
                        let mut win_coef = coef_base + band_start;
                        let mut q_idx = tot_sfb;
                        for _ in 0..wins_in_group {
                            match coef_right.get_mut(win_coef..win_coef + band_length) {
                                Some(dst) => {
                                    let q = synthesize_noise_band(dst, rng, factor);
                                    if let Some(slot) = q_right.get_mut(q_idx) {
                                        *slot = q;
                                    }
                                }
                                None => break,
                            }
                            win_coef += coef_per_win;
                            q_idx += sfb_per_win;
                        }
                    } else {
                        // 相关路径传 scalefactor 差值, 不消耗随机游标
                        let delta = bands.factors_right.get(tot_sfb).copied().unwrap_or(0)
                            - bands.factors_left.get(tot_sfb).copied().unwrap_or(0);
                        reconstruct_correlated_noise(
                            delta,
                            coef_per_win,
                            sfb_per_win,
                            wins_in_group,
                            band_length,
                            q_left.get(tot_sfb).copied().unwrap_or(0),
                            q_right.get_mut(tot_sfb..).unwrap_or_default(),
                            coef_left.get(coef_base + band_start..).unwrap_or(&[]),
                            coef_right
                                .get_mut(coef_base + band_start..)
                                .unwrap_or_default(),
                        );
                    }
                }
            } else if codebook >= INTENSITY_HCB2 {
                // 掩码与 M/S 模式组合出的符号翻转 (仅 PerBand 翻转):
                //
                // mask == X, mode == Off       -- 不翻转
                // mask == 0, mode == 任意      -- 不翻转
                // mask == 1, mode == PerBand   -- 翻转
                // mask == 1, mode == FrameWide -- 不翻转
                let invert = mask && ms_mode == MsMode::PerBand;
                reconstruct_intensity(
                    bands.factors_right.get(tot_sfb).copied().unwrap_or(0),
                    coef_per_win,
                    sfb_per_win,
                    wins_in_group,
                    band_length,
                    codebook,
                    invert,
                    q_left.get(tot_sfb..).unwrap_or(&[]),
                    q_right.get_mut(tot_sfb..).unwrap_or_default(),
                    coef_left.get(coef_base + band_start..).unwrap_or(&[]),
                    coef_right
                        .get_mut(coef_base + band_start..)
                        .unwrap_or_default(),
                );
            }

            band_start = band_stop;
            tot_sfb += 1;
        }

        // 组内其余窗口的系数与重复频带条目已由组级调用隐式消费
        coef_base += coef_per_win * wins_in_group;
        tot_sfb += sfb_per_win * (wins_in_group - 1);
        window_start = partition;
    }

    Ok(())
}

/// 校验分组表不变量: 分区严格递增, 末项等于窗口数.
fn validate_grouping(grouping: &[usize], num_win: usize) -> HengResult<()> {
    if grouping.is_empty() {
        return Err(HengError::InvalidData("AAC 分组表为空".into()));
    }
    let mut prev = 0usize;
    for &partition in grouping {
        if partition <= prev {
            return Err(HengError::InvalidData(format!(
                "AAC 分组表非递增: {prev} -> {partition}"
            )));
        }
        prev = partition;
    }
    if prev != num_win {
        return Err(HengError::InvalidData(format!(
            "AAC 分组表末项 {prev} 与窗口数 {num_win} 不一致"
        )));
    }
    Ok(())
}
