//! 端到端重建测试: 通过聚合 crate 的公开 API 跑完整声道对帧.

use heng::codec::decoders::aac::{
    BandInfo, FrameGeometry, INTENSITY_HCB, MsMode, NOISE_HCB, NoiseRng,
    reconstruct_right_channel,
};

struct Session {
    rng: NoiseRng,
}

struct FrameBuffers {
    coef_left: Vec<i32>,
    coef_right: Vec<i32>,
    q_left: Vec<i32>,
    q_right: Vec<i32>,
    prediction: Vec<bool>,
}

impl FrameBuffers {
    fn new(flat: usize) -> Self {
        Self {
            coef_left: (0..1024).map(|i| (i as i32 % 101) * 64 - 3200).collect(),
            coef_right: vec![0; 1024],
            q_left: (0..flat).map(|i| (i as i32 % 6) + 2).collect(),
            q_right: vec![0; flat],
            prediction: vec![false; flat],
        }
    }
}

/// 短窗分组混合帧: 噪声 / 强度 / 普通码本交错
fn decode_one_frame(session: &mut Session, buffers: &mut FrameBuffers) {
    let geometry = FrameGeometry::short_windows_44100();
    let grouping = [2usize, 5, 7, 8];
    let grouped = grouping.len() * geometry.sfb_per_win;
    let flat = geometry.num_win * geometry.sfb_per_win;

    let codebooks: Vec<u8> = (0..grouped)
        .map(|i| match i % 4 {
            0 => NOISE_HCB,
            1 => INTENSITY_HCB,
            _ => 2,
        })
        .collect();
    let ms_mask: Vec<bool> = (0..grouped).map(|i| i % 3 == 0).collect();
    let factors_left: Vec<i32> = (0..flat).map(|i| (i as i32 % 11) - 3).collect();
    let factors_right: Vec<i32> = (0..flat).map(|i| (i as i32 % 9) - 2).collect();

    let bands = BandInfo {
        codebooks: &codebooks,
        ms_mask: &ms_mask,
        factors_left: &factors_left,
        factors_right: &factors_right,
    };
    reconstruct_right_channel(
        MsMode::PerBand,
        &geometry,
        &grouping,
        &bands,
        &mut buffers.prediction,
        false,
        &buffers.coef_left,
        &mut buffers.coef_right,
        &buffers.q_left,
        &mut buffers.q_right,
        &mut session.rng,
    )
    .unwrap();
}

#[test]
fn test_session_determinism_across_frames() {
    env_logger::builder().is_test(true).try_init().ok();

    let flat = 8 * FrameGeometry::short_windows_44100().sfb_per_win;
    let run_session = || {
        let mut session = Session {
            rng: NoiseRng::new(0x0bad_5eed),
        };
        let mut first = FrameBuffers::new(flat);
        let mut second = FrameBuffers::new(flat);
        decode_one_frame(&mut session, &mut first);
        decode_one_frame(&mut session, &mut second);
        (first.coef_right, second.coef_right, session.rng.state())
    };

    let (first_a, second_a, state_a) = run_session();
    let (first_b, second_b, state_b) = run_session();
    assert_eq!(first_a, first_b);
    assert_eq!(second_a, second_b);
    assert_eq!(state_a, state_b);

    // 游标跨帧串行推进: 第二帧的噪声序列接续第一帧, 输出必然不同
    assert_ne!(first_a, second_a);
}

#[test]
fn test_prediction_flags_anded_down() {
    env_logger::builder().is_test(true).try_init().ok();

    let flat = 8 * FrameGeometry::short_windows_44100().sfb_per_win;
    let mut session = Session {
        rng: NoiseRng::default(),
    };
    let mut buffers = FrameBuffers::new(flat);
    buffers.prediction.fill(true);
    decode_one_frame(&mut session, &mut buffers);
    // 帧级 LTP 关闭: 所有噪声频带的预测标志被清除, 其余频带保持
    assert!(buffers.prediction.iter().any(|&p| !p));
    assert!(buffers.prediction.iter().any(|&p| p));
}
