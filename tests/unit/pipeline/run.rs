use super::*;
use crate::{CHANNELS, FrameRgb};

fn solid(rgb: [u8; 3]) -> FrameRgb {
    let data = rgb.iter().copied().cycle().take(9 * CHANNELS).collect();
    FrameRgb::new(3, 3, data).unwrap()
}

fn period4_volume() -> VideoVolume {
    let colors = [[200, 30, 30], [30, 200, 30], [30, 30, 200], [200, 200, 30]];
    let frames: Vec<FrameRgb> = (0..9).map(|t| solid(colors[t % 4])).collect();
    VideoVolume::from_frames(&frames).unwrap()
}

#[test]
fn period_four_clip_selects_a_period_four_loop() {
    let volume = period4_volume();
    let selection = find_loop(&volume, 0.1).unwrap();
    let spec = selection.spec().expect("period-4 clip must yield a loop");

    assert_eq!((spec.start, spec.end), (2, 6));
    // The loop endpoints really are the same image.
    assert_eq!(
        volume.frame_bytes(spec.start).unwrap(),
        volume.frame_bytes(spec.end).unwrap()
    );
}

#[test]
fn selected_loop_extracts_cleanly() {
    let volume = period4_volume();
    let spec = find_loop(&volume, 0.1).unwrap().spec().unwrap();
    let frames = volume.extract_loop(&spec).unwrap();

    assert_eq!(frames.len(), spec.len_frames());
    assert_eq!(frames.first(), frames.last());
}

#[test]
fn stats_count_pairs_and_candidates() {
    let volume = period4_volume();
    let (_, stats) =
        find_loop_with_stats(&volume, 0.1, &AnalysisThreading::default()).unwrap();
    assert_eq!(
        stats,
        AnalysisStats {
            frames_total: 9,
            pairs_scored: 36,
            candidates: 25,
        }
    );
}

#[test]
fn parallel_policy_matches_serial_results() {
    let volume = period4_volume();
    let serial = find_loop_with_stats(&volume, 0.1, &AnalysisThreading::default()).unwrap();
    let threading = AnalysisThreading {
        parallel: true,
        threads: Some(2),
    };
    let parallel = find_loop_with_stats(&volume, 0.1, &threading).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn fewer_than_five_frames_fails_up_front() {
    let frames: Vec<FrameRgb> = (0..4).map(|_| solid([5, 5, 5])).collect();
    let volume = VideoVolume::from_frames(&frames).unwrap();
    assert!(matches!(
        find_loop(&volume, 0.1),
        Err(LoopscanError::InsufficientFrames(_))
    ));
}

#[test]
fn bad_alpha_fails_before_any_analysis() {
    // A 1-frame volume would fail the dynamics stage; the Validation error
    // shows alpha is checked before any similarity work starts.
    let volume = VideoVolume::from_frames(&[solid([1, 1, 1])]).unwrap();
    assert!(matches!(
        find_loop(&volume, -0.5),
        Err(LoopscanError::Validation(_))
    ));
    assert!(matches!(
        find_loop(&volume, f64::INFINITY),
        Err(LoopscanError::Validation(_))
    ));
}

#[test]
fn zero_alpha_never_reports_a_loop() {
    // With no length reward and non-negative costs, nothing strictly beats
    // the zero-score baseline.
    assert_eq!(
        find_loop(&period4_volume(), 0.0).unwrap(),
        LoopSelection::NoLoop
    );
}

#[test]
fn static_clip_loops_on_the_longest_pair() {
    // Every transition in an all-identical clip is seamless (cost 0), so the
    // selector takes the longest span the trimmed space offers.
    let frames = vec![solid([90, 90, 90]); 8];
    let volume = VideoVolume::from_frames(&frames).unwrap();
    let spec = find_loop(&volume, 0.1).unwrap().spec().unwrap();
    assert_eq!((spec.start, spec.end), (2, 5));
}
