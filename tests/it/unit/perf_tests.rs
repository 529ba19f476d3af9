//! Timing helper unit tests.

use mapboard::perf::{HitTestProfiler, ScopedTimer, TARGET_FRAME_MS, measure};
use std::thread;
use std::time::Duration;

#[test]
fn test_measure_reports_elapsed_time() {
    let (value, elapsed) = measure(|| {
        thread::sleep(Duration::from_millis(5));
        "done"
    });
    assert_eq!(value, "done");
    assert!(elapsed >= 5.0);
}

#[test]
fn test_scoped_timer_keeps_name() {
    let timer = ScopedTimer::with_default_threshold("hit_test");
    assert_eq!(timer.name(), "hit_test");
    assert!(timer.elapsed_ms() < TARGET_FRAME_MS * 100.0);
}

#[test]
fn test_profiler_tracks_counts_and_average() {
    let mut profiler = HitTestProfiler::new();
    assert_eq!(profiler.test_count(), 0);

    for _ in 0..50 {
        profiler.record(4, 0.01);
    }
    profiler.record(0, 0.02);

    assert_eq!(profiler.test_count(), 51);
    assert_eq!(profiler.candidates, 0);
    assert_eq!(profiler.last_test_ms, 0.02);
    let avg = profiler.average_candidates();
    assert!(avg > 3.0 && avg < 4.0, "average was {avg}");
}

#[test]
fn test_profile_scope_macro_compiles_in_functions() {
    fn hot_path() -> u32 {
        mapboard::profile_scope!("hot_path");
        mapboard::profile_scope!("hot_path_strict", 0.5);
        7
    }
    assert_eq!(hot_path(), 7);
}
