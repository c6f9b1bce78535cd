use super::*;

#[test]
fn hidden_in_quiet_mode_still_counts() {
    let progress = ChartProgress::new(10, "shellsort", true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn visible_bar_counts_charts() {
    let progress = ChartProgress::new_with_visibility(3, "cyclesort", false, true);
    for _ in 0..3 {
        progress.inc();
    }
    assert_eq!(progress.position(), 3);
    progress.finish();
}

#[test]
fn clones_share_position() {
    let progress = ChartProgress::new(5, "shellsort", true);
    let cloned = progress.clone();
    progress.inc();
    cloned.inc();
    assert_eq!(progress.position(), 2);
}
