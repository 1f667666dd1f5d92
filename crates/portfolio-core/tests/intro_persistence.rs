//! Intro visibility across launches
//!
//! Each "launch" reopens the redb file from disk, the way a restarted
//! desktop process would.

use portfolio_core::{IntroGate, IntroPhase, Storage, VisitFlag};
use tempfile::tempdir;

fn launch(dir: &std::path::Path) -> IntroPhase {
    let storage = Storage::open_in(dir).ok();
    IntroGate::decide(&VisitFlag::new(storage))
}

#[test]
fn intro_plays_only_on_first_launch() {
    let dir = tempdir().unwrap();

    let first = launch(dir.path());
    assert_eq!(first, IntroPhase::Shown);
    assert_eq!(first.advance(IntroPhase::Dismissed), IntroPhase::Dismissed);

    for _ in 0..3 {
        assert_eq!(launch(dir.path()), IntroPhase::Dismissed);
    }
}

#[test]
fn intro_returns_after_storage_is_cleared() {
    let dir = tempdir().unwrap();
    assert_eq!(launch(dir.path()), IntroPhase::Shown);
    assert_eq!(launch(dir.path()), IntroPhase::Dismissed);

    let storage = Storage::open_in(dir.path()).unwrap();
    VisitFlag::new(Some(storage.clone())).clear();
    assert!(!storage.has_visited().unwrap());
    drop(storage);

    assert_eq!(launch(dir.path()), IntroPhase::Shown);
}

#[test]
fn unusable_storage_degrades_to_showing_intro() {
    let _ = tracing_subscriber::fmt::try_init();
    let dir = tempdir().unwrap();
    // A regular file where the data directory should be
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let storage = Storage::open_in(&blocker);
    assert!(storage.is_err());

    let flag = VisitFlag::new(storage.ok());
    assert_eq!(IntroGate::decide(&flag), IntroPhase::Shown);
}
