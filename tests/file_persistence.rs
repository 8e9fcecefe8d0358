use daggerheart_tracker::*;

fn clock() -> u64 {
    1_700_000_000_000
}

#[test]
fn session_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut tracker = Tracker::open(FileStorage::new(dir.path()), IdGenerator::with_clock(clock, 1), "de_DE");
    assert_eq!(tracker.locale(), Locale::De);
    tracker.store_mut().set_current("stress", 4);
    let mana = tracker.store_mut().add(ResourceDraft::new("Mana").current(1).max(3));
    tracker.toggle_mode();
    tracker.store_mut().set_current("fear", 7);
    tracker.toggle_condition(Condition::Vulnerable);
    tracker.set_locale(Locale::En);
    drop(tracker);

    let tracker = Tracker::open(FileStorage::new(dir.path()), IdGenerator::with_clock(clock, 1), "de_DE");
    assert_eq!(tracker.mode(), Mode::Player);
    assert_eq!(tracker.locale(), Locale::En);
    assert!(tracker.conditions().is_active(Condition::Vulnerable));
    assert_eq!(tracker.store().get("stress").unwrap().current, 4);
    assert_eq!(tracker.store().get(&mana).unwrap().name, "Mana");

    let gm = std::fs::read_to_string(dir.path().join("daggerheart-resources-gamemaster")).unwrap();
    let gm: Vec<Resource> = serde_json::from_str(&gm).unwrap();
    assert_eq!(gm[0].current, 7);
}

#[test]
fn corrupt_file_is_replaced_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("daggerheart-resources-player"), "not json").unwrap();

    let store = ResourceStore::open(FileStorage::new(dir.path()), IdGenerator::with_clock(clock, 1), Mode::Player);
    assert_eq!(store.resources(), Mode::Player.default_resources().as_slice());

    let raw = std::fs::read_to_string(dir.path().join("daggerheart-resources-player")).unwrap();
    assert_eq!(snapshot_len(&raw), 4);
}

fn snapshot_len(raw: &str) -> usize {
    daggerheart_tracker::snapshot::decode(raw).unwrap().len()
}
