use daggerheart_tracker::*;
use serde_json::json;

fn clock() -> u64 {
    1_700_000_000_000
}

fn player_store() -> ResourceStore<MemoryStorage> {
    ResourceStore::open(MemoryStorage::new(), IdGenerator::with_clock(clock, 9), Mode::Player)
}

fn contents(resources: &[Resource]) -> Vec<ResourceDraft> {
    resources.iter().map(Resource::to_draft).collect()
}

#[test]
fn set_max_never_leaves_current_above_max() {
    let mut store = player_store();
    for id in ["hope", "armor", "hitpoints", "stress"] {
        for m in [0, 1, 3, 20] {
            store.set_max(id, m);
            let r = store.get(id).unwrap();
            assert!(r.current <= r.max, "{id} at {}/{}", r.current, r.max);
        }
    }
}

#[test]
fn controls_respect_bounds() {
    let mut store = player_store();
    store.decrement("stress");
    assert_eq!(store.get("stress").unwrap().current, 0);

    store.increment("hitpoints");
    assert_eq!(store.get("hitpoints").unwrap().current, 6);
}

#[test]
fn reset_restores_exact_player_builtins() {
    let mut store = player_store();
    store.add(ResourceDraft::new("Mana").max(5));
    store.rename("hope", "Hoffnung");
    store.set_max("stress", 3);

    assert!(store.reset_all("reset?", &mut |_: &str| true));
    let ids: Vec<_> = store.resources().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["hope", "armor", "hitpoints", "stress"]);
    assert_eq!(store.resources(), Mode::Player.default_resources().as_slice());
}

#[test]
fn add_then_remove_is_content_neutral() {
    let mut store = player_store();
    store.set_current("hope", 5);
    let before = contents(store.resources());

    let id = store.add(ResourceDraft::new("Mana").current(0).max(10).color("#3498db"));
    assert_eq!(store.resources().len(), before.len() + 1);
    store.remove(&id);
    assert_eq!(contents(store.resources()), before);
}

#[test]
fn mode_round_trip_through_snapshot() {
    let mut store = player_store();
    store.set_current("hope", 1);
    store.add(ResourceDraft::new("Rage").current(2).max(4).color("#e74c3c"));
    let persisted = store.storage().get("daggerheart-resources-player").unwrap();
    let before = store.resources().to_vec();

    store.switch_mode(Mode::Gamemaster);
    store.switch_mode(Mode::Player);
    assert_eq!(store.resources(), before.as_slice());
    assert_eq!(store.storage().get("daggerheart-resources-player").unwrap(), persisted);
}

#[test]
fn zero_max_pins_controls() {
    let store = player_store();
    let view = ResourceView::new(store.get("armor").unwrap(), Mode::Player, false, &Translator::default());
    assert_eq!(view.fill_fraction, 0.0);
    assert!(!view.can_increment);
    assert!(!view.can_decrement);
}

#[test]
fn clamp_scenario_from_three_of_six() {
    let mut store = player_store();
    let hope = store.get("hope").unwrap();
    assert_eq!((hope.current, hope.max), (3, 6));

    store.set_max("hope", 2);
    let hope = store.get("hope").unwrap();
    assert_eq!((hope.current, hope.max), (2, 2));

    store.set_current("hope", 2);
    let view = ResourceView::new(store.get("hope").unwrap(), Mode::Player, false, &Translator::default());
    assert!(!view.can_increment);
    assert!(view.can_decrement);
}

#[test]
fn stored_snapshot_is_loaded_verbatim() {
    let mut storage = MemoryStorage::new();
    let saved = json!([
        {"id": "fear", "name": "Angst", "current": 5, "max": 12, "color": "#8e44ad"},
        {"id": "custom-1", "name": "Countdown", "current": 2, "max": 3, "color": "#1abc9c"}
    ]);
    storage.set("daggerheart-resources-gamemaster", &saved.to_string()).unwrap();

    let store = ResourceStore::open(storage, IdGenerator::with_clock(clock, 9), Mode::Gamemaster);
    assert_eq!(store.resources().len(), 2);
    assert_eq!(store.get("fear").unwrap().name, "Angst");
    assert!(store.can_remove("custom-1"));
    assert!(!store.can_remove("fear"));
}

#[test]
fn malformed_snapshot_falls_back_to_defaults() {
    let mut storage = MemoryStorage::new();
    let bad = json!([{"id": "fear", "name": "Fear", "current": 13, "max": 12, "color": "#8e44ad"}]);
    storage.set("daggerheart-resources-gamemaster", &bad.to_string()).unwrap();

    let store = ResourceStore::open(storage, IdGenerator::with_clock(clock, 9), Mode::Gamemaster);
    assert_eq!(store.resources(), Mode::Gamemaster.default_resources().as_slice());
}

#[test]
fn creation_form_feeds_store() {
    let mut tracker = Tracker::open(MemoryStorage::new(), IdGenerator::with_clock(clock, 9), "en");
    tracker.toggle_edit_mode();

    let mut form = AddResourceForm::default();
    form.open();
    assert!(form.submit().is_none());

    form.name = " Inspiration ".to_string();
    form.set_current_input("2");
    form.set_max_input("5");
    form.pick_color(PALETTE[4]);
    let draft = form.submit().unwrap();
    let id = tracker.store_mut().add(draft);

    let views = tracker.views();
    let last = views.last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.name, "Inspiration");
    assert_eq!(last.value_label(), "2/5");
    assert_eq!(last.color, "#9b59b6");
    assert!(last.removable);
    assert!(views.iter().filter(|v| v.removable).count() == 1);
}
