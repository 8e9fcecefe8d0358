//! Built-in resources for each mode. These seed a fresh store, are the target
//! of a reset, and mark which records cannot be removed.

use crate::mode::Mode;
use crate::resource::Resource;

struct Builtin {
    id: &'static str,
    name: &'static str,
    name_key: &'static str,
    current: u32,
    max: u32,
    color: &'static str,
}

const PLAYER: &[Builtin] = &[
    Builtin { id: "hope", name: "Hope", name_key: "resHope", current: 3, max: 6, color: "#f39c12" },
    Builtin { id: "armor", name: "Armor", name_key: "resArmor", current: 0, max: 0, color: "#3498db" },
    Builtin { id: "hitpoints", name: "Hitpoints", name_key: "resHitpoints", current: 6, max: 6, color: "#e74c3c" },
    Builtin { id: "stress", name: "Stress", name_key: "resStress", current: 0, max: 10, color: "#9b59b6" },
];

const GAMEMASTER: &[Builtin] = &[
    Builtin { id: "fear", name: "Fear", name_key: "resFear", current: 0, max: 12, color: "#8e44ad" },
];

fn builtins(mode: Mode) -> &'static [Builtin] {
    match mode {
        Mode::Player => PLAYER,
        Mode::Gamemaster => GAMEMASTER,
    }
}

pub fn defaults_for(mode: Mode) -> Vec<Resource> {
    builtins(mode)
        .iter()
        .map(|b| Resource::new(b.id, b.name, b.current, b.max, b.color))
        .collect()
}

pub fn is_builtin(mode: Mode, id: &str) -> bool {
    builtins(mode).iter().any(|b| b.id == id)
}

/// Translation key for a built-in record that still carries its template name.
/// Renamed or user-added records display their own name.
pub fn name_key(resource: &Resource) -> Option<&'static str> {
    PLAYER
        .iter()
        .chain(GAMEMASTER)
        .find(|b| b.id == resource.id && b.name == resource.name)
        .map(|b| b.name_key)
}
