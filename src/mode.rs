use crate::resource::Resource;
use crate::templates;

pub const SNAPSHOT_KEY_PREFIX: &str = "daggerheart-resources-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Player,
    Gamemaster,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Player => Mode::Gamemaster,
            Mode::Gamemaster => Mode::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Player => "player",
            Mode::Gamemaster => "gamemaster",
        }
    }

    pub fn snapshot_key(self) -> String {
        format!("{SNAPSHOT_KEY_PREFIX}{}", self.as_str())
    }

    pub fn default_resources(self) -> Vec<Resource> {
        templates::defaults_for(self)
    }

    pub fn is_builtin(self, id: &str) -> bool {
        templates::is_builtin(self, id)
    }

    /// Translation key for this mode's label.
    pub fn label_key(self) -> &'static str {
        self.as_str()
    }

    /// Translation key for the "switch to the other mode" hint.
    pub fn toggle_hint_key(self) -> &'static str {
        match self {
            Mode::Player => "toggleToGamemaster",
            Mode::Gamemaster => "toggleToPlayer",
        }
    }
}
