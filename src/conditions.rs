use crate::storage::Storage;

pub const CONDITION_KEY_PREFIX: &str = "dh_cond_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Hidden,
    Restrained,
    Vulnerable,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Hidden, Condition::Restrained, Condition::Vulnerable];

    pub fn flag(self) -> &'static str {
        match self {
            Condition::Hidden => "hidden",
            Condition::Restrained => "restrained",
            Condition::Vulnerable => "vulnerable",
        }
    }

    pub fn storage_key(self) -> String {
        format!("{CONDITION_KEY_PREFIX}{}", self.flag())
    }

    /// The flag name doubles as the translation key.
    pub fn label_key(self) -> &'static str {
        self.flag()
    }

    fn index(self) -> usize {
        match self {
            Condition::Hidden => 0,
            Condition::Restrained => 1,
            Condition::Vulnerable => 2,
        }
    }
}

/// Status toggles kept beside, not inside, the resource list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    active: [bool; 3],
}

impl Conditions {
    pub fn load(storage: &impl Storage) -> Self {
        let mut c = Self::default();
        for cond in Condition::ALL {
            c.active[cond.index()] = storage.get(&cond.storage_key()).as_deref() == Some("1");
        }
        c
    }

    pub fn is_active(&self, cond: Condition) -> bool {
        self.active[cond.index()]
    }

    pub fn set(&mut self, storage: &mut impl Storage, cond: Condition, on: bool) {
        self.active[cond.index()] = on;
        let value = if on { "1" } else { "0" };
        if let Err(e) = storage.set(&cond.storage_key(), value) {
            tracing::warn!("failed to persist condition {}: {e}", cond.flag());
        }
    }

    pub fn toggle(&mut self, storage: &mut impl Storage, cond: Condition) {
        let on = !self.is_active(cond);
        self.set(storage, cond, on);
    }
}
