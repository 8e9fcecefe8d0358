//! The per-mode resource list and its mutation contract.
//!
//! Every mutating call writes the whole list back to the mode's snapshot key
//! before returning. Unknown ids are silent no-ops.

use crate::ids::IdGenerator;
use crate::mode::Mode;
use crate::resource::{Resource, ResourceDraft};
use crate::snapshot;
use crate::storage::Storage;

/// Blocking yes/no prompt. Only `reset_all` asks.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug)]
pub struct ResourceStore<S: Storage> {
    storage: S,
    ids: IdGenerator,
    mode: Mode,
    resources: Vec<Resource>,
}

impl<S: Storage> ResourceStore<S> {
    /// Loads `mode`'s snapshot, or its template when there is none or it does
    /// not parse.
    pub fn open(storage: S, ids: IdGenerator, mode: Mode) -> Self {
        let resources = load_resources(&storage, mode);
        let mut store = Self { storage, ids, mode, resources };
        store.persist();
        store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Drops the in-memory list and loads `mode` in its place. The outgoing
    /// list is already persisted, so nothing is written for it here.
    pub fn switch_mode(&mut self, mode: Mode) {
        tracing::info!("switching to {} mode", mode.as_str());
        self.mode = mode;
        self.resources = load_resources(&self.storage, mode);
        self.persist();
    }

    /// Clamped to `[0, max]`.
    pub fn set_current(&mut self, id: &str, value: u32) {
        self.update(id, |r| r.set_current(value));
    }

    pub fn increment(&mut self, id: &str) {
        self.update(id, |r| {
            r.increment();
        });
    }

    pub fn decrement(&mut self, id: &str) {
        self.update(id, |r| {
            r.decrement();
        });
    }

    pub fn set_max(&mut self, id: &str, value: u32) {
        self.update(id, |r| r.set_max(value));
    }

    pub fn rename(&mut self, id: &str, name: &str) {
        self.update(id, |r| r.name = name.to_string());
    }

    pub fn add(&mut self, draft: ResourceDraft) -> String {
        let resources = &self.resources;
        let id = self.ids.next_id(|candidate| resources.iter().any(|r| r.id == candidate));
        tracing::debug!("adding resource {id} ({})", draft.name());
        self.resources.push(draft.into_resource(id.clone()));
        self.persist();
        id
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        self.mode.is_builtin(id)
    }

    pub fn can_remove(&self, id: &str) -> bool {
        !self.is_builtin(id) && self.get(id).is_some()
    }

    /// Returns whether a record was removed. Built-ins are never removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.is_builtin(id) {
            tracing::warn!("refusing to remove built-in resource {id}");
            return false;
        }
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        let removed = self.resources.len() != before;
        self.persist();
        removed
    }

    /// Restores the mode's template after the prompt approves. Returns whether
    /// the reset happened.
    pub fn reset_all(&mut self, message: &str, confirm: &mut dyn Confirm) -> bool {
        if !confirm.confirm(message) {
            return false;
        }
        tracing::info!("resetting {} resources to defaults", self.mode.as_str());
        self.resources = self.mode.default_resources();
        self.persist();
        true
    }

    fn update(&mut self, id: &str, f: impl FnOnce(&mut Resource)) {
        if let Some(r) = self.resources.iter_mut().find(|r| r.id == id) {
            f(r);
        }
        self.persist();
    }

    fn persist(&mut self) {
        let key = self.mode.snapshot_key();
        let written = snapshot::encode(&self.resources).and_then(|raw| self.storage.set(&key, &raw));
        if let Err(e) = written {
            tracing::warn!("failed to persist {key}: {e}");
        }
    }
}

fn load_resources<S: Storage>(storage: &S, mode: Mode) -> Vec<Resource> {
    let key = mode.snapshot_key();
    let Some(raw) = storage.get(&key) else {
        return mode.default_resources();
    };
    match snapshot::decode(&raw) {
        Ok(resources) => resources,
        Err(e) => {
            tracing::warn!("ignoring stored {key}: {e}; using defaults");
            mode.default_resources()
        }
    }
}
