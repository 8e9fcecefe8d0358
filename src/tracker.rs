use crate::conditions::{Condition, Conditions};
use crate::i18n::{LOCALE_KEY, Locale, Translator};
use crate::ids::IdGenerator;
use crate::mode::Mode;
use crate::store::{Confirm, ResourceStore};
use crate::storage::Storage;
use crate::view::{ResourceView, parse_count};

/// One tracking session: the active mode's store plus the UI-level state that
/// sits around it.
#[derive(Debug)]
pub struct Tracker<S: Storage> {
    store: ResourceStore<S>,
    edit_mode: bool,
    translator: Translator,
    conditions: Conditions,
}

impl<S: Storage> Tracker<S> {
    /// Starts in player mode with the stored (or detected) locale.
    pub fn open(storage: S, ids: IdGenerator, system_language: &str) -> Self {
        let locale = Locale::load(&storage, system_language);
        let conditions = Conditions::load(&storage);
        let store = ResourceStore::open(storage, ids, Mode::Player);
        tracing::info!(
            "tracker opened: locale {}, {} resources",
            locale.code(),
            store.resources().len()
        );
        let mut tracker = Self {
            store,
            edit_mode: false,
            translator: Translator::new(locale),
            conditions,
        };
        tracker.persist_locale();
        tracker
    }

    pub fn store(&self) -> &ResourceStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ResourceStore<S> {
        &mut self.store
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn toggle_mode(&mut self) {
        let next = self.mode().toggle();
        self.store.switch_mode(next);
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.translate(key)
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.translator = Translator::new(locale);
        self.persist_locale();
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn toggle_condition(&mut self, cond: Condition) {
        self.conditions.toggle(self.store.storage_mut(), cond);
    }

    pub fn views(&self) -> Vec<ResourceView> {
        self.store
            .resources()
            .iter()
            .map(|r| ResourceView::new(r, self.mode(), self.edit_mode, &self.translator))
            .collect()
    }

    /// Max edits commit on every change; unparseable text becomes 0.
    pub fn edit_max(&mut self, id: &str, text: &str) {
        self.store.set_max(id, parse_count(text));
    }

    /// Asks with the localized prompt before restoring defaults.
    pub fn reset_all(&mut self, confirm: &mut dyn Confirm) -> bool {
        let message = self.translator.translate("confirmReset");
        self.store.reset_all(message, confirm)
    }

    fn persist_locale(&mut self) {
        let code = self.locale().code();
        if let Err(e) = self.store.storage_mut().set(LOCALE_KEY, code) {
            tracing::warn!("failed to persist locale: {e}");
        }
    }
}
