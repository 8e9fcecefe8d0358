//! UI strings for the two supported locales.

use crate::storage::Storage;

pub const LOCALE_KEY: &str = "dh_lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    De,
    #[default]
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "de" => Some(Locale::De),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Stored choice wins; otherwise German for a `de*` system language and
    /// English for everything else.
    pub fn detect(stored: Option<&str>, system_language: &str) -> Self {
        if let Some(locale) = stored.and_then(Locale::from_code) {
            return locale;
        }
        if system_language.to_lowercase().starts_with("de") {
            Locale::De
        } else {
            Locale::En
        }
    }

    pub fn load(storage: &impl Storage, system_language: &str) -> Self {
        Self::detect(storage.get(LOCALE_KEY).as_deref(), system_language)
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::De => DE,
            Locale::En => EN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Unknown keys come back unchanged.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.locale
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

const DE: &[(&str, &str)] = &[
    ("title", "Daggerheart Tracker"),
    ("addResource", "+ Neue Ressource"),
    ("reset", "Zurücksetzen"),
    ("confirmReset", "Möchten Sie alle Ressourcen auf ihre Standardwerte zurücksetzen?"),
    ("confirmYes", "Ja"),
    ("confirmNo", "Nein"),
    ("removeResource", "Ressource entfernen"),
    ("player", "Spieler"),
    ("gamemaster", "Spielleiter"),
    ("toggleToPlayer", "Wechseln zu Spieler Modus"),
    ("toggleToGamemaster", "Wechseln zu Spielleiter Modus"),
    ("configMode", "Config Modus"),
    ("conditions", "Conditions"),
    ("hidden", "👁️ Hidden"),
    ("restrained", "⛓️ Restrained"),
    ("vulnerable", "⚡ Vulnerable"),
    ("language", "Sprache"),
    ("formTitleAddResource", "Neue Ressource hinzufügen"),
    ("formName", "Name:"),
    ("formNamePlaceholder", "z.B. Mana, Rage, Inspiration..."),
    ("formCurrent", "Aktueller Wert:"),
    ("formMax", "Maximaler Wert:"),
    ("formColor", "Farbe:"),
    ("formCancel", "Abbrechen"),
    ("formSubmit", "Hinzufügen"),
    ("resHope", "Hope"),
    ("resArmor", "Armor"),
    ("resHitpoints", "Hitpoints"),
    ("resStress", "Stress"),
    ("resFear", "Fear"),
    ("version", "v0.4.0"),
];

const EN: &[(&str, &str)] = &[
    ("title", "Daggerheart Tracker"),
    ("addResource", "+ Add Resource"),
    ("reset", "Reset"),
    ("confirmReset", "Do you want to reset all resources to their defaults?"),
    ("confirmYes", "Yes"),
    ("confirmNo", "No"),
    ("removeResource", "Remove resource"),
    ("player", "Player"),
    ("gamemaster", "Gamemaster"),
    ("toggleToPlayer", "Switch to Player mode"),
    ("toggleToGamemaster", "Switch to Gamemaster mode"),
    ("configMode", "Config Mode"),
    ("conditions", "Conditions"),
    ("hidden", "👁️ Hidden"),
    ("restrained", "⛓️ Restrained"),
    ("vulnerable", "⚡ Vulnerable"),
    ("language", "Language"),
    ("formTitleAddResource", "Add new resource"),
    ("formName", "Name:"),
    ("formNamePlaceholder", "e.g. Mana, Rage, Inspiration..."),
    ("formCurrent", "Current:"),
    ("formMax", "Max:"),
    ("formColor", "Color:"),
    ("formCancel", "Cancel"),
    ("formSubmit", "Add"),
    ("resHope", "Hope"),
    ("resArmor", "Armor"),
    ("resHitpoints", "Hitpoints"),
    ("resStress", "Stress"),
    ("resFear", "Fear"),
    ("version", "v0.4.0"),
];
