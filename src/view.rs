//! What the display surface needs to draw one resource card.

use crate::i18n::Translator;
use crate::mode::Mode;
use crate::resource::Resource;
use crate::templates;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceView {
    pub id: String,
    pub name: String,
    pub current: u32,
    pub max: u32,
    pub color: String,
    pub fill_fraction: f32,
    pub can_decrement: bool,
    pub can_increment: bool,
    pub editable: bool,
    pub removable: bool,
}

impl ResourceView {
    pub fn new(resource: &Resource, mode: Mode, edit_mode: bool, translator: &Translator) -> Self {
        let name = match templates::name_key(resource) {
            Some(key) => translator.translate(key).to_string(),
            None => resource.name.clone(),
        };
        Self {
            id: resource.id.clone(),
            name,
            current: resource.current,
            max: resource.max,
            color: resource.color.clone(),
            fill_fraction: resource.fill_fraction(),
            can_decrement: resource.can_decrement(),
            can_increment: resource.can_increment(),
            editable: edit_mode,
            removable: edit_mode && !mode.is_builtin(&resource.id),
        }
    }

    pub fn value_label(&self) -> String {
        format!("{}/{}", self.current, self.max)
    }
}

/// Reads numeric text the way a lenient form field does: leading whitespace,
/// an optional sign, then digits up to the first non-digit. No digits reads
/// as 0, negatives read as 0, and huge values saturate.
pub fn parse_count(text: &str) -> u32 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: u32 = 0;
    let mut any = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        any = true;
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    if !any || negative { 0 } else { value }
}

/// `#rrggbb` to RGB bytes; anything else is `None`.
pub fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
