use crate::resource::ResourceDraft;
use crate::view::parse_count;

pub const PALETTE: [&str; 12] = [
    "#3498db", "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6", "#1abc9c", "#e67e22", "#34495e",
    "#d35400", "#8e44ad", "#16a085", "#c0392b",
];

/// State of the "add resource" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddResourceForm {
    pub name: String,
    pub current: u32,
    pub max: u32,
    pub color: &'static str,
    open: bool,
}

impl Default for AddResourceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            current: 0,
            max: ResourceDraft::DEFAULT_MAX,
            color: PALETTE[0],
            open: false,
        }
    }
}

impl AddResourceForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens with blank fields.
    pub fn open(&mut self) {
        *self = Self { open: true, ..Self::default() };
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_current_input(&mut self, text: &str) {
        self.current = parse_count(text);
    }

    pub fn set_max_input(&mut self, text: &str) {
        self.max = parse_count(text);
    }

    /// Ignores colors outside the palette.
    pub fn pick_color(&mut self, color: &str) {
        if let Some(c) = PALETTE.iter().find(|c| **c == color) {
            self.color = *c;
        }
    }

    /// A draft and a closed form for a non-blank name; otherwise nothing
    /// happens and the form stays open.
    pub fn submit(&mut self) -> Option<ResourceDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let draft = ResourceDraft::new(name)
            .current(self.current)
            .max(self.max.max(1))
            .color(self.color);
        self.close();
        Some(draft)
    }
}
