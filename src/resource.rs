use serde::{Deserialize, Serialize};

/// A named, bounded gauge. `current` never exceeds `max` once it has passed
/// through the store or a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub current: u32,
    pub max: u32,
    pub color: String,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        current: u32,
        max: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current: current.min(max),
            max,
            color: color.into(),
        }
    }

    pub fn set_current(&mut self, value: u32) {
        self.current = value.min(self.max);
    }

    /// Lowering `max` pulls `current` down in the same step.
    pub fn set_max(&mut self, value: u32) {
        self.max = value;
        self.current = self.current.min(value);
    }

    pub fn can_increment(&self) -> bool {
        self.current < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.current > 0
    }

    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Fill proportion in `[0, 1]`; an empty gauge (`max == 0`) reads as 0.
    pub fn fill_fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn is_within_bounds(&self) -> bool {
        self.current <= self.max
    }

    /// Same record minus identity; used for content comparisons.
    pub fn to_draft(&self) -> ResourceDraft {
        ResourceDraft {
            name: self.name.clone(),
            current: self.current,
            max: self.max,
            color: self.color.clone(),
        }
    }
}

/// Everything a record needs except its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    name: String,
    current: u32,
    max: u32,
    color: String,
}

impl ResourceDraft {
    pub const DEFAULT_MAX: u32 = 10;
    pub const DEFAULT_COLOR: &'static str = "#3498db";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: 0,
            max: Self::DEFAULT_MAX,
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }

    pub fn current(mut self, current: u32) -> Self {
        self.current = current;
        self
    }

    pub fn max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_resource(self, id: impl Into<String>) -> Resource {
        Resource::new(id, self.name, self.current, self.max, self.color)
    }
}
