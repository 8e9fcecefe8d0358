pub mod conditions;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod ids;
pub mod mode;
pub mod resource;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod templates;
pub mod tracker;
pub mod view;

// Re-exports for convenience in tests and integration users.
pub use conditions::{Condition, Conditions};
pub use config::TrackerConfig;
pub use error::{Error, Result};
pub use form::{AddResourceForm, PALETTE};
pub use i18n::{Locale, Translator};
pub use ids::IdGenerator;
pub use mode::Mode;
pub use resource::{Resource, ResourceDraft};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Confirm, ResourceStore};
pub use tracker::Tracker;
pub use view::{ResourceView, parse_count, parse_hex_color};
