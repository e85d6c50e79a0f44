// User settings: the sender profile, templates and API key, kept in one storage slot.

pub mod handlers;
pub mod store;

pub use store::{FileSlotStorage, SettingsStore};
