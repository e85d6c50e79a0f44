pub mod lead;
pub mod settings;

pub use lead::Lead;
pub use settings::{SettingsPatch, UserSettings};
