// Settings module
// Board configuration loaded from settings.json

pub mod settings;

pub use settings::{BackingSettings, BoardSettings, HapticSettings, OutputSettings, PlaybackSettings};
