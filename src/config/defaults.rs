//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

use crate::export::ShareTarget;

/// Where `load_config` looks for user settings
pub const DEFAULT_CONFIG_PATH: &str = "~/.scene-search/config.json";

/// Share activities hidden from the share sheet unless the user overrides them.
/// None of these accept a screenplay file in a useful way.
pub const DEFAULT_EXCLUDED_SHARE_TARGETS: &[ShareTarget] = &[
    ShareTarget::AssignToContact,
    ShareTarget::AddToReadingList,
    ShareTarget::PostToFacebook,
    ShareTarget::PostToVimeo,
    ShareTarget::PostToTwitter,
    ShareTarget::PostToWeibo,
    ShareTarget::PostToFlickr,
    ShareTarget::PostToTencentWeibo,
];
