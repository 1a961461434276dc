//! Configuration type definitions
//!
//! This module contains all the struct and enum definitions for configuration.

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::export::ShareTarget;

// ============================================
// SEARCH BEHAVIOUR
// ============================================

/// What a backspace does when the search field is already empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackspacePolicy {
    /// Treat it like any other edit; the session stays open
    #[default]
    Ignore,
    /// Close the search without navigating
    Cancel,
}

// ============================================
// SHARE CONFIG
// ============================================

/// Configuration for the share sheet shown after export
///
/// Hosts pass `excluded_targets` to [`crate::export::export_and_share`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareConfig {
    /// Share activities to hide (default: social posting, contacts, reading list)
    #[serde(default = "default_excluded_targets")]
    pub excluded_targets: Vec<ShareTarget>,
}

fn default_excluded_targets() -> Vec<ShareTarget> {
    DEFAULT_EXCLUDED_SHARE_TARGETS.to_vec()
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            excluded_targets: default_excluded_targets(),
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Backspace on an empty query (default: ignore)
    #[serde(default)]
    pub backspace_on_empty: BackspacePolicy,
    /// Share sheet settings
    #[serde(default)]
    pub share: ShareConfig,
}
