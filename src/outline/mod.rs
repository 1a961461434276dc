//! Outline module - Scene records and outline filtering
//!
//! This module provides functionality for:
//! - The strongly typed scene outline consumed by search sessions
//! - Case-insensitive substring filtering of that outline
//! - Loading an outline snapshot from a JSON file
//!
//! # Module Structure
//!
//! - `types` - Core data types (SceneRecord, LocationRef)
//! - `filter` - Query folding and outline filtering
//! - `loader` - Outline loading from the file system

mod filter;
mod loader;
mod types;

pub use types::{LocationRef, SceneRecord};

pub use filter::{contains_folded, filter_indices, filter_outline, fold_query};

pub use loader::{load_outline, parse_outline};
