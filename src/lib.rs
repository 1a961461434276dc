//! Scene heading search for screenplay documents
//!
//! This library provides the outline filter and the keyboard-driven search
//! session behind a "jump to scene" window, plus the export and share
//! boundary used when sending a document to the platform share sheet.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod outline;
pub mod session;
pub mod stdin_commands;
