//! Shared types, error model, and configuration for Leadbase.
//!
//! This crate is the foundation depended on by all other Leadbase crates.
//! It provides:
//! - [`LeadbaseError`] — the unified error type
//! - Domain records ([`Contact`], [`Company`], [`PipelineDeal`], [`Settings`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, EnrichmentConfig, PLACEHOLDER_API_KEY, SettingsConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from, resolve_api_key, save_config,
};
pub use error::{LeadbaseError, Result};
pub use types::{
    Company, Contact, PipelineDeal, Settings, SettingsUpdate, UNKNOWN_COMPANY, UNKNOWN_CONTACT,
};
