//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DefaultsConfig, ResolveOptions, ResolvedConfig,
    resolve_config, validate_endpoint,
};
