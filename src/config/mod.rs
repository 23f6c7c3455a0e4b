#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Narrowest and widest text gauge accepted from configuration.
pub const GAUGE_WIDTH_RANGE: (usize, usize) = (10, 60);
