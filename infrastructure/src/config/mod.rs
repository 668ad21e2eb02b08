//! Configuration loading for sysprobe
//!
//! Sources are merged with figment. Priority (highest to lowest):
//!
//! 1. Command-line overrides (`--model`, `--base-url`, `--allow`, `--deny`)
//! 2. `AGENT_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./sysprobe.toml`, `./.sysprobe.toml` or `./configs/sysprobe.toml`
//! 5. Global: `<config_dir>/sysprobe/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL, FileConfig};
pub use loader::{ConfigLoader, ConfigOverrides, ConfigSources};
