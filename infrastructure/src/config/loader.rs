//! Configuration loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use sysprobe_application::AgentSettings;
use tracing::{debug, info};

/// Project-level file names, checked in order; the first one found wins.
const PROJECT_CONFIG_FILES: [&str; 3] = ["sysprobe.toml", ".sysprobe.toml", "configs/sysprobe.toml"];

const ENV_PREFIX: &str = "AGENT_";

/// Values given on the command line. `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(rename = "allowed_tools", skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
    #[serde(rename = "denied_tools", skip_serializing_if = "Option::is_none")]
    pub deny: Option<Vec<String>>,
}

/// Config files taking part in a load, lowest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
}

impl ConfigSources {
    /// Discover existing global and project files. `no_config` skips files
    /// entirely, including `explicit`.
    pub fn discover(explicit: Option<PathBuf>, no_config: bool) -> Self {
        if no_config {
            return Self::default();
        }
        Self {
            global: ConfigLoader::global_config_path().filter(|p| p.exists()),
            project: ConfigLoader::project_config_path(),
            explicit,
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from all sources with proper priority
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. Global: `<config_dir>/sysprobe/config.toml`
    /// 3. Project: `./sysprobe.toml`, `./.sysprobe.toml` or `./configs/sysprobe.toml`
    /// 4. Explicit `--config <path>`
    /// 5. `AGENT_*` environment variables
    /// 6. Command-line overrides
    pub fn load(
        sources: &ConfigSources,
        overrides: &ConfigOverrides,
    ) -> Result<AgentSettings, ConfigError> {
        if let Some(path) = &sources.explicit
            && !path.is_file()
        {
            return Err(ConfigError::MissingFile(path.clone()));
        }
        let config: FileConfig = Self::figment(sources, overrides)
            .extract()
            .map_err(Box::new)?;
        let settings = config.into_settings()?;
        info!(
            model = %settings.model,
            base_url = %settings.base_url,
            allowed = ?settings.allowed_tools,
            denied = ?settings.denied_tools,
            "Configuration loaded"
        );
        Ok(settings)
    }

    /// The merged provider stack, before extraction.
    pub fn figment(sources: &ConfigSources, overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [&sources.global, &sources.project, &sources.explicit]
            .into_iter()
            .flatten()
        {
            debug!(path = %path.display(), "Merging config file");
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sysprobe").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for `--show-config`)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] CLI:     --model, --base-url, --allow, --deny");
        println!("  [     ] Env:     {}API_KEY, {}MODEL, ...", ENV_PREFIX, ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:5}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: {}", PROJECT_CONFIG_FILES.join(", ")),
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_config_discovers_nothing() {
        let sources = ConfigSources::discover(Some(PathBuf::from("x.toml")), true);
        assert_eq!(sources, ConfigSources::default());
    }

    #[test]
    fn test_global_config_path_names_app() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.ends_with("sysprobe/config.toml"));
    }

    #[test]
    fn test_project_config_first_found_wins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ConfigLoader::project_config_in(dir.path()), None);

        std::fs::create_dir(dir.path().join("configs")).unwrap();
        std::fs::write(dir.path().join("configs/sysprobe.toml"), "").unwrap();
        std::fs::write(dir.path().join(".sysprobe.toml"), "").unwrap();

        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join(".sysprobe.toml"))
        );
    }

    #[test]
    fn test_layering_files_env_and_cli() {
        let global = write_toml(
            r#"
            api_key = "sk-global"
            model = "global-model"
            base_url = "http://global/v1"
            "#,
        );
        let explicit = write_toml(
            r#"
            model = "explicit-model"
            denied_tools = ["wget"]
            "#,
        );
        let sources = ConfigSources {
            global: Some(global.path().to_path_buf()),
            project: None,
            explicit: Some(explicit.path().to_path_buf()),
        };

        Jail::expect_with(|jail| {
            jail.set_env("AGENT_BASE_URL", "http://env/v1");
            jail.set_env("AGENT_ALLOWED_TOOLS", "ps,grep");

            let overrides = ConfigOverrides {
                model: Some("cli-model".to_string()),
                ..ConfigOverrides::default()
            };
            let settings = ConfigLoader::load(&sources, &overrides).unwrap();

            assert_eq!(settings.api_key, "sk-global");
            assert_eq!(settings.model, "cli-model");
            assert_eq!(settings.base_url, "http://env/v1");
            assert_eq!(
                settings.allowed_tools.iter().map(String::as_str).collect::<Vec<_>>(),
                vec!["grep", "ps"]
            );
            assert!(settings.denied_tools.contains("wget"));
            Ok(())
        });
    }

    #[test]
    fn test_cli_lists_override_env() {
        Jail::expect_with(|jail| {
            jail.set_env("AGENT_API_KEY", "sk-env");
            jail.set_env("AGENT_DENIED_TOOLS", "ps");

            let overrides = ConfigOverrides {
                allow: Some(vec!["lsof".to_string()]),
                deny: Some(vec![]),
                ..ConfigOverrides::default()
            };
            let settings = ConfigLoader::load(&ConfigSources::default(), &overrides).unwrap();

            assert_eq!(settings.allowed_tools.len(), 1);
            assert!(settings.allowed_tools.contains("lsof"));
            assert!(settings.denied_tools.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_defaults_without_key_fail() {
        Jail::expect_with(|_jail| {
            let err = ConfigLoader::load(&ConfigSources::default(), &ConfigOverrides::default())
                .unwrap_err();
            assert!(matches!(err, ConfigError::MissingApiKey));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let sources = ConfigSources {
            explicit: Some(missing.clone()),
            ..ConfigSources::default()
        };
        Jail::expect_with(|jail| {
            jail.set_env("AGENT_API_KEY", "sk");
            let err = ConfigLoader::load(&sources, &ConfigOverrides::default()).unwrap_err();
            assert!(matches!(err, ConfigError::MissingFile(ref p) if *p == missing));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_extract_error() {
        let bad = write_toml("model = [1, 2");
        let sources = ConfigSources {
            explicit: Some(bad.path().to_path_buf()),
            ..ConfigSources::default()
        };
        Jail::expect_with(|jail| {
            jail.set_env("AGENT_API_KEY", "sk");
            let err = ConfigLoader::load(&sources, &ConfigOverrides::default()).unwrap_err();
            assert!(matches!(err, ConfigError::Extract(_)));
            Ok(())
        });
    }
}
