//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "fairfinder";
const PROJECT_FILES: [&str; 2] = ["fairfinder.toml", ".fairfinder.toml"];
const ENV_PREFIX: &str = "FAIRFINDER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FAIRFINDER_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./fairfinder.toml` or `./.fairfinder.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/fairfinder/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/fairfinder/config.toml if set,
    /// otherwise falls back to ~/.config/fairfinder/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./fairfinder.toml or ./.fairfinder.toml");
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
    use fairfinder_domain::OutputFormat;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert!(config.cache.enabled);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("fairfinder"));
    }

    #[test]
    fn test_project_file_then_explicit_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "fairfinder.toml",
                r#"
[search]
province = "Zhejiang"
city = "Hangzhou"

[output]
format = "charts"
"#,
            )?;
            jail.create_file(
                "override.toml",
                r#"
[search]
city = "Ningbo"
"#,
            )?;
            jail.set_env("FAIRFINDER_OUTPUT__FORMAT", "json");

            let explicit = PathBuf::from("override.toml");
            let config: FileConfig = ConfigLoader::figment(Some(&explicit)).extract()?;

            assert_eq!(config.search.province, "Zhejiang");
            assert_eq!(config.search.city, "Ningbo");
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            // Untouched sections keep their defaults
            assert_eq!(config.gemini.timeout_seconds, 120);
            Ok(())
        });
    }
}
