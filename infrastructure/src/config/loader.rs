//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "local-council";
const PROJECT_FILES: [&str; 2] = ["council.toml", ".council.toml"];

/// One place configuration may come from, as reported by `--show-config`
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub location: String,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Defaults plus environment only (for `--no-config`)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(None, None, None).extract().map_err(Box::new)
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path must exist
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Self::env())
    }

    /// `COUNCIL_ENDPOINT` maps onto `endpoint.url`; other `COUNCIL_*`
    /// variables (such as `COUNCIL_LOG`) are not configuration keys.
    fn env() -> Env {
        Env::prefixed("COUNCIL_")
            .only(&["endpoint"])
            .map(|_| "endpoint.url".into())
    }

    /// `$XDG_CONFIG_HOME/local-council/config.toml` (or the platform equivalent)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// The first project-level config file that exists
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Every source in priority order (highest first)
    pub fn sources(config_path: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = vec![ConfigSource {
            label: "Env",
            location: "COUNCIL_ENDPOINT".to_string(),
            found: std::env::var_os("COUNCIL_ENDPOINT").is_some(),
        }];

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match Self::project_config_path() {
            Some(path) => ConfigSource {
                label: "Project",
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                label: "Project",
                location: PROJECT_FILES
                    .iter()
                    .map(|f| format!("./{}", f))
                    .collect::<Vec<_>>()
                    .join(" or "),
                found: false,
            },
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                location: path.display().to_string(),
            });
        }

        sources.push(ConfigSource {
            label: "Default",
            location: "built-in defaults".to_string(),
            found: true,
        });
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "council.toml",
                r#"
                [endpoint]
                url = "http://project:1234"

                [debate]
                conclusion = false
                "#,
            )?;
            jail.create_file(
                "custom.toml",
                r#"
                [endpoint]
                url = "http://explicit:1234"
                "#,
            )?;

            let config = ConfigLoader::figment(
                None,
                ConfigLoader::project_config_path().as_deref(),
                Some(Path::new("custom.toml")),
            )
            .extract::<FileConfig>()?;

            assert_eq!(config.endpoint.url, "http://explicit:1234");
            assert!(!config.debate.conclusion);
            Ok(())
        });
    }

    #[test]
    fn test_env_endpoint_wins() {
        Jail::expect_with(|jail| {
            jail.create_file("council.toml", "[endpoint]\nurl = \"http://file:1234\"\n")?;
            jail.set_env("COUNCIL_ENDPOINT", "http://env:1234");
            jail.set_env("COUNCIL_LOG", "debug");

            let config = ConfigLoader::figment(None, Some(Path::new("council.toml")), None)
                .extract::<FileConfig>()?;

            assert_eq!(config.endpoint.url, "http://env:1234");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let result =
                ConfigLoader::figment(None, None, Some(Path::new("nope.toml"))).extract::<FileConfig>();
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_names_app_dir() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some_and(|p| p.to_string_lossy().contains("local-council")));
    }
}
