// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, fs, path::Path};
use tracing::debug;

pub const DEFAULT_SITE_BASE: &str = "https://www.basketball-reference.com/";
pub const DEFAULT_WIDGET_BASE: &str = "https://widgets.sports-reference.com/wg.fcgi";

/// Runtime settings for the fetcher, the request builder and the CLI.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Root of the statistics site; roster pages hang off it.
    pub site_base: String,
    /// Widget proxy endpoint rendering a single embedded table.
    pub widget_base: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Worker threads used by the CLI when a season range is requested.
    pub parallel_seasons: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_base: DEFAULT_SITE_BASE.to_string(),
            widget_base: DEFAULT_WIDGET_BASE.to_string(),
            user_agent: concat!("bbref_tables/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            parallel_seasons: 2,
        }
    }
}

impl Config {
    /// Read a YAML file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let cfg: Config =
            serde_yaml::from_str(&text).with_context(|| format!("parsing config {:?}", path))?;
        debug!(?path, "loaded config file");
        Ok(cfg)
    }

    /// Defaults, then the file named by `BBREF_CONFIG`, then `BBREF_*` overrides.
    pub fn from_env() -> Result<Self> {
        let mut cfg = match env::var("BBREF_CONFIG") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(v) = env::var("BBREF_SITE_BASE") {
            cfg.site_base = v;
        }
        if let Ok(v) = env::var("BBREF_WIDGET_BASE") {
            cfg.widget_base = v;
        }
        if let Ok(v) = env::var("BBREF_USER_AGENT") {
            cfg.user_agent = v;
        }
        if let Ok(v) = env::var("BBREF_TIMEOUT_SECS") {
            cfg.timeout_secs = v
                .parse()
                .with_context(|| format!("BBREF_TIMEOUT_SECS `{}` is not a number", v))?;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_yaml_keeps_defaults() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "timeout_secs: 5\nparallel_seasons: 4")?;

        let cfg = Config::load(tmp.path())?;
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.parallel_seasons, 4);
        assert_eq!(cfg.site_base, DEFAULT_SITE_BASE);
        assert_eq!(cfg.widget_base, DEFAULT_WIDGET_BASE);
        Ok(())
    }

    #[test]
    fn test_malformed_yaml_is_reported() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "timeout_secs: [not, a, number]")?;
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
        Ok(())
    }
}
