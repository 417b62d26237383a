//! Operator configuration for endorsement checking.
//!
//! Embedding servers can flatten [`EndorsementConfig`] into their own clap
//! parser, or read it from a TOML table:
//!
//! ```toml
//! allow_unendorsed_channels = false
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::Args, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndorsementConfig {
    /// Accept activities whose channel is not endorsed by their credential.
    /// Only for debugging a channel that cannot sign tokens yet. Never enable
    /// in production.
    ///
    /// The environment variable accepts `1`/`true`/`yes`/`on`/`y`/`t` and
    /// `0`/`false`/`no`/`off`/`n`/`f`, case-insensitively.
    #[arg(
        long,
        env = "ALLOW_UNENDORSED_CHANNELS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub allow_unendorsed_channels: bool,
}

impl EndorsementConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Invalid endorsement config")
    }

    /// Load from a TOML file. The file must exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("Bad config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        endorsements: EndorsementConfig,
    }

    #[test]
    fn test_default_is_strict() {
        assert!(!EndorsementConfig::default().allow_unendorsed_channels);
        assert_eq!(EndorsementConfig::from_toml_str("").unwrap(), EndorsementConfig::default());
    }

    #[test]
    fn test_cli_flag() {
        let cli = Cli::try_parse_from(["server", "--allow-unendorsed-channels"]).unwrap();
        assert!(cli.endorsements.allow_unendorsed_channels);
    }

    /// Every case lives in one test: the process environment is shared.
    #[test]
    fn test_env_var() {
        let parse = || {
            Cli::try_parse_from(["server"]).map(|cli| cli.endorsements.allow_unendorsed_channels)
        };

        for (value, expected) in [
            ("1", true),
            ("true", true),
            ("yes", true),
            ("ON", true),
            ("0", false),
            ("false", false),
            ("no", false),
        ] {
            unsafe { std::env::set_var("ALLOW_UNENDORSED_CHANNELS", value) };
            assert_eq!(parse().unwrap(), expected, "ALLOW_UNENDORSED_CHANNELS={value}");
        }

        unsafe { std::env::set_var("ALLOW_UNENDORSED_CHANNELS", "maybe") };
        assert!(parse().is_err());

        unsafe { std::env::remove_var("ALLOW_UNENDORSED_CHANNELS") };
        assert!(!parse().unwrap());
    }

    #[test]
    fn test_toml() {
        let config = EndorsementConfig::from_toml_str("allow_unendorsed_channels = true").unwrap();
        assert!(config.allow_unendorsed_channels);
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        assert!(EndorsementConfig::from_toml_str("allow_unendorsed = true").is_err());
        assert!(EndorsementConfig::from_toml_str("allow_unendorsed_channels = \"yes\"").is_err());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "allow_unendorsed_channels = true").unwrap();
        let config = EndorsementConfig::load(file.path()).unwrap();
        assert!(config.allow_unendorsed_channels);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("endorsements.toml");
        let err = EndorsementConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("endorsements.toml"));
    }
}
