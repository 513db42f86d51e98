//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `DOCQA_*` env vars.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// How many documents and sentences a retrieval returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalOptions {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self { file_matches: 1, sentence_matches: 1 }
    }
}

impl RetrievalOptions {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.file_matches == 0 {
            return Err(Error::InvalidConfig("retrieval.file_matches must be at least 1".into()));
        }
        if self.sentence_matches == 0 {
            return Err(Error::InvalidConfig("retrieval.sentence_matches must be at least 1".into()));
        }
        Ok(())
    }
}

/// Which directory entries count as corpus documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusOptions {
    /// File extensions to load, without the dot. Empty loads every file.
    pub extensions: Vec<String>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self { extensions: vec!["txt".to_string()] }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub retrieval: RetrievalOptions,
    pub corpus: CorpusOptions,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::from_figment(Self::figment_for_env(&env_name))
    }

    /// Defaults, then `config.toml`, then the env-specific file, then `DOCQA_*`.
    pub fn figment_for_env(env_name: &str) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("config.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment.merge(Env::prefixed("DOCQA_").split("__"))
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let config = Self { figment };
        config.settings()?;
        Ok(config)
    }

    /// The typed settings, validated.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;
        settings.retrieval.validate()?;
        Ok(settings)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_return_one_match_each() {
        let options = RetrievalOptions::default();
        assert_eq!(options.file_matches, 1);
        assert_eq!(options.sentence_matches, 1);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_matches_is_rejected() {
        let options = RetrievalOptions { file_matches: 0, sentence_matches: 1 };
        assert!(matches!(options.validate(), Err(Error::InvalidConfig(_))));
        let options = RetrievalOptions { file_matches: 1, sentence_matches: 0 };
        assert!(matches!(options.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn figment_overrides_merge_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[retrieval]\nfile_matches = 3\n")?;
            jail.set_env("DOCQA_RETRIEVAL__SENTENCE_MATCHES", "2");
            let config = Config::from_figment(Config::figment_for_env("dev")).expect("config");
            let settings = config.settings().expect("settings");
            assert_eq!(settings.retrieval, RetrievalOptions { file_matches: 3, sentence_matches: 2 });
            assert_eq!(settings.corpus.extensions, vec!["txt".to_string()]);
            Ok(())
        });
    }

    #[test]
    fn invalid_file_values_fail_to_load() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[retrieval]\nfile_matches = 0\n")?;
            assert!(Config::from_figment(Config::figment_for_env("dev")).is_err());
            Ok(())
        });
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let base = Path::new("/srv/corpora");
        assert_eq!(resolve_with_base(base, "small"), PathBuf::from("/srv/corpora/small"));
        assert_eq!(resolve_with_base(base, "/abs/dir"), PathBuf::from("/abs/dir"));
    }
}
