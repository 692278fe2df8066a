//! bird authentication tokens.
//!
//! Tokens come from the process environment first and are then overridden by
//! the bird credentials file. The result is handed to the collector as a
//! plain value; nothing here writes to the process environment.

use std::path::Path;

use anyhow::{Context, Result};

use super::settings::{AUTH_TOKEN_KEY, CT0_KEY};


/// Optional session tokens passed to every bird invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub auth_token: Option<String>,
    pub ct0: Option<String>,
}


impl Credentials {
    /// Read tokens from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read tokens through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            auth_token: non_empty(AUTH_TOKEN_KEY),
            ct0: non_empty(CT0_KEY),
        }
    }

    /// Override tokens with values found in a `KEY=value` file.
    ///
    /// A missing file leaves the tokens untouched. Unknown keys and empty
    /// values are ignored.
    pub fn merge_file(mut self, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(self);
        }

        let entries = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to read credentials: {}", path.display()))?;

        for entry in entries {
            let (key, value) = match entry {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping malformed line");
                    continue;
                }
            };
            let value = value.trim().to_string();
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                AUTH_TOKEN_KEY => self.auth_token = Some(value),
                CT0_KEY => self.ct0 = Some(value),
                _ => {}
            }
        }

        Ok(self)
    }

    /// Environment variables to set on the bird child process.
    pub fn env_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(token) = &self.auth_token {
            pairs.push((AUTH_TOKEN_KEY, token.as_str()));
        }
        if let Some(ct0) = &self.ct0 {
            pairs.push((CT0_KEY, ct0.as_str()));
        }
        pairs
    }
}


/// Load credentials from the environment, overridden by the given file.
pub fn load_credentials(env_file: &Path) -> Result<Credentials> {
    Credentials::from_env().merge_file(env_file)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let creds = Credentials::from_lookup(lookup_from(&[("AUTH_TOKEN", "abc"), ("CT0", "")]));
        assert_eq!(creds.auth_token.as_deref(), Some("abc"));
        assert_eq!(creds.ct0, None);
    }

    #[test]
    fn test_file_overrides_environment() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join(".env");
        std::fs::write(&path, "AUTH_TOKEN=from-file\nOTHER=ignored\n").unwrap();

        let creds = Credentials::from_lookup(lookup_from(&[("AUTH_TOKEN", "from-env"), ("CT0", "ct0-env")]))
            .merge_file(&path)
            .unwrap();

        assert_eq!(creds.auth_token.as_deref(), Some("from-file"));
        assert_eq!(creds.ct0.as_deref(), Some("ct0-env"));
    }

    #[test]
    fn test_empty_file_value_keeps_environment() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join(".env");
        std::fs::write(&path, "AUTH_TOKEN=\nCT0=from-file\n").unwrap();

        let creds = Credentials::from_lookup(lookup_from(&[("AUTH_TOKEN", "from-env")]))
            .merge_file(&path)
            .unwrap();

        assert_eq!(creds.auth_token.as_deref(), Some("from-env"));
        assert_eq!(creds.ct0.as_deref(), Some("from-file"));
        assert_eq!(
            creds.env_pairs(),
            vec![("AUTH_TOKEN", "from-env"), ("CT0", "from-file")]
        );
    }

    #[test]
    fn test_missing_file_keeps_environment() {
        let tmp_dir = TempDir::new().unwrap();
        let creds = Credentials::from_lookup(lookup_from(&[("CT0", "x")]))
            .merge_file(&tmp_dir.path().join("absent.env"))
            .unwrap();

        assert_eq!(creds.ct0.as_deref(), Some("x"));
        assert_eq!(creds.auth_token, None);
    }

    #[test]
    fn test_env_pairs() {
        let creds = Credentials {
            auth_token: Some("a".to_string()),
            ct0: None,
        };
        assert_eq!(creds.env_pairs(), vec![("AUTH_TOKEN", "a")]);
        assert!(Credentials::default().env_pairs().is_empty());
    }
}
