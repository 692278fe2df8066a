//! bird CLI client.
//!
//! Each call is one blocking subprocess invocation with no timeout. Session
//! tokens are passed to the child as `AUTH_TOKEN` / `CT0` environment
//! variables.

use std::process::{Command, Output};

use crate::config::Credentials;
use crate::models::{AccountInfo, Tweet};

use super::bird_parser::{parse_timeline, parse_whoami};
use super::{FetchError, TwitterSource};


/// Default bird executable, resolved through `PATH`.
pub const DEFAULT_BIRD_BIN: &str = "bird";


/// [`TwitterSource`] backed by the bird command-line tool.
#[derive(Debug, Clone)]
pub struct BirdCli {
    program: String,
    credentials: Credentials,
}


impl BirdCli {
    pub fn new(program: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            program: program.into(),
            credentials,
        }
    }

    /// Run bird with the given arguments and return its output on success.
    fn run(&self, args: &[&str]) -> Result<Output, FetchError> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(%command, "running bird");

        let output = Command::new(&self.program)
            .args(args)
            .envs(self.credentials.env_pairs())
            .output()
            .map_err(|source| FetchError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FetchError::NonZeroExit {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(%command, bytes = output.stdout.len(), "bird finished");
        Ok(output)
    }
}


impl TwitterSource for BirdCli {
    fn account_info(&self) -> Result<AccountInfo, FetchError> {
        let output = self.run(&["whoami"])?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        parse_whoami(&stdout).map_err(|reason| FetchError::Parse {
            command: "bird whoami".to_string(),
            reason,
        })
    }

    fn recent_tweets(&self, limit: usize) -> Result<Vec<Tweet>, FetchError> {
        let limit_arg = limit.to_string();
        let output = self.run(&["home", "-n", &limit_arg, "--json"])?;

        parse_timeline(&output.stdout, limit).map_err(|reason| FetchError::Parse {
            command: "bird home".to_string(),
            reason,
        })
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_script(dir: &Path, body: &str) -> String {
        let path = dir.join("bird");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_account_info_from_script() {
        let tmp_dir = TempDir::new().unwrap();
        let program = write_script(
            tmp_dir.path(),
            r#"echo "@tester"; echo "Followers: 10"; echo "Following: 2"; echo "Posts: 3""#,
        );

        let info = BirdCli::new(program, Credentials::default()).account_info().unwrap();
        assert_eq!(info.username.as_deref(), Some("tester"));
        assert_eq!(info.followers, 10);
    }

    #[test]
    fn test_credentials_reach_child() {
        let tmp_dir = TempDir::new().unwrap();
        let program = write_script(
            tmp_dir.path(),
            r#"printf '[{"id":"%s","text":"%s"}]' "$AUTH_TOKEN" "$CT0""#,
        );
        let credentials = Credentials {
            auth_token: Some("token".to_string()),
            ct0: Some("csrf".to_string()),
        };

        let tweets = BirdCli::new(program, credentials).recent_tweets(5).unwrap();
        assert_eq!(tweets[0].id, "token");
        assert_eq!(tweets[0].text, "csrf");
    }

    #[test]
    fn test_non_zero_exit() {
        let tmp_dir = TempDir::new().unwrap();
        let program = write_script(tmp_dir.path(), "echo 'not logged in' >&2; exit 3");

        let err = BirdCli::new(program, Credentials::default()).account_info().unwrap_err();
        match err {
            FetchError::NonZeroExit { stderr, .. } => assert_eq!(stderr, "not logged in"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_binary() {
        let tmp_dir = TempDir::new().unwrap();
        let program = tmp_dir.path().join("nope").to_string_lossy().into_owned();

        let err = BirdCli::new(program, Credentials::default()).recent_tweets(10).unwrap_err();
        assert!(matches!(err, FetchError::Spawn { .. }));
    }
}
