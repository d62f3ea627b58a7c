use std::borrow::Cow;
use std::time::Duration;

use anyhow::Context;
use chrono::TimeDelta;

pub mod adapter_github;
pub mod domain;
pub mod tracing;

const DEFAULT_TOKEN_FILE: &str = "./token";
const DEFAULT_MAX_DAYS: i64 = 120;

pub(crate) fn with_env_or(name: &str, default_value: &'static str) -> Cow<'static, str> {
    std::env::var(name)
        .map(Cow::Owned)
        .unwrap_or(Cow::Borrowed(default_value))
}

pub(crate) fn maybe_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

pub(crate) fn with_env_as_or<T>(name: &str, default_value: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let Ok(value) = std::env::var(name) else {
        return Ok(default_value);
    };
    value
        .parse::<T>()
        .with_context(|| format!("unable to parse value from {name:?}"))
}

/// Purge aged releases and binary assets from a GitHub repository.
///
/// Dry-run by default: nothing is deleted until `--dry-run=false` is passed.
#[derive(Debug, clap::Parser)]
#[command(name = "relpurge", version, about)]
pub struct Args {
    /// User or organization owning the repository.
    #[arg(long)]
    owner: String,
    /// Repository name.
    #[arg(long)]
    repo: String,
    /// Path to a file containing a personal access token.
    #[arg(long, default_value = DEFAULT_TOKEN_FILE)]
    token_file: std::path::PathBuf,
    /// Delete every asset of every listed release, whatever its age.
    #[arg(long)]
    purge_artifacts: bool,
    /// Delete releases older than the maximum age, along with their tag references.
    #[arg(long)]
    purge_releases: bool,
    /// Report intended deletions without performing them.
    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    dry_run: bool,
    /// Maximum age, in days, of kept releases.
    #[arg(long, default_value_t = DEFAULT_MAX_DAYS)]
    max_days: i64,
}

impl Args {
    pub fn into_config(self) -> anyhow::Result<Config> {
        let token = std::fs::read_to_string(&self.token_file)
            .with_context(|| format!("unable to read token file {:?}", self.token_file))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            anyhow::bail!("token file {:?} is empty", self.token_file);
        }
        let max_age = TimeDelta::try_days(self.max_days)
            .ok_or_else(|| anyhow::anyhow!("--max-days {} is out of range", self.max_days))?;
        let deadline = maybe_env("RUN_DEADLINE_SECS")
            .map(|value| {
                value
                    .parse::<u64>()
                    .context("unable to parse value from \"RUN_DEADLINE_SECS\"")
            })
            .transpose()?
            .map(Duration::from_secs);
        Ok(Config {
            github: adapter_github::Config::new(self.owner, self.repo, Some(token)),
            options: domain::PurgeOptions {
                purge_artifacts: self.purge_artifacts,
                purge_releases: self.purge_releases,
                dry_run: self.dry_run,
                max_age,
            },
            deadline,
        })
    }
}

#[derive(Debug)]
pub struct Config {
    github: adapter_github::Config,
    options: domain::PurgeOptions,
    deadline: Option<Duration>,
}

impl Config {
    pub fn build(self) -> anyhow::Result<Application> {
        Ok(Application {
            client: self.github.build()?,
            options: self.options,
            deadline: self.deadline,
        })
    }
}

pub struct Application {
    client: adapter_github::Client,
    options: domain::PurgeOptions,
    deadline: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn should_default_to_dry_run() {
        let args = super::Args::parse_from(["relpurge", "--owner", "jdoe", "--repo", "tool"]);
        assert!(args.dry_run);
        assert_eq!(args.max_days, 120);
    }

    #[test]
    fn should_allow_disabling_dry_run() {
        let args = super::Args::parse_from([
            "relpurge",
            "--owner",
            "jdoe",
            "--repo",
            "tool",
            "--dry-run=false",
        ]);
        assert!(!args.dry_run);
    }

    #[test]
    fn should_reject_out_of_range_max_days() {
        let token_file = std::env::temp_dir().join("relpurge-max-days-token");
        std::fs::write(&token_file, "s3cr3t\n").unwrap();
        let args = super::Args::parse_from([
            "relpurge",
            "--owner",
            "jdoe",
            "--repo",
            "tool",
            "--token-file",
            token_file.to_str().unwrap(),
            "--max-days",
            "9999999999999",
        ]);
        let err = args.into_config().unwrap_err();
        assert!(
            err.to_string().contains("out of range"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn should_fail_on_missing_token_file() {
        let args = super::Args::parse_from([
            "relpurge",
            "--owner",
            "jdoe",
            "--repo",
            "tool",
            "--token-file",
            "/nonexistent/relpurge-token",
        ]);
        let err = args.into_config().unwrap_err();
        assert!(err.to_string().contains("unable to read token file"));
    }
}

impl Application {
    pub async fn run(self) -> anyhow::Result<domain::entity::Summary> {
        let service: domain::PurgeService<_> =
            domain::PurgeService::new(self.client, self.options);
        let summary = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, service.run())
                .await
                .context("run deadline exceeded")??,
            None => service.run().await?,
        };
        Ok(summary)
    }
}
