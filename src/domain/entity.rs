use chrono::{DateTime, Utc};

/// A release as seen by the purge pass. Fetched fresh on every run, never
/// cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub id: u64,
    /// Tag name, also the source of the `refs/tags/<tag>` reference.
    pub tag_name: String,
    /// Display name, absent on untitled releases.
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A binary artifact attached to a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: u64,
    pub release_id: u64,
    pub name: String,
    pub content_type: String,
    pub download_count: u64,
    pub label: Option<String>,
}

/// Outcome of the retention policy for a single release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetentionDecision {
    Keep,
    Delete,
}

/// Counters accumulated over one purge pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub releases_seen: u64,
    /// Releases deleted, or that would have been deleted under dry-run.
    pub releases_deleted: u64,
    /// Assets deleted, or that would have been deleted under dry-run.
    pub assets_deleted: u64,
    pub dry_run: bool,
}

impl Summary {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.dry_run {
            "would be deleted"
        } else {
            "deleted"
        };
        write!(
            f,
            "{} releases seen, {} releases {verb}, {} assets {verb}",
            self.releases_seen, self.releases_deleted, self.assets_deleted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Summary;

    #[test]
    fn should_word_summary_for_dry_run() {
        let summary = Summary {
            releases_seen: 3,
            releases_deleted: 2,
            assets_deleted: 0,
            dry_run: true,
        };
        assert_eq!(
            summary.to_string(),
            "3 releases seen, 2 releases would be deleted, 0 assets would be deleted"
        );
    }

    #[test]
    fn should_word_summary_for_live_run() {
        let summary = Summary {
            releases_seen: 1,
            releases_deleted: 1,
            assets_deleted: 4,
            dry_run: false,
        };
        assert_eq!(
            summary.to_string(),
            "1 releases seen, 1 releases deleted, 4 assets deleted"
        );
    }
}
