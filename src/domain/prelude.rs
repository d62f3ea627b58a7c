use chrono::{DateTime, Utc};

use super::entity::{Asset, Release};

/// Abstracts the remote release host (e.g., GitHub Releases).
///
/// Listing is page-oriented so the orchestrator can drive pagination itself;
/// a page shorter than `per_page` signals the end of the collection.
pub trait ReleaseHost: Send + Sync + 'static {
    /// List one page of releases, in the order the provider returns them.
    fn list_releases(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = anyhow::Result<Vec<Release>>> + Send;

    /// List one page of assets attached to a release.
    fn list_assets(
        &self,
        release_id: u64,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = anyhow::Result<Vec<Asset>>> + Send;

    /// Delete a single release asset.
    fn delete_asset(&self, asset_id: u64) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Delete a release. Does not touch the associated tag reference.
    fn delete_release(&self, release_id: u64) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Delete the `refs/tags/<tag>` reference.
    fn delete_tag_ref(&self, tag: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(test)]
mockall::mock! {
    pub ReleaseHost {}

    impl ReleaseHost for ReleaseHost {
        fn list_releases(
            &self,
            page: u32,
            per_page: u32,
        ) -> impl Future<Output = anyhow::Result<Vec<Release>>> + Send;

        fn list_assets(
            &self,
            release_id: u64,
            page: u32,
            per_page: u32,
        ) -> impl Future<Output = anyhow::Result<Vec<Asset>>> + Send;

        fn delete_asset(&self, asset_id: u64) -> impl Future<Output = anyhow::Result<()>> + Send;

        fn delete_release(&self, release_id: u64) -> impl Future<Output = anyhow::Result<()>> + Send;

        fn delete_tag_ref(&self, tag: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
    }
}

pub trait Clock: Send + Sync + 'static {
    fn now() -> DateTime<Utc>;
}

impl Clock for chrono::Utc {
    fn now() -> DateTime<Utc> {
        Utc::now()
    }
}
