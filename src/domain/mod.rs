use std::marker::PhantomData;

use chrono::TimeDelta;

pub mod entity;
pub mod prelude;
pub mod retention;

use entity::{Release, RetentionDecision, Summary};
use prelude::{Clock, ReleaseHost};

const PAGE_SIZE: u32 = 100;

/// Behavior switches for one purge pass, loaded once at startup.
#[derive(Debug, Clone, Copy)]
pub struct PurgeOptions {
    pub purge_artifacts: bool,
    pub purge_releases: bool,
    pub dry_run: bool,
    pub max_age: TimeDelta,
}

/// A remote call failed and aborted the pass. No retry, no recovery: the
/// first error wins and surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    #[error("unable to list releases page {page}: {source}")]
    ListReleases { page: u32, source: anyhow::Error },
    #[error("unable to list assets of release {release_id}: {source}")]
    ListAssets {
        release_id: u64,
        source: anyhow::Error,
    },
    #[error("unable to delete asset {asset_id} ({name}): {source}")]
    DeleteAsset {
        asset_id: u64,
        name: String,
        source: anyhow::Error,
    },
    #[error("unable to delete release tagged {tag}: {source}")]
    DeleteRelease { tag: String, source: anyhow::Error },
    /// The release is gone but its tag reference survived. The remote
    /// repository is left with an orphaned tag; there is no rollback.
    #[error(
        "release tagged {tag} was deleted but removing refs/tags/{tag} failed, leaving the tag orphaned: {source}"
    )]
    DanglingTag { tag: String, source: anyhow::Error },
}

/// Drives one sequential pass over a repository's releases, applying the
/// retention policy and the configured purge switches.
#[derive(Debug)]
pub struct PurgeService<H, C = chrono::Utc> {
    host: H,
    options: PurgeOptions,
    clock: PhantomData<C>,
}

impl<H, C> PurgeService<H, C>
where
    H: ReleaseHost,
    C: Clock,
{
    pub fn new(host: H, options: PurgeOptions) -> Self {
        Self {
            host,
            options,
            clock: PhantomData,
        }
    }

    /// Execute the pass. Every release the provider returns is visited, in
    /// provider order, one page at a time; a page shorter than the page size
    /// ends the listing.
    #[tracing::instrument(skip_all, err(Debug))]
    pub async fn run(&self) -> Result<Summary, PurgeError> {
        let now = C::now();
        tracing::info!(
            dry_run = self.options.dry_run,
            purge_artifacts = self.options.purge_artifacts,
            purge_releases = self.options.purge_releases,
            "starting purge pass"
        );
        let mut summary = Summary::new(self.options.dry_run);
        let mut page = 1;
        loop {
            let releases = self
                .host
                .list_releases(page, PAGE_SIZE)
                .await
                .map_err(|source| PurgeError::ListReleases { page, source })?;
            let last_page = (releases.len() as u32) < PAGE_SIZE;
            for release in releases {
                self.process_release(&release, now, &mut summary).await?;
            }
            if last_page {
                break;
            }
            page += 1;
        }
        Ok(summary)
    }

    async fn process_release(
        &self,
        release: &Release,
        now: chrono::DateTime<chrono::Utc>,
        summary: &mut Summary,
    ) -> Result<(), PurgeError> {
        summary.releases_seen += 1;
        tracing::info!(
            id = release.id,
            tag = %release.tag_name,
            name = release.name.as_deref().unwrap_or_default(),
            "inspecting release"
        );

        if self.options.purge_artifacts {
            self.purge_assets(release, summary).await?;
        }

        if !self.options.purge_releases {
            return Ok(());
        }

        let age = now - release.created_at;
        match retention::decide(release.created_at, now, self.options.max_age) {
            RetentionDecision::Keep => {
                tracing::info!(
                    tag = %release.tag_name,
                    age_days = age.num_days(),
                    "keeping release"
                );
            }
            RetentionDecision::Delete => {
                summary.releases_deleted += 1;
                if self.options.dry_run {
                    tracing::info!(
                        tag = %release.tag_name,
                        age_days = age.num_days(),
                        "would delete release"
                    );
                    return Ok(());
                }
                // Two independent remote calls, no combined transaction. The
                // release delete goes first; a tag-ref failure afterwards
                // leaves an orphaned tag behind.
                self.host
                    .delete_release(release.id)
                    .await
                    .map_err(|source| PurgeError::DeleteRelease {
                        tag: release.tag_name.clone(),
                        source,
                    })?;
                self.host
                    .delete_tag_ref(&release.tag_name)
                    .await
                    .map_err(|source| PurgeError::DanglingTag {
                        tag: release.tag_name.clone(),
                        source,
                    })?;
                tracing::info!(
                    id = release.id,
                    tag = %release.tag_name,
                    age_days = age.num_days(),
                    "release and tag reference deleted"
                );
            }
        }
        Ok(())
    }

    /// Delete (or report) every asset of a release, paging through the full
    /// asset list. Not subject to the age check: artifact purging applies to
    /// all listed releases.
    async fn purge_assets(
        &self,
        release: &Release,
        summary: &mut Summary,
    ) -> Result<(), PurgeError> {
        let mut page = 1;
        loop {
            let assets = self
                .host
                .list_assets(release.id, page, PAGE_SIZE)
                .await
                .map_err(|source| PurgeError::ListAssets {
                    release_id: release.id,
                    source,
                })?;
            let last_page = (assets.len() as u32) < PAGE_SIZE;
            for asset in assets {
                tracing::info!(
                    id = asset.id,
                    name = %asset.name,
                    content_type = %asset.content_type,
                    download_count = asset.download_count,
                    label = asset.label.as_deref().unwrap_or_default(),
                    "found asset"
                );
                summary.assets_deleted += 1;
                if self.options.dry_run {
                    tracing::info!(id = asset.id, name = %asset.name, "would delete asset");
                    continue;
                }
                self.host
                    .delete_asset(asset.id)
                    .await
                    .map_err(|source| PurgeError::DeleteAsset {
                        asset_id: asset.id,
                        name: asset.name.clone(),
                        source,
                    })?;
                tracing::info!(id = asset.id, name = %asset.name, "asset deleted");
            }
            if last_page {
                return Ok(());
            }
            page += 1;
        }
    }
}
