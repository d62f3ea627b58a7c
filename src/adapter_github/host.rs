use crate::adapter_github::entity::Pagination;
use crate::domain::entity::{Asset, Release};

impl crate::domain::prelude::ReleaseHost for super::Client {
    #[tracing::instrument(skip(self), err(Debug))]
    async fn list_releases(&self, page: u32, per_page: u32) -> anyhow::Result<Vec<Release>> {
        let list = self.releases_page(Pagination::new(page, per_page)).await?;
        Ok(list
            .into_iter()
            .map(|release| Release {
                id: release.id,
                tag_name: release.tag_name,
                name: release.name,
                created_at: release.created_at,
            })
            .collect())
    }

    #[tracing::instrument(skip(self), err(Debug))]
    async fn list_assets(
        &self,
        release_id: u64,
        page: u32,
        per_page: u32,
    ) -> anyhow::Result<Vec<Asset>> {
        let list = self
            .assets_page(release_id, Pagination::new(page, per_page))
            .await?;
        Ok(list
            .into_iter()
            .map(|asset| Asset {
                id: asset.id,
                release_id,
                name: asset.name,
                content_type: asset.content_type,
                download_count: asset.download_count,
                label: asset.label,
            })
            .collect())
    }

    #[tracing::instrument(skip(self), err(Debug))]
    async fn delete_asset(&self, asset_id: u64) -> anyhow::Result<()> {
        self.remove_asset(asset_id).await
    }

    #[tracing::instrument(skip(self), err(Debug))]
    async fn delete_release(&self, release_id: u64) -> anyhow::Result<()> {
        self.remove_release(release_id).await
    }

    #[tracing::instrument(skip(self), err(Debug))]
    async fn delete_tag_ref(&self, tag: &str) -> anyhow::Result<()> {
        self.remove_tag_ref(tag).await
    }
}
