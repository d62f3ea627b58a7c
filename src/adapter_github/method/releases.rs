use anyhow::Context;

use crate::adapter_github::entity::{Pagination, Release};

impl crate::adapter_github::Client {
    pub(crate) async fn releases_page(&self, page: Pagination) -> anyhow::Result<Vec<Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url, self.owner, self.repo
        );
        let res = self
            .inner
            .get(&url)
            .query(&page)
            .send()
            .await
            .context("unable to request")?;
        res.error_for_status_ref()?;
        res.json().await.context("unable to read response")
    }

    pub(crate) async fn remove_release(&self, release_id: u64) -> anyhow::Result<()> {
        let url = format!(
            "{}/repos/{}/{}/releases/{release_id}",
            self.base_url, self.owner, self.repo
        );
        let res = self
            .inner
            .delete(&url)
            .send()
            .await
            .context("unable to request")?;
        res.error_for_status()?;
        Ok(())
    }
}
