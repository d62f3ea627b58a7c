use anyhow::Context;

impl crate::adapter_github::Client {
    /// Delete the `refs/tags/<tag>` reference left behind by a release.
    pub(crate) async fn remove_tag_ref(&self, tag: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/repos/{}/{}/git/refs/tags/{tag}",
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
