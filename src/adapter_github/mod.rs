use std::{borrow::Cow, sync::Arc};

use reqwest::header::{HeaderMap, HeaderValue};

pub(crate) mod entity;
mod host;
mod method;
mod middleware;

#[derive(Debug)]
pub struct Config {
    base_url: Cow<'static, str>,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl Config {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            base_url: crate::with_env_or("GITHUB_BASE_URL", "https://api.github.com"),
            owner: owner.into(),
            repo: repo.into(),
            token,
        }
    }

    /// Point the client at another endpoint, e.g. a GitHub Enterprise host.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn build(self) -> anyhow::Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = self.token {
            headers.insert(
                "Authorization",
                HeaderValue::from_str(&format!("Bearer {token}"))?,
            );
        }
        headers.insert("User-Agent", HeaderValue::from_static("relpurge"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(20))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()?;
        let inner = reqwest_middleware::ClientBuilder::new(client)
            // Trace HTTP requests. See the tracing crate to make use of these traces.
            .with(middleware::TracingMiddleware)
            .build();
        Ok(Client {
            base_url: Arc::from(self.base_url),
            owner: Arc::from(self.owner),
            repo: Arc::from(self.repo),
            inner,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    base_url: Arc<str>,
    owner: Arc<str>,
    repo: Arc<str>,
    inner: reqwest_middleware::ClientWithMiddleware,
}
