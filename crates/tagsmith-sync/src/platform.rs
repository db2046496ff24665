//! Remote platform client
//!
//! The `Platform` trait is the seam between the pure core and the network:
//! the sync engine only ever talks to this trait, so tests substitute an
//! in-memory platform and the CLI wires up `HttpPlatform`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tagsmith_core::types::{Extension, RemoteExtension};
use tracing::{debug, info};

/// Remote tag-management platform operations used by the sync engine
#[async_trait]
pub trait Platform: Send + Sync {
    /// Get the platform name for logging
    fn name(&self) -> &'static str;

    /// Verify the account/profile is reachable before doing any work
    async fn connect(&mut self) -> Result<()>;

    /// Fetch the remote extension listing
    async fn fetch_extensions(&self) -> Result<Vec<RemoteExtension>>;

    /// Push one extension's payload to the remote profile
    async fn save_extension(&self, extension: &Extension) -> Result<()>;
}

/// HTTP implementation of [`Platform`] with bearer-token auth
pub struct HttpPlatform {
    client: reqwest::Client,
    base_url: String,
    account: String,
    profile: String,
    token: Option<String>,
}

impl HttpPlatform {
    /// Create a client for one account/profile
    pub fn new(
        base_url: impl Into<String>,
        account: impl Into<String>,
        profile: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account: account.into(),
            profile: profile.into(),
            token,
        }
    }

    fn profile_url(&self, suffix: &str) -> String {
        format!(
            "{}/accounts/{}/profiles/{}{}",
            self.base_url, self.account, self.profile, suffix
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl Platform for HttpPlatform {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn connect(&mut self) -> Result<()> {
        let url = self.profile_url("");
        debug!("Connecting to {}", url);

        self.authorize(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to reach platform at {}", url))?
            .error_for_status()
            .with_context(|| {
                format!("Profile {}/{} not accessible", self.account, self.profile)
            })?;

        info!("Connected to {}/{}", self.account, self.profile);
        Ok(())
    }

    async fn fetch_extensions(&self) -> Result<Vec<RemoteExtension>> {
        let url = self.profile_url("/extensions");
        debug!("Fetching remote extensions from {}", url);

        let extensions: Vec<RemoteExtension> = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to fetch extensions from {}", url))?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse remote extension listing")?;

        info!("Fetched {} remote extensions", extensions.len());
        Ok(extensions)
    }

    async fn save_extension(&self, extension: &Extension) -> Result<()> {
        let url = self.profile_url(&format!("/extensions/{}", extension.id));
        debug!("Saving extension {} ({})", extension.id, extension.name);

        self.authorize(self.client.put(&url))
            .json(extension)
            .send()
            .await
            .with_context(|| format!("Failed to save extension {}", extension.id))?
            .error_for_status()
            .with_context(|| format!("Platform rejected extension {}", extension.id))?;

        Ok(())
    }
}
