use crate::{
    endpoints::{HASTE_GET, HASTE_POST},
    Client, Envelope, Params,
};

/// Where and how to upload a hastebin document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HasteOptions {
    /// Hastebin host; the client's haste URL when `None`.
    pub url: Option<String>,
    /// Extension appended to the returned link; `js` when `None`.
    pub extension: Option<String>,
}

impl HasteOptions {
    /// Options with only the extension set.
    pub fn extension(extension: impl Into<String>) -> Self {
        HasteOptions {
            extension: Some(extension.into()),
            ..Self::default()
        }
    }

    /// Sets the host.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Client {
    /// Fetches hastebin document `id` from the client's haste host.
    pub async fn haste(&self, id: &str) -> Envelope {
        self.call(&HASTE_GET, &Params::new().with("id", id)).await
    }

    /// Fetches hastebin document `id` from another hastebin host.
    pub async fn haste_from(&self, id: &str, url: &str) -> Envelope {
        let params = Params::new().with("id", id).with("url", url);
        self.call(&HASTE_GET, &params).await
    }

    /// Uploads `content` and answers `{status, id, url}`.
    pub async fn upload(&self, content: &str, options: HasteOptions) -> Envelope {
        let params = Params::new()
            .with("content", content)
            .with_opt("url", options.url)
            .with_opt("extension", options.extension);
        self.call(&HASTE_POST, &params).await
    }
}
