use std::{env, sync::Arc, time::Duration};

use crate::{
    endpoint::{Endpoint, Host},
    endpoints::{self, HASTE_URL, SUPPORT_PATH},
    envelope::Envelope,
    error::Error,
    params::Params,
    request::resolve,
    result::Result,
    transport::{HttpTransport, Transport},
};
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// Default primary host.
pub const BASE_URL: &str = "https://services.superchiefyt.tk";

/// Environment variable read by [`Client::from_env`].
pub const KEY_ENV: &str = "SUPERCHIEF_API_KEY";

const DEFAULT_USER_AGENT: &str = concat!("SuperchiefClient/", env!("CARGO_PKG_VERSION"));

/// Caller for every endpoint of the services API.
///
/// Cloning is cheap; clones share the transport.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    key: Option<String>,
    base_url: String,
    haste_url: String,
}

/// Configures a [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    key: Option<String>,
    base_url: Option<String>,
    haste_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

/// The `reqwest` transport with the default user agent.
fn default_transport() -> HttpTransport {
    let http = ReqwestClient::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("falling back to a bare reqwest client: {e}");
            ReqwestClient::new()
        });
    HttpTransport::new(http)
}

impl ClientBuilder {
    /// Binds an API key to every call.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Overrides the primary host.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the hastebin host.
    #[must_use]
    pub fn haste_url(mut self, url: impl Into<String>) -> Self {
        self.haste_url = Some(url.into());
        self
    }

    /// Sets the `User-Agent` sent by the default transport.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Sets a total request timeout on the default transport.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses `transport` instead of the `reqwest` one.
    ///
    /// `user_agent` and `timeout` are ignored when a transport is given.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the `reqwest` client cannot be created.
    pub fn build(self) -> Result<Client> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
                let mut http = ReqwestClient::builder().user_agent(agent);
                if let Some(timeout) = self.timeout {
                    http = http.timeout(timeout);
                }
                Arc::new(HttpTransport::new(http.build()?))
            }
        };

        Ok(Client {
            transport,
            key: self.key,
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            haste_url: self.haste_url.unwrap_or_else(|| HASTE_URL.to_string()),
        })
    }
}

impl Client {
    /// Returns a client with `key` bound to every call.
    pub fn new(key: impl Into<String>) -> Client {
        Client::with_transport(Some(key.into()), default_transport())
    }

    /// Returns a client whose key is read from `SUPERCHIEF_API_KEY`.
    ///
    /// A missing variable leaves the client without a key; keyed calls then
    /// fail with their "no key" message.
    pub fn from_env() -> Client {
        let key = env::var(KEY_ENV).ok().filter(|k| !k.is_empty());
        if key.is_none() {
            log::warn!("{} is not set", KEY_ENV);
        }
        Client::with_transport(key, default_transport())
    }

    fn with_transport(key: Option<String>, transport: impl Transport + 'static) -> Client {
        Client {
            transport: Arc::new(transport),
            key,
            base_url: BASE_URL.to_string(),
            haste_url: HASTE_URL.to_string(),
        }
    }

    /// Starts configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Returns a copy of this client bound to another key.
    ///
    /// The transport is shared.
    #[must_use]
    pub fn with_key(&self, key: impl Into<String>) -> Client {
        Client {
            key: Some(key.into()),
            ..self.clone()
        }
    }

    /// The bound key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Link to the service's support page.
    pub fn support_url(&self) -> String {
        format!("{}{SUPPORT_PATH}", self.base_url.trim_end_matches('/'))
    }

    fn base_for(&self, host: Host) -> &str {
        match host {
            Host::Primary => &self.base_url,
            Host::Haste => &self.haste_url,
        }
    }

    /// Calls `endpoint` with the bound key.
    ///
    /// Never fails: problems are reported in the returned [`Envelope`].
    pub async fn call(&self, endpoint: &Endpoint, params: &Params) -> Envelope {
        self.try_call_with_key(endpoint, self.key.as_deref(), params)
            .await
            .into()
    }

    /// Calls `endpoint` with `key` instead of the bound one.
    pub async fn call_with_key(
        &self,
        endpoint: &Endpoint,
        key: &str,
        params: &Params,
    ) -> Envelope {
        self.try_call_with_key(endpoint, Some(key), params)
            .await
            .into()
    }

    /// Calls the endpoint registered as `name`, see [`endpoints::find`].
    pub async fn call_named(&self, name: &str, params: &Params) -> Envelope {
        match endpoints::find(name) {
            Some(endpoint) => self.call(endpoint, params).await,
            None => Envelope::from(Error::InvalidArgument(format!("Unknown endpoint '{name}'"))),
        }
    }

    /// Like [`Client::call`], but returns a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the validation, transport or decoding error that a failed
    /// [`Envelope`] would carry.
    pub async fn try_call(&self, endpoint: &Endpoint, params: &Params) -> Result<Value> {
        self.try_call_with_key(endpoint, self.key.as_deref(), params)
            .await
    }

    async fn try_call_with_key(
        &self,
        endpoint: &Endpoint,
        key: Option<&str>,
        params: &Params,
    ) -> Result<Value> {
        let resolved = resolve(endpoint, key, params)?;
        let base = self.base_for(endpoint.host);
        let request = resolved.prepare(base)?;

        log::info!("request for {} dispatched to {}", endpoint.name, request.url);
        let reply = match self.transport.execute(request).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("{} failed: {e}", endpoint.name);
                return Err(resolved.no_response());
            }
        };

        log::debug!("{} response status: {}", endpoint.name, reply.status);
        if !reply.is_success() || reply.body.trim().is_empty() {
            return Err(resolved.no_response());
        }

        let body: Value = serde_json::from_str(&reply.body)?;
        if body.is_null() {
            return Err(resolved.no_response());
        }
        resolved.reshape(body, base)
    }
}

impl Default for Client {
    /// A client without a bound key.
    fn default() -> Self {
        Client::with_transport(None, default_transport())
    }
}
