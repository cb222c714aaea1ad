//! HTTP plumbing shared by every SmartHR operation.

use crate::client::response::ApiResponse;
use crate::config::SmartHrConfig;
use crate::error::{SmartHrError, SmartHrResult};
use crate::models::query::QueryParams;
use crate::models::{RequestModel, SerializationPolicy};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Async client for the SmartHR REST API.
///
/// Holds the base URL, the bearer credential and a pooled `reqwest::Client`.
/// Cloning is cheap and clones share the connection pool.
///
/// ```rust,no_run
/// use smarthr_mcp_server::{SmartHrClient, SmartHrConfig};
/// use smarthr_mcp_server::models::ListParams;
///
/// # async fn demo() -> smarthr_mcp_server::SmartHrResult<()> {
/// let client = SmartHrClient::new(SmartHrConfig::new("https://app.smarthr.jp/api", "token")?)?;
/// let grades = client.list_grades(&ListParams::default()).await?;
/// println!("{}", grades.into_value());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SmartHrClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SmartHrClient {
    pub fn new(config: SmartHrConfig) -> SmartHrResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().clone(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Build a client from `SMARTHR_API_BASE_URL` and `SMARTHR_API_KEY`.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when the key is absent or empty.
    pub fn from_env() -> SmartHrResult<Self> {
        Self::new(SmartHrConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments below the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> SmartHrResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SmartHrError::configuration(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue exactly one request and normalize the response.
    pub(crate) async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&QueryParams>,
        body: Option<Value>,
    ) -> SmartHrResult<ApiResponse> {
        let url = self.endpoint(segments)?;
        log::debug!("{method} {url}");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query.pairs());
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            log::warn!("{method} {url} failed with {status}");
            return Err(SmartHrError::http(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiResponse::NoContent {
                status: status.as_u16(),
            });
        }
        Ok(ApiResponse::Json(serde_json::from_slice(&bytes)?))
    }

    pub(crate) async fn get(
        &self,
        segments: &[&str],
        query: Option<&QueryParams>,
    ) -> SmartHrResult<ApiResponse> {
        self.send(Method::GET, segments, query, None).await
    }

    /// Send a request model as the JSON body under `policy`.
    pub(crate) async fn send_model<M: RequestModel>(
        &self,
        method: Method,
        segments: &[&str],
        model: &M,
        policy: SerializationPolicy,
    ) -> SmartHrResult<ApiResponse> {
        model.validate()?;
        let body = model.to_body(policy)?;
        self.send(method, segments, None, Some(body)).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> SmartHrResult<ApiResponse> {
        self.send(Method::DELETE, segments, None, None).await
    }
}
