use crate::config::{HttpClientConfig, RequestOptions, TransportOptions};
use crate::error::ClientError;
use crate::http::url::normalize_url;
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde_json::Value;
use tracing::{error, trace};

/// Reqwest-backed transport bound to a single normalized base URL.
///
/// The base URL always carries the scheme implied by `use_https` and never
/// contains a run of consecutive slashes in its path. Construction performs
/// no I/O and the instance is immutable afterwards, so it is safe to share
/// across concurrent callers.
#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    use_https: bool,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::create(
            HttpClientConfig {
                base_url: base_url.to_string(),
                ..Default::default()
            },
            TransportOptions::default(),
        )
    }

    /// Builds the transport from the joined `base_url` and `endpoint`.
    ///
    /// A base URL without the scheme implied by `use_https` is rejected here
    /// instead of producing a malformed URL on the first request.
    pub fn create(
        config: HttpClientConfig,
        options: TransportOptions,
    ) -> Result<Self, ClientError> {
        let api_url = normalize_url(
            &format!("{}/{}", config.base_url, config.endpoint),
            config.use_https,
        )?;
        let api_url = Url::parse(&api_url).map_err(|_| ClientError::CannotParseUrl)?;

        let mut builder = reqwest::Client::builder().default_headers(options.default_headers);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = options.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = options.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build()?;

        Ok(Self {
            api_url,
            use_https: config.use_https,
            client,
        })
    }

    /// Resolves a relative path against the base URL, collapsing any
    /// duplicated slashes introduced by the join.
    pub fn get_url(&self, path: &str) -> Result<Url, ClientError> {
        let url = normalize_url(&format!("{}/{}", self.api_url, path), self.use_https)?;
        Url::parse(&url).map_err(|_| ClientError::CannotParseUrl)
    }

    fn apply_options(request: RequestBuilder, options: Option<RequestOptions>) -> RequestBuilder {
        let Some(options) = options else {
            return request;
        };
        let mut request = request;
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if !options.headers.is_empty() {
            request = request.headers(options.headers);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    async fn handle_response(response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or("error".to_string());
        error!("Received an invalid response with status: {status} and body: {body}");
        Err(ClientError::HttpResponseError(status, body))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        trace!("Sending a GET request to: {url}");
        let request = Self::apply_options(self.client.get(url), options);
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn post(
        &self,
        path: &str,
        payload: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        trace!("Sending a POST request to: {url}");
        let mut request = Self::apply_options(self.client.post(url), options);
        if let Some(payload) = payload {
            request = request.json(&payload);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn put(
        &self,
        path: &str,
        payload: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        trace!("Sending a PUT request to: {url}");
        let mut request = Self::apply_options(self.client.put(url), options);
        if let Some(payload) = payload {
            request = request.json(&payload);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn patch(
        &self,
        path: &str,
        payload: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        trace!("Sending a PATCH request to: {url}");
        let mut request = Self::apply_options(self.client.patch(url), options);
        if let Some(payload) = payload {
            request = request.json(&payload);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        trace!("Sending a DELETE request to: {url}");
        let request = Self::apply_options(self.client.delete(url), options);
        let response = request.send().await?;
        Self::handle_response(response).await
    }
}
