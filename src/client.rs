use crate::config::{HttpClientConfig, RequestOptions, TransportOptions};
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Typed client bound to a normalized base URL.
///
/// `M` is the model the plain verb methods deserialize into; the `*_as`
/// variants let the caller pick another response type per call. The
/// transport is injected, so tests can substitute a double for the
/// reqwest-backed [`HttpClient`].
#[derive(Debug)]
pub struct RestClient<M, T = HttpClient> {
    transport: T,
    _model: PhantomData<fn() -> M>,
}

impl<M> RestClient<M> {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpClient::new(base_url)?))
    }

    pub fn create(
        config: HttpClientConfig,
        options: TransportOptions,
    ) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpClient::create(config, options)?))
    }
}

impl<M, T: Transport> RestClient<M, T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            _model: PhantomData,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<M: DeserializeOwned, T: Transport> RestClient<M, T> {
    pub async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<M, ClientError> {
        self.get_as(path, options).await
    }

    pub async fn get_as<R: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<R, ClientError> {
        let response = self.transport.get(path, options).await?;
        Ok(response.json().await?)
    }

    pub async fn post<D: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &D,
        options: Option<RequestOptions>,
    ) -> Result<M, ClientError> {
        self.post_as(path, payload, options).await
    }

    pub async fn post_as<R: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &D,
        options: Option<RequestOptions>,
    ) -> Result<R, ClientError> {
        let payload = serde_json::to_value(payload)?;
        let response = self.transport.post(path, Some(payload), options).await?;
        Ok(response.json().await?)
    }

    pub async fn put<D: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &D,
        options: Option<RequestOptions>,
    ) -> Result<M, ClientError> {
        self.put_as(path, payload, options).await
    }

    pub async fn put_as<R: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &D,
        options: Option<RequestOptions>,
    ) -> Result<R, ClientError> {
        let payload = serde_json::to_value(payload)?;
        let response = self.transport.put(path, Some(payload), options).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<D: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &D,
        options: Option<RequestOptions>,
    ) -> Result<M, ClientError> {
        self.patch_as(path, payload, options).await
    }

    pub async fn patch_as<R: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &D,
        options: Option<RequestOptions>,
    ) -> Result<R, ClientError> {
        let payload = serde_json::to_value(payload)?;
        let response = self.transport.patch(path, Some(payload), options).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<M, ClientError> {
        self.delete_as(path, options).await
    }

    pub async fn delete_as<R: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<R, ClientError> {
        let response = self.transport.delete(path, options).await?;
        Ok(response.json().await?)
    }
}
