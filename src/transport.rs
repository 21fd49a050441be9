use crate::config::RequestOptions;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;
use std::fmt::Debug;

/// The capability required from an underlying HTTP transport.
///
/// Implementations send a single request relative to their configured base
/// URL and surface every failure unchanged. The typed client takes any
/// `Transport` as a dependency, which allows substituting a test double for
/// the reqwest-backed implementation.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError>;

    async fn post(
        &self,
        path: &str,
        payload: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError>;

    async fn put(
        &self,
        path: &str,
        payload: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError>;

    async fn patch(
        &self,
        path: &str,
        payload: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError>;

    async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, ClientError>;
}
