use restbound::client::RestClient;
use restbound::config::{HttpClientConfig, RequestOptions, TransportOptions};
use restbound::error::ClientError;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: u64,
    name: String,
}

async fn start_server() -> MockServer {
    MockServer::start().await
}

fn client_for(server: &MockServer, endpoint: &str) -> RestClient<User> {
    RestClient::create(
        HttpClientConfig {
            use_https: false,
            base_url: server.uri(),
            endpoint: endpoint.to_string(),
        },
        TransportOptions::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn should_resolve_request_url_against_normalized_base() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 42, "name": "alice"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Duplicated slashes in the endpoint must be collapsed away.
    let client = client_for(&server, "v1//users");
    let user = client.get("42", None).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 42,
            name: "alice".to_string()
        }
    );
}

#[tokio::test]
async fn should_surface_non_success_status_as_response_error() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server, "v1/users");
    let result = client.get("missing", None).await;
    assert!(matches!(
        result,
        Err(ClientError::HttpResponseError(404, body)) if body == "not found"
    ));
}

#[tokio::test]
async fn should_send_serialized_post_payload() {
    let server = start_server().await;
    // An empty relative path resolves to the base URL plus a trailing slash.
    Mock::given(method("POST"))
        .and(path("/v1/users/"))
        .and(body_json(json!({"name": "bob"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 2, "name": "bob"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "v1/users");
    let user = client.post("", &json!({"name": "bob"}), None).await.unwrap();
    assert_eq!(user.id, 2);
}

#[tokio::test]
async fn should_apply_per_call_query_and_header_overrides() {
    let server = start_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/42"))
        .and(query_param("expand", "profile"))
        .and(header("x-request-id", "abc-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 42, "name": "alice"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "v1/users");
    let mut options = RequestOptions {
        query: vec![("expand".to_string(), "profile".to_string())],
        ..Default::default()
    };
    options
        .headers
        .insert("x-request-id", "abc-123".parse().unwrap());
    let user = client.get("42", Some(options)).await.unwrap();
    assert_eq!(user.id, 42);
}

#[tokio::test]
async fn should_dispatch_put_patch_and_delete_verbs() {
    let server = start_server().await;
    let body = json!({"id": 1, "name": "alice"});
    Mock::given(method("PUT"))
        .and(path("/v1/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "v1/users");
    client.put("1", &json!({"name": "alice"}), None).await.unwrap();
    client.patch("1", &json!({"name": "alice"}), None).await.unwrap();
    client.delete("1", None).await.unwrap();
}

#[tokio::test]
async fn should_fail_fast_when_base_url_has_no_scheme() {
    let client: Result<RestClient<User>, _> = RestClient::create(
        HttpClientConfig {
            use_https: false,
            base_url: "api.example.com".to_string(),
            endpoint: "v1".to_string(),
        },
        TransportOptions::default(),
    );
    assert!(matches!(client, Err(ClientError::InvalidBaseUrl(_, _))));
}
