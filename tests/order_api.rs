//! End-to-end tests for the `/api/order` endpoint, with the Jupiter API
//! stubbed out by a local mock server.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use solana_client::nonblocking::rpc_client::RpcClient;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jup_limit_action::action::action_descriptor;
use jup_limit_action::jupiter::JupiterClient;
use jup_limit_action::server::{router, AppState};
use jup_limit_action::tokens::{SOL_MINT, USDC_MINT};

/// System program id — a convenient, always-valid base58 pubkey.
const ACCOUNT: &str = "11111111111111111111111111111111";

fn test_router(jupiter_base: &str) -> Router {
    router(AppState {
        jupiter: JupiterClient::new(jupiter_base),
        // Inert in the order flow; never contacted by these tests.
        rpc: Arc::new(RpcClient::new("http://localhost:8899".to_string())),
    })
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn post_request(query: &str, account: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/order?{query}"))
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"account":"{account}"}}"#)))
        .unwrap()
}

#[tokio::test]
async fn test_get_returns_descriptor_with_cors_headers() {
    let app = test_router("http://unused.invalid");

    let resp = app
        .oneshot(Request::builder().uri("/api/order").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Methods").unwrap(),
        "GET,POST,PUT,OPTIONS"
    );
    assert!(resp.headers().contains_key("Access-Control-Allow-Headers"));

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body, serde_json::to_value(action_descriptor()).unwrap());
}

#[tokio::test]
async fn test_options_matches_get() {
    let app = test_router("http://unused.invalid");

    let get = app
        .clone()
        .oneshot(Request::builder().uri("/api/order").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let options = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/order")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(options.status(), StatusCode::OK);
    assert_eq!(body_bytes(get).await, body_bytes(options).await);
}

#[tokio::test]
async fn test_post_creates_order() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/createOrder"))
        .and(body_partial_json(serde_json::json!({
            "maker": ACCOUNT,
            "payer": ACCOUNT,
            "inputMint": USDC_MINT,
            "outputMint": SOL_MINT,
            "params": {
                "makingAmount": "1000000",
                "takingAmount": "2000000000",
            },
            "computeUnitPrice": "auto",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "order": "ordAddr",
            "tx": "dHg=",
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = test_router(&upstream.uri());
    let resp = app
        .oneshot(post_request(
            &format!("token={SOL_MINT}&amount=1&purchasePrice=2"),
            ACCOUNT,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "type": "transaction",
            "transaction": "dHg=",
            "message": "Order created successfully",
        })
    );
}

#[tokio::test]
async fn test_post_unknown_token_never_reaches_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = test_router(&upstream.uri());
    let resp = app
        .oneshot(post_request(
            "token=BONKfwdCeVfJhRcqTsR3Rv2rVfkVrwdsrFLPqMHGDCk&amount=1&purchasePrice=2",
            ACCOUNT,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(body.contains("unknown token"));
}

#[tokio::test]
async fn test_post_invalid_account_never_reaches_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = test_router(&upstream.uri());
    let resp = app
        .oneshot(post_request(
            &format!("token={SOL_MINT}&amount=1&purchasePrice=2"),
            "not-a-pubkey",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(body.contains("invalid account"));
}

#[tokio::test]
async fn test_post_missing_query_params_rejected() {
    let app = test_router("http://unused.invalid");
    let resp = app
        .oneshot(post_request(&format!("token={SOL_MINT}"), ACCOUNT))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_upstream_failure_maps_to_400() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/createOrder"))
        .respond_with(ResponseTemplate::new(500).set_body_string("order books are closed"))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = test_router(&upstream.uri());
    let resp = app
        .oneshot(post_request(
            &format!("token={SOL_MINT}&amount=1&purchasePrice=2"),
            ACCOUNT,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(body.contains("order service returned"));
}

#[tokio::test]
async fn test_post_malformed_upstream_body_maps_to_400() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/createOrder"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = test_router(&upstream.uri());
    let resp = app
        .oneshot(post_request(
            &format!("token={SOL_MINT}&amount=1&purchasePrice=2"),
            ACCOUNT,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
