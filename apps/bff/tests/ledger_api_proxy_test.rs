//! # Ledger API プロキシ統合テスト
//!
//! 127.0.0.1 上にモックの Ledger API を立て、BFF のルーター経由で
//! 転送の振る舞いを検証する。
//!
//! ## テストケース
//!
//! - GET: クエリパラメータが過不足なく上流に届く
//! - GET: 受信ヘッダーがすべて変更されずに上流に届く
//! - GET: 重複したクエリ名は値をカンマで連結して届く
//! - GET: 上流の JSON は未知のフィールド・種別も含めてそのまま返る
//! - GET: 上流のエラー・到達不能は常に 500 Proxy request failed になる
//! - POST: ボディがそのまま上流に届き、上流のステータスが返る
//! - POST: 上流の HTTP エラーはステータス・ボディがそのまま返る
//! - POST: 上流に到達できなければ 500 Proxy request failed

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    Router,
    body::{Body, Bytes, to_bytes},
    extract::{Query, State},
    http::{HeaderMap, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use ledger_bff::{
    app_builder::build_app,
    client::{LedgerApiClient, LedgerApiClientImpl, ProxyError},
    handler::ReadinessState,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

// --- モック上流 ---

/// モック上流が受け取ったリクエスト
#[derive(Debug, Clone)]
struct ReceivedRequest {
    headers: HeaderMap,
    query:   Vec<(String, String)>,
    body:    Bytes,
}

/// モック上流の状態
#[derive(Default)]
struct MockUpstream {
    received: Mutex<Vec<ReceivedRequest>>,
}

impl MockUpstream {
    fn record(&self, headers: HeaderMap, query: Vec<(String, String)>, body: Bytes) {
        self.received.lock().unwrap().push(ReceivedRequest {
            headers,
            query,
            body,
        });
    }

    fn last(&self) -> ReceivedRequest {
        self.received
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("上流がリクエストを受け取っていること")
    }
}

fn page_json() -> Value {
    json!({
        "limit": 10,
        "offset": 0,
        "total": 1,
        "data": [{ "id": 1, "accountType": "asset", "name": "Cash" }]
    })
}

/// 既知の形状にないフィールドと種別を含むページ
fn extended_page_json() -> Value {
    json!({
        "limit": 10,
        "offset": 0,
        "total": 2,
        "data": [
            { "id": 1, "accountType": "asset", "name": "Cash", "balance": "12.50" },
            { "id": 2, "accountType": "equity", "name": "Capital", "balance": "0.00" }
        ],
        "hasMore": false
    })
}

const INVALID_ACCOUNT_TYPE_BODY: &str = r#"{"error":"Invalid account type. Must be asset, liability, income or expense","errorCode":"INVALID_ACCOUNT_TYPE"}"#;

async fn upstream_list(
    State(mock): State<Arc<MockUpstream>>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let fail = query.iter().any(|(name, _)| name == "fail");
    let extended = query.iter().any(|(name, _)| name == "extended");
    mock.record(headers, query, Bytes::new());
    if fail {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "The database is currently unreachable" })),
        )
            .into_response();
    }
    if extended {
        return Json(extended_page_json()).into_response();
    }
    Json(page_json()).into_response()
}

async fn upstream_create(
    State(mock): State<Arc<MockUpstream>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    mock.record(headers, Vec::new(), body.clone());
    let input: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if input["accountType"] != "asset" {
        return (
            StatusCode::BAD_REQUEST,
            [("content-type", "application/json")],
            INVALID_ACCOUNT_TYPE_BODY,
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({ "id": 1, "accountType": input["accountType"], "name": input["name"] })),
    )
        .into_response()
}

/// モック上流を起動し、そのアドレスを返す
async fn spawn_upstream(mock: Arc<MockUpstream>) -> SocketAddr {
    let app = Router::new()
        .route(
            "/api/ledger-accounts",
            get(upstream_list).post(upstream_create),
        )
        .route("/api/info", get(|| async { "hello" }))
        .with_state(mock);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// 接続を受け付けないアドレスを返す
async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn bff_app(upstream: SocketAddr) -> Router {
    let base_url = format!("http://{upstream}");
    build_app(
        Arc::new(LedgerApiClientImpl::new(&base_url)),
        Arc::new(ReadinessState::new(&base_url)),
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body)
}

fn proxy_failed_body() -> Value {
    json!({ "statusCode": 500, "statusMessage": "Proxy request failed" })
}

// --- GET ---

#[tokio::test]
async fn test_get一覧は上流のページをそのまま返す() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock.clone()).await);

    let (status, _, body) = send(
        app,
        Request::builder()
            .uri("/api/ledger-accounts?limit=10&offset=0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), page_json());
}

#[tokio::test]
async fn test_getのクエリパラメータは過不足なく上流に届く() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock.clone()).await);

    send(
        app,
        Request::builder()
            .uri("/api/ledger-accounts?limit=10&offset=0&name=Cash%20%26%20Bank")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(
        mock.last().query,
        vec![
            ("limit".to_string(), "10".to_string()),
            ("offset".to_string(), "0".to_string()),
            ("name".to_string(), "Cash & Bank".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_getで重複したクエリ名はカンマ連結で上流に届く() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock.clone()).await);

    send(
        app,
        Request::builder()
            .uri("/api/ledger-accounts?limit=10&limit=20")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(
        mock.last().query,
        vec![("limit".to_string(), "10,20".to_string())]
    );
}

#[tokio::test]
async fn test_get一覧は上流のjsonを加工せずに返す() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock).await);

    let (status, _, body) = send(
        app,
        Request::builder()
            .uri("/api/ledger-accounts?extended=1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        extended_page_json()
    );
}

#[tokio::test]
async fn test_getでクエリがなければ上流にも付けない() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock.clone()).await);

    send(
        app,
        Request::builder()
            .uri("/api/ledger-accounts")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert!(mock.last().query.is_empty());
}

#[tokio::test]
async fn test_getの受信ヘッダーはすべて変更されずに上流に届く() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock.clone()).await);

    let request = Request::builder()
        .uri("/api/ledger-accounts")
        .header("authorization", "Bearer token-123")
        .header("accept-language", "ja-JP")
        .header("x-custom-header", "custom value")
        .header("x-request-id", "client-request-id-1")
        .body(Body::empty())
        .unwrap();
    let inbound = request.headers().clone();

    send(app, request).await;

    let received = mock.last().headers;
    for (name, value) in &inbound {
        assert_eq!(
            received.get(name),
            Some(value),
            "ヘッダー {name} がそのまま上流に届くこと"
        );
    }
}

/// GET の失敗はすべて同じ 500 の固定ボディになる
#[rstest]
#[case::上流がエラーを返す(true, "/api/ledger-accounts?fail=1")]
#[case::上流に存在しないパス(true, "/api/ledger-accounts/42")]
#[case::上流に到達できない(false, "/api/ledger-accounts?limit=10&offset=0")]
#[tokio::test]
async fn test_getの失敗は500の固定ボディになる(
    #[case] upstream_running: bool,
    #[case] uri: &str,
) {
    let upstream = if upstream_running {
        spawn_upstream(Arc::new(MockUpstream::default())).await
    } else {
        unreachable_addr().await
    };
    let app = bff_app(upstream);

    let (status, _, body) = send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        proxy_failed_body()
    );
}

// --- POST ---

#[tokio::test]
async fn test_post作成はボディを転送し上流のステータスを返す() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock.clone()).await);
    let request_body = r#"{"accountType":"asset","name":"Cash"}"#;

    let (status, _, body) = send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/ledger-accounts")
            .header("content-type", "application/json")
            .header("authorization", "Bearer token-123")
            .body(Body::from(request_body))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({ "id": 1, "accountType": "asset", "name": "Cash" })
    );
    let received = mock.last();
    assert_eq!(received.body, Bytes::from_static(request_body.as_bytes()));
    assert_eq!(
        received.headers.get("authorization").unwrap(),
        "Bearer token-123"
    );
}

#[tokio::test]
async fn test_postで上流のhttpエラーはステータスとボディがそのまま返る() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock).await);

    let (status, headers, body) = send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/ledger-accounts")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"accountType":"equity","name":"Capital"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
    assert_eq!(body, Bytes::from_static(INVALID_ACCOUNT_TYPE_BODY.as_bytes()));
}

#[tokio::test]
async fn test_postで上流に到達できなければ500の固定ボディになる() {
    let app = bff_app(unreachable_addr().await);

    let (status, _, body) = send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/ledger-accounts")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"accountType":"asset","name":"Cash"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        proxy_failed_body()
    );
}

// --- クライアント直接 ---

#[tokio::test]
async fn test_forward_getは上流のエラーを区別せずfailedにする() {
    let mock = Arc::new(MockUpstream::default());
    let addr = spawn_upstream(mock).await;
    let client = LedgerApiClientImpl::new(&format!("http://{addr}"));

    let result = client
        .forward_get(
            "/api/ledger-accounts",
            &HeaderMap::new(),
            &[("fail".to_string(), "1".to_string())],
        )
        .await;

    assert!(matches!(result, Err(ProxyError::Failed)));
}

#[tokio::test]
async fn test_forward_postは上流のエラーをupstreamとして保持する() {
    let mock = Arc::new(MockUpstream::default());
    let addr = spawn_upstream(mock).await;
    let client = LedgerApiClientImpl::new(&format!("http://{addr}"));

    let result = client
        .forward_post(
            "/api/ledger-accounts",
            &HeaderMap::new(),
            Bytes::from_static(br#"{"accountType":"equity","name":"Capital"}"#),
        )
        .await;

    match result {
        Err(ProxyError::Upstream { status, body, .. }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, Bytes::from_static(INVALID_ACCOUNT_TYPE_BODY.as_bytes()));
        }
        other => panic!("Upstream を期待したが {other:?} を受け取った"),
    }
}

// --- Readiness ---

#[tokio::test]
async fn test_readinessは上流が応答すれば200() {
    let mock = Arc::new(MockUpstream::default());
    let app = bff_app(spawn_upstream(mock).await);

    let (status, _, body) = send(
        app,
        Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({ "status": "ready", "checks": { "ledger_api": "ok" } })
    );
}

#[tokio::test]
async fn test_readinessは上流に到達できなければ503() {
    let app = bff_app(unreachable_addr().await);

    let (status, _, body) = send(
        app,
        Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "not_ready");
    assert_eq!(json["checks"]["ledger_api"], "error");
}
