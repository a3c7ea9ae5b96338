//! # ヘルスチェックハンドラ
//!
//! BFF の稼働状態を確認するためのエンドポイント。
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（上流 Ledger API への到達性を確認）

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use ledger_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// 上流の疎通確認に使うパス
const LEDGER_API_INFO_PATH: &str = "/api/info";

/// 疎通確認のタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// BFF のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub ledger_api_url: String,
    pub http_client:    reqwest::Client,
}

impl ReadinessState {
    pub fn new(ledger_api_url: &str) -> Self {
        Self {
            ledger_api_url: ledger_api_url.trim_end_matches('/').to_string(),
            http_client:    reqwest::Client::new(),
        }
    }
}

/// BFF の Readiness Check エンドポイント
///
/// 上流が応答すれば 200、応答しなければ 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let ledger_api = check_ledger_api(&state.http_client, &state.ledger_api_url).await;

    let mut checks = HashMap::new();
    checks.insert("ledger_api".to_string(), ledger_api);

    let response = ReadinessResponse::from_checks(checks);
    let http_status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (http_status, Json(response))
}

/// Ledger API の `/api/info` を呼び、2xx なら OK とする
async fn check_ledger_api(client: &reqwest::Client, base_url: &str) -> CheckStatus {
    let url = format!("{base_url}{LEDGER_API_INFO_PATH}");
    match tokio::time::timeout(CHECK_TIMEOUT, client.get(&url).send()).await {
        Ok(Ok(response)) if response.status().is_success() => CheckStatus::Ok,
        Ok(Ok(response)) => {
            tracing::warn!(
                status = response.status().as_u16(),
                "readiness check: ledger api returned error status"
            );
            CheckStatus::Error
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: ledger api request failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: ledger api check timed out");
            CheckStatus::Error
        }
    }
}
