//! # BFF アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use ledger_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::LedgerApiClient,
    handler::{
        LedgerAccountState,
        ReadinessState,
        create_ledger_account,
        get_ledger_account,
        health_check,
        list_ledger_accounts,
        readiness_check,
    },
};

/// ルーターを構築する
///
/// 転送クライアントはトレイトオブジェクトで受け取り、テストではモック上流を
/// 向いた実装やスタブに差し替えられる。
pub fn build_app(
    ledger_api_client: Arc<dyn LedgerApiClient>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let ledger_account_state = Arc::new(LedgerAccountState { ledger_api_client });

    let health_router = Router::new()
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/ledger-accounts",
            get(list_ledger_accounts).post(create_ledger_account),
        )
        .route("/api/ledger-accounts/{id}", get(get_ledger_account))
        .with_state(ledger_account_state)
        .merge(health_router)
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエストヘッダーに UUID v7 を設定（クライアント提供値があれば優先）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // Request ID はリクエストヘッダーに入るため、ヘッダー転送で上流にも伝わる
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
