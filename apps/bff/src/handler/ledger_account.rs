//! # 勘定科目 API ハンドラ
//!
//! 上流 Ledger API の勘定科目エンドポイントを BFF から公開する。
//!
//! ## エンドポイント
//!
//! - `GET /api/ledger-accounts` - 一覧（クエリパラメータをそのまま転送）
//! - `POST /api/ledger-accounts` - 作成（ボディをそのまま転送）
//! - `GET /api/ledger-accounts/{id}` - 詳細

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use bytes::Bytes;
use ledger_domain::Account;
use ledger_shared::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{LedgerApiClient, ProxyError, UpstreamResponse};

/// 上流の勘定科目リソースのパス
const LEDGER_ACCOUNTS_PATH: &str = "/api/ledger-accounts";

/// 勘定科目 API の共有状態
pub struct LedgerAccountState {
    pub ledger_api_client: Arc<dyn LedgerApiClient>,
}

/// GET /api/ledger-accounts
///
/// 受信したヘッダーとクエリパラメータを付けて上流の一覧 API を呼ぶ。
pub async fn list_ledger_accounts(
    State(state): State<Arc<LedgerAccountState>>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<Value>), ProxyError> {
    let query = join_repeated(query);

    let upstream = state
        .ledger_api_client
        .forward_get(LEDGER_ACCOUNTS_PATH, &headers, &query)
        .await?;

    pass_through::<Page<Account>>("勘定科目一覧取得", upstream)
}

/// GET /api/ledger-accounts/{id}
pub async fn get_ledger_account(
    State(state): State<Arc<LedgerAccountState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Value>), ProxyError> {
    let path = format!("{LEDGER_ACCOUNTS_PATH}/{id}");

    let upstream = state
        .ledger_api_client
        .forward_get(&path, &headers, &[])
        .await?;

    pass_through::<Account>("勘定科目取得", upstream)
}

/// POST /api/ledger-accounts
///
/// ボディは解釈せずに転送する。入力の検証は上流が行い、
/// そのエラーは上流のステータス・ボディのまま返る。
pub async fn create_ledger_account(
    State(state): State<Arc<LedgerAccountState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ProxyError> {
    let upstream = state
        .ledger_api_client
        .forward_post(LEDGER_ACCOUNTS_PATH, &headers, body)
        .await?;

    pass_through::<Account>("勘定科目作成", upstream)
}

/// 上流の JSON を加工せずに返す
///
/// ルートが宣言する形状 `T` として読めるかだけを借用で確かめ、
/// 返すのは上流のボディそのもの。読めない場合はログに残し、汎用の 500 を返す。
fn pass_through<T>(
    context: &str,
    upstream: UpstreamResponse,
) -> Result<(StatusCode, Json<Value>), ProxyError>
where
    T: DeserializeOwned,
{
    if let Err(e) = T::deserialize(&upstream.body) {
        tracing::error!(
            error.category = "external_service",
            error.kind = "unexpected_shape",
            "{}で上流レスポンスの形式が不正です: {}",
            context,
            e
        );
        return Err(ProxyError::Failed);
    }

    Ok((upstream.status, Json(upstream.body)))
}

/// 同名のクエリパラメータを 1 つの値にまとめる
///
/// 値は常に単一の文字列として扱う。重複した名前の値は `,` で連結し、
/// 最初に現れた位置に置く（`?limit=10&limit=20` は `limit=10,20` になる）。
fn join_repeated(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut result: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        match result.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => {
                entry.1.push(',');
                entry.1.push_str(&value);
            }
            None => result.push((name, value)),
        }
    }
    result
}
