//! # 勘定科目 API クライアント
//!
//! UI から BFF の勘定科目エンドポイントを呼び出す。
//!
//! ## エンドポイント
//!
//! - `GET /api/ledger-accounts` - 一覧
//! - `GET /api/ledger-accounts/{id}` - 詳細
//! - `POST /api/ledger-accounts` - 作成

use ledger_domain::{Account, AccountId, CreateAccount};
use ledger_shared::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// BFF の勘定科目クライアント
#[derive(Clone)]
pub struct LedgerClient {
    base_url: String,
    client:   reqwest::Client,
}

impl LedgerClient {
    /// 新しい LedgerClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: BFF のベース URL（例: `http://localhost:13000`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    /// 勘定科目の一覧を取得する
    ///
    /// `limit` / `offset` を省略した場合は上流のデフォルトに従う。
    pub async fn list_accounts(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Page<Account>, ClientError> {
        let url = format!("{}/api/ledger-accounts", self.base_url);

        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;
        handle_response(response).await
    }

    /// 勘定科目を取得する
    pub async fn get_account(&self, id: AccountId) -> Result<Account, ClientError> {
        let url = format!("{}/api/ledger-accounts/{}", self.base_url, id);

        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }

    /// 勘定科目を作成する
    pub async fn create_account(&self, input: &CreateAccount) -> Result<Account, ClientError> {
        let url = format!("{}/api/ledger-accounts", self.base_url);

        let response = self.client.post(&url).json(input).send().await?;
        handle_response(response).await
    }
}

/// レスポンスの共通ハンドリング
///
/// 成功時はボディを `T` にデシリアライズし、
/// 非 2xx はボディを JSON として保持した `ClientError::Http` にする。
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);

    Err(ClientError::Http {
        status: status.as_u16(),
        body,
    })
}
