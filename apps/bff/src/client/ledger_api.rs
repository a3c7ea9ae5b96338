//! # Ledger API クライアント（プロキシ転送）
//!
//! BFF が受けたリクエストを上流の Ledger API へそのまま転送する。
//!
//! ## 転送ルール
//!
//! - URL: `base_url + path`。GET はクエリパラメータを名前・値ともそのまま付与する
//! - ヘッダー: 受信したものをすべてそのままコピーする
//! - POST: 受信したボディを加工せずに送る
//!
//! ## エラーの扱い
//!
//! | 失敗 | GET | POST |
//! |------|-----|------|
//! | 通信エラー（接続拒否、DNS 等） | `Failed` | `Failed` |
//! | 上流の非 2xx レスポンス | `Failed` | `Upstream`（ステータス・ボディをそのまま） |
//! | 成功ボディが JSON でない | `Failed` | `Failed` |
//!
//! 書き込み系は上流のバリデーションエラーをユーザーに見せる必要があるため、
//! POST のみ上流のエラーを中継する。

mod error;
mod response;

use async_trait::async_trait;
use axum::http::{HeaderMap, header::CONTENT_TYPE};
use bytes::Bytes;
pub use error::ProxyError;
pub use response::UpstreamResponse;

use self::response::read_json_body;

/// Ledger API への転送クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait LedgerApiClient: Send + Sync {
    /// GET リクエストを転送する
    ///
    /// # 引数
    ///
    /// - `path`: 上流での相対パス（例: `/api/ledger-accounts`）
    /// - `headers`: 受信したリクエストヘッダー
    /// - `query`: 受信したクエリパラメータ（名前・値の組）
    async fn forward_get(
        &self,
        path: &str,
        headers: &HeaderMap,
        query: &[(String, String)],
    ) -> Result<UpstreamResponse, ProxyError>;

    /// POST リクエストを転送する
    ///
    /// # 引数
    ///
    /// - `path`: 上流での相対パス
    /// - `headers`: 受信したリクエストヘッダー
    /// - `body`: 読み切った受信ボディ
    async fn forward_post(
        &self,
        path: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<UpstreamResponse, ProxyError>;
}

/// Ledger API クライアント実装
#[derive(Clone)]
pub struct LedgerApiClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl LedgerApiClientImpl {
    /// 新しい LedgerApiClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: Ledger API のベース URL（例: `http://localhost:5000`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl LedgerApiClient for LedgerApiClientImpl {
    #[tracing::instrument(skip_all, fields(path = %path))]
    async fn forward_get(
        &self,
        path: &str,
        headers: &HeaderMap,
        query: &[(String, String)],
    ) -> Result<UpstreamResponse, ProxyError> {
        let url = self.url(path);

        let response = match self
            .client
            .get(&url)
            .headers(headers.clone())
            .query(query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "service_communication",
                    "Ledger API への GET 転送に失敗しました: {}",
                    e
                );
                return Err(ProxyError::Failed);
            }
        };

        let status = response.status();
        if !status.is_success() {
            // GET は上流のエラー詳細を呼び出し元に渡さない
            tracing::error!(
                error.category = "external_service",
                error.kind = "upstream_status",
                status = status.as_u16(),
                "Ledger API が GET にエラーを返しました"
            );
            return Err(ProxyError::Failed);
        }

        read_json_body(response).await.map_err(|e| {
            tracing::error!(
                error.category = "external_service",
                error.kind = "invalid_body",
                "Ledger API の GET レスポンスを読み取れませんでした: {}",
                e
            );
            ProxyError::Failed
        })
    }

    #[tracing::instrument(skip_all, fields(path = %path, body_len = body.len()))]
    async fn forward_post(
        &self,
        path: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<UpstreamResponse, ProxyError> {
        let url = self.url(path);

        let response = match self
            .client
            .post(&url)
            .headers(headers.clone())
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "service_communication",
                    "Ledger API への POST 転送に失敗しました: {}",
                    e
                );
                return Err(ProxyError::Failed);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let content_type = response.headers().get(CONTENT_TYPE).cloned();
            return match response.bytes().await {
                Ok(body) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        "Ledger API が POST にエラーを返しました。そのまま中継します"
                    );
                    Err(ProxyError::Upstream {
                        status,
                        content_type,
                        body,
                    })
                }
                Err(e) => {
                    tracing::error!(
                        error.category = "external_service",
                        error.kind = "service_communication",
                        "Ledger API のエラーボディを読み取れませんでした: {}",
                        e
                    );
                    Err(ProxyError::Failed)
                }
            };
        }

        read_json_body(response).await.map_err(|e| {
            tracing::error!(
                error.category = "external_service",
                error.kind = "invalid_body",
                "Ledger API の POST レスポンスを読み取れませんでした: {}",
                e
            );
            ProxyError::Failed
        })
    }
}
