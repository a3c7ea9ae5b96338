//! Ledger API プロキシのエラー型

use axum::http::{HeaderValue, StatusCode};
use bytes::Bytes;
use thiserror::Error;

/// プロキシ転送エラー
///
/// 呼び出し元に見せる形まで正規化済みのエラー。
/// GET は常に [`Failed`](ProxyError::Failed) に畳み込まれ、
/// POST のみ上流の HTTP エラーを [`Upstream`](ProxyError::Upstream) として保持する。
#[derive(Debug, Clone, Error)]
pub enum ProxyError {
    /// 汎用の転送失敗（500 Proxy request failed）
    #[error("Proxy request failed")]
    Failed,

    /// 上流が返した HTTP エラーをそのまま中継する
    #[error("上流がエラーを返しました: {status}")]
    Upstream {
        status:       StatusCode,
        content_type: Option<HeaderValue>,
        body:         Bytes,
    },
}
