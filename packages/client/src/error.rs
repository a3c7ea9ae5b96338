//! BFF クライアントのエラー型

use serde_json::Value;
use thiserror::Error;

/// BFF 呼び出しの失敗
///
/// レスポンスを受け取れたかどうかでバリアントを分ける。
/// 表示用メッセージの抽出は [`crate::notify`] を参照。
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// 非 2xx のレスポンスを受け取った
    ///
    /// `body` はレスポンスボディの JSON（JSON でなければ `null`）。
    #[error("HTTP エラー {status}")]
    Http { status: u16, body: Value },

    /// レスポンスを受け取る前の失敗、またはボディの解釈失敗
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Other(err.to_string())
    }
}
