//! # エラー通知
//!
//! BFF 呼び出しの失敗から表示用メッセージを取り出し、トーストで通知する。
//!
//! メッセージはレスポンスボディの `data.error` から取り出す。
//! 取り出せない場合は固定の文言にフォールバックする。
//!
//! ```json
//! { "data": { "error": "Insufficient funds" } }
//! ```

use serde_json::Value;

use crate::error::ClientError;

/// メッセージを取り出せなかったときの文言
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// トースト通知の出力先
///
/// 一時的でブロックしない通知を想定する。UI 側で実装を差し込む。
pub trait Toaster: Send + Sync {
    /// エラーのトーストを表示する
    fn error(&self, message: &str);
}

/// tracing に出力するだけのトースト実装
///
/// UI を持たない環境（CLI、ヘッドレス実行）で使う。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToaster;

impl Toaster for TracingToaster {
    fn error(&self, message: &str) {
        tracing::warn!(toast = "error", "{}", message);
    }
}

/// 失敗からユーザー向けのメッセージを取り出す
pub fn server_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Http { body, .. } => nested_error(body)
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        ClientError::Other(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}

/// 任意のエラー値からメッセージを取り出す
///
/// `ClientError` でなければフォールバック文言を返す。
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(client_error) => server_error_message(client_error),
        None => UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}

/// 失敗をトーストで通知する
pub fn handle_error_from_server(err: &ClientError, toaster: &dyn Toaster) {
    let message = server_error_message(err);
    toaster.error(&message);
}

/// `data.error` が空でない文字列なら返す
fn nested_error(body: &Value) -> Option<&str> {
    body.get("data")?
        .get("error")?
        .as_str()
        .filter(|message| !message.is_empty())
}
