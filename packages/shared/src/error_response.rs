//! # プロキシエラーレスポンス
//!
//! BFF が上流呼び出しに失敗したときにクライアントへ返すボディ。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は BFF の責務（shared に axum 依存を入れない）
//! - 上流の詳細は含めない。メッセージは固定値

use serde::{Deserialize, Serialize};

/// プロキシ失敗時の固定メッセージ
pub const PROXY_REQUEST_FAILED: &str = "Proxy request failed";

/// エラーレスポンス
///
/// ```json
/// { "statusCode": 500, "statusMessage": "Proxy request failed" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
   pub status_code:    u16,
   pub status_message: String,
}

impl ErrorResponse {
   pub fn new(status_code: u16, status_message: impl Into<String>) -> Self {
      Self {
         status_code,
         status_message: status_message.into(),
      }
   }

   /// 500 Proxy request failed
   ///
   /// 上流のステータスやメッセージに関わらず同じ内容を返す。
   pub fn proxy_failed() -> Self {
      Self::new(500, PROXY_REQUEST_FAILED)
   }
}
