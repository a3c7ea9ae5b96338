//! Ledger API レスポンスの共通ハンドリング

use axum::http::StatusCode;
use serde_json::Value;

/// 上流の成功レスポンス
///
/// ボディは型付けせず JSON 値のまま保持する。
/// 形状の検証は各ルートハンドラの責務。
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body:   Value,
}

/// 成功レスポンスのボディを JSON 値として読み出す
///
/// 空ボディ（204 など）は `null` として扱う。
pub(super) async fn read_json_body(
    response: reqwest::Response,
) -> Result<UpstreamResponse, String> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;

    if bytes.is_empty() {
        return Ok(UpstreamResponse {
            status,
            body: Value::Null,
        });
    }

    let body = serde_json::from_slice(&bytes).map_err(|e| e.to_string())?;
    Ok(UpstreamResponse { status, body })
}
