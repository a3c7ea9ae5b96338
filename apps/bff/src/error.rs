//! # BFF エラーハンドリング
//!
//! プロキシエラーの axum レスポンスへの変換。
//!
//! - `Failed` は上流の内容に関わらず `500 {"statusCode":500,"statusMessage":"Proxy request failed"}`
//! - `Upstream` は上流のステータス・Content-Type・ボディをそのまま返す

use axum::{
    Json,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use ledger_shared::ErrorResponse;

use crate::client::ProxyError;

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::Failed => proxy_failed_response(),
            ProxyError::Upstream {
                status,
                content_type,
                body,
            } => {
                let mut response = (status, body).into_response();
                // Bytes の既定値 application/octet-stream を上流の値で置き換える
                match content_type {
                    Some(value) => {
                        response.headers_mut().insert(CONTENT_TYPE, value);
                    }
                    None => {
                        response.headers_mut().remove(CONTENT_TYPE);
                    }
                }
                response
            }
        }
    }
}

/// 汎用のプロキシ失敗レスポンス
pub fn proxy_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::proxy_failed()),
    )
        .into_response()
}
