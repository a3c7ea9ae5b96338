//! # Ledger BFF 共有ユーティリティ
//!
//! BFF とクライアントの両方から使われる共通型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ型・ユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は BFF の責務）
//! - トレーシング関連は `observability` feature の背後に置く

pub mod error_response;
pub mod health;
pub mod observability;
pub mod page;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use page::Page;
