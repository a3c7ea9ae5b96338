//! # Ledger BFF クライアント
//!
//! UI 側から BFF を呼び出すためのクライアントと、失敗時のエラー表示を提供する。
//!
//! ## モジュール構成
//!
//! - `error`: BFF 呼び出しの失敗を表す `ClientError`
//! - `ledger_client`: 勘定科目 API の型付きクライアント
//! - `notify`: 失敗から表示用メッセージを取り出し、トーストで通知する

pub mod error;
pub mod ledger_client;
pub mod notify;

pub use error::ClientError;
pub use ledger_client::LedgerClient;
pub use notify::{
    Toaster,
    TracingToaster,
    UNKNOWN_ERROR_MESSAGE,
    error_message,
    handle_error_from_server,
    server_error_message,
};
