//! # 外部 API クライアント
//!
//! 上流の Ledger API との通信を担当する。

pub mod ledger_api;

pub use ledger_api::{LedgerApiClient, LedgerApiClientImpl, ProxyError, UpstreamResponse};
