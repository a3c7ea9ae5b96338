//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - ハンドラは薄く保ち、データの所有と検証ルールは上流の Ledger API に委ねる
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `ledger_account`: 勘定科目の一覧・取得・作成（上流への転送）

pub mod health;
pub mod ledger_account;

pub use health::{ReadinessState, health_check, readiness_check};
pub use ledger_account::{
    LedgerAccountState,
    create_ledger_account,
    get_ledger_account,
    list_ledger_accounts,
};
