//! # Ledger ドメインモデル
//!
//! BFF とクライアントが共有する台帳（ledger）関連の型を定義する。
//!
//! ## 設計方針
//!
//! - エンティティの所有者は上流の Ledger API であり、この層では生成・更新しない
//! - ここにある型はリクエスト / レスポンス 1 回分の寿命しか持たない写像
//! - JSON のフィールド名は上流 API に合わせて camelCase

pub mod ledger_account;

pub use ledger_account::{Account, AccountId, AccountType, CreateAccount, ParseAccountTypeError};
