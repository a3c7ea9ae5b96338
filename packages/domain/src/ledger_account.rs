//! # 勘定科目（Ledger Account）
//!
//! 上流の Ledger API が所有する勘定科目リソースの写像。
//!
//! ## JSON 形式
//!
//! ```json
//! { "id": 1, "accountType": "asset", "name": "Cash" }
//! ```
//!
//! ## 使用例
//!
//! ```rust
//! use ledger_domain::ledger_account::{AccountType, CreateAccount};
//!
//! let input = CreateAccount::new(AccountType::Asset, "Cash");
//! assert_eq!(input.name, "Cash");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 勘定科目の識別子
///
/// 上流で採番される整数 ID。BFF 側で生成することはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// 上流から受け取った値で ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 勘定科目の種別
///
/// 種別の集合は上流 API が所有する。既知の 4 種以外の値も
/// [`Other`](AccountType::Other) としてそのまま保持し、ここでは拒否しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    /// 資産
    Asset,
    /// 負債
    Liability,
    /// 収益
    Income,
    /// 費用
    Expense,
    /// 上流が返した未知の種別
    Other(String),
}

impl AccountType {
    /// JSON / クエリ文字列上の表現
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other(value) => value,
        }
    }

    fn known(s: &str) -> Option<Self> {
        match s {
            "asset" => Some(Self::Asset),
            "liability" => Some(Self::Liability),
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AccountType {
    fn from(value: String) -> Self {
        match Self::known(&value) {
            Some(known) => known,
            None => Self::Other(value),
        }
    }
}

impl From<AccountType> for String {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// 不明な勘定科目種別
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("不明な勘定科目種別です: {0}")]
pub struct ParseAccountTypeError(String);

/// UI の入力値を既知の種別として解釈する
///
/// 上流の応答と違い、入力は既知の 4 種に限る。
impl FromStr for AccountType {
    type Err = ParseAccountTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::known(s).ok_or_else(|| ParseAccountTypeError(s.to_string()))
    }
}

/// 勘定科目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id:           AccountId,
    pub account_type: AccountType,
    pub name:         String,
}

/// 勘定科目の作成リクエスト
///
/// BFF はボディを解釈せずに上流へ転送するため、この型はクライアント側でのみ使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub account_type: AccountType,
    pub name:         String,
}

impl CreateAccount {
    pub fn new(account_type: AccountType, name: impl Into<String>) -> Self {
        Self {
            account_type,
            name: name.into(),
        }
    }
}
