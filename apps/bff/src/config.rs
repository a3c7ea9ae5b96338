//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// Ledger API のデフォルト URL
const DEFAULT_LEDGER_API_URL: &str = "http://localhost:5000";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// BFF サーバーの設定
#[derive(Debug, Clone)]
pub struct BffConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// Ledger API のベース URL
    ///
    /// 起動時に一度だけ読み込み、以後は変更しない。
    pub ledger_api_url: String,
}

impl BffConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    ///
    /// テストでプロセス全体の環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port_value = lookup("BFF_PORT").ok_or(ConfigError::Missing("BFF_PORT"))?;
        let port = port_value.parse().map_err(|_| ConfigError::Invalid {
            name:  "BFF_PORT",
            value: port_value.clone(),
        })?;

        let ledger_api_url =
            lookup("LEDGER_API_URL").unwrap_or_else(|| DEFAULT_LEDGER_API_URL.to_string());
        if !ledger_api_url.starts_with("http://") && !ledger_api_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name:  "LEDGER_API_URL",
                value: ledger_api_url,
            });
        }

        Ok(Self {
            host: lookup("BFF_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            ledger_api_url,
        })
    }
}
