//! # Ledger BFF (Backend for Frontend) ライブラリ
//!
//! ブラウザ UI と上流 Ledger API の間に立つ API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `client`: 上流 Ledger API への転送クライアント
//! - `error`: プロキシエラーの HTTP レスポンス変換
//! - `handler`: HTTP ハンドラ

pub mod app_builder;
pub mod client;
pub mod error;
pub mod handler;
