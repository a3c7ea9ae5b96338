//! # Ledger BFF (Backend for Frontend) サーバー
//!
//! フロントエンド専用の API サーバー。
//!
//! ## 役割
//!
//! BFF はブラウザ UI と上流の Ledger API の間に位置し、
//! 受けたリクエストをそのまま上流へ転送して結果を中継する:
//!
//! - **転送**: クエリパラメータ・ヘッダー・ボディを加工せずに上流へ送る
//! - **エラー正規化**: 上流の失敗を `500 Proxy request failed` に揃える
//!   （POST の上流エラーのみステータス・ボディをそのまま返す）
//! - **形状検証**: 上流のレスポンスをルートごとの型で検証する
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│     BFF      │────▶│  Ledger API  │
//! │     (UI)     │     │  port: 13000 │     │  port: 5000  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BFF_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BFF_PORT` | **Yes** | ポート番号 |
//! | `LEDGER_API_URL` | No | Ledger API の URL（デフォルト: `http://localhost:5000`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p ledger-bff
//!
//! # 本番環境（環境変数を直接指定）
//! BFF_PORT=3000 LEDGER_API_URL=http://ledger:5000 cargo run -p ledger-bff --release
//! ```

mod config;

use std::{net::SocketAddr, sync::Arc};

use config::BffConfig;
use ledger_bff::{app_builder::build_app, client::LedgerApiClientImpl, handler::ReadinessState};
use ledger_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// BFF サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("bff"));
    let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

    let config = BffConfig::from_env()?;

    tracing::info!(
        ledger_api_url = %config.ledger_api_url,
        "BFF サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let ledger_api_client = Arc::new(LedgerApiClientImpl::new(&config.ledger_api_url));
    let readiness_state = Arc::new(ReadinessState::new(&config.ledger_api_url));
    let app = build_app(ledger_api_client, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Ctrl+C を受けたらサーバーを停止する
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("BFF サーバーを停止します");
}
