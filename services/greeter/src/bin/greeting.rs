/// 挨拶Lambdaエントリポイント（API Gatewayプロキシ統合）
///
/// API Gateway REST APIからプロキシ統合で呼び出され、
/// `{statusCode, body, headers}`形式のJSONを返却する。
///
/// # 環境変数
/// - STAGE: デプロイステージ（任意）
/// - AWS_LAMBDA_FUNCTION_ALIAS: Lambdaエイリアス（任意、未設定時は"unknown"）
/// - GREETING_VARIANT: 応答バリアント（任意、デフォルト: release）
use chrono::Utc;
use greeter::application::GreetingHandler;
use greeter::domain::{InvocationEvent, InvocationMeta};
use greeter::infrastructure::{init_logging, DeploymentConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("挨拶Lambda関数を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. 環境変数からデプロイ設定を読み込み
/// 2. イベントからpath、コンテキストからリクエストIDを取り出す
/// 3. 現在時刻を使ってプロキシレスポンスを生成
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();

    let config = DeploymentConfig::from_env();
    let greeting_handler = GreetingHandler::new(config);

    let invocation = InvocationEvent::from_value(&payload);
    let meta = InvocationMeta::from(&context);

    let response = greeting_handler.handle(&invocation, &meta, Utc::now())?;

    Ok(serde_json::to_value(response)?)
}
