// 挨拶レスポンス生成ハンドラー
//
// デプロイ設定と呼び出し入力からバリアントに応じたボディを組み立て、
// API Gatewayプロキシレスポンス、またはHTTPレスポンスとして返す。

use chrono::{DateTime, Utc};
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::{Body, Response};
use thiserror::Error;
use tracing::info;

use crate::domain::{
    GreetingBody, GreetingVariant, InvocationEvent, InvocationMeta, ProxyResponse,
    CONTENT_TYPE_JSON, RELEASE_MESSAGE_PREFIX, SECOND_RELEASE_MESSAGE_PREFIX,
};
use crate::infrastructure::DeploymentConfig;

/// 常に返すステータスコード
pub const STATUS_OK: u16 = 200;

/// レスポンス生成エラー
#[derive(Debug, Error)]
pub enum GreetingError {
    /// ボディのシリアライズに失敗
    #[error("failed to serialize greeting body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// HTTPレスポンスの構築に失敗
    #[error("failed to build HTTP response: {0}")]
    Http(#[from] lambda_http::http::Error),
}

/// 挨拶レスポンス生成ハンドラー
///
/// 環境変数と時計には触れない。呼び出し側が読み込んだ設定と
/// 現在時刻を受け取るため、同じ入力には同じ出力を返す。
#[derive(Debug, Clone)]
pub struct GreetingHandler {
    config: DeploymentConfig,
}

impl GreetingHandler {
    pub fn new(config: DeploymentConfig) -> Self {
        Self { config }
    }

    /// バリアントに応じたボディを組み立てる
    pub fn build_body(
        &self,
        event: &InvocationEvent,
        meta: &InvocationMeta,
        now: DateTime<Utc>,
    ) -> GreetingBody {
        let stage = self.config.stage.clone();

        match self.config.variant {
            GreetingVariant::Release => GreetingBody::release(RELEASE_MESSAGE_PREFIX, now, stage),
            GreetingVariant::SecondRelease => {
                GreetingBody::release(SECOND_RELEASE_MESSAGE_PREFIX, now, stage)
            }
            GreetingVariant::Stage => GreetingBody::stage(stage),
            GreetingVariant::AliasEcho => GreetingBody::alias_echo(
                self.config.alias.clone(),
                event.path.clone(),
                meta.request_id.clone(),
            ),
        }
    }

    /// API Gatewayプロキシ形式のレスポンスを生成
    ///
    /// # Errors
    /// ボディのシリアライズに失敗した場合
    pub fn handle(
        &self,
        event: &InvocationEvent,
        meta: &InvocationMeta,
        now: DateTime<Utc>,
    ) -> Result<ProxyResponse, GreetingError> {
        let variant = self.config.variant;
        info!(
            request_id = %meta.request_id,
            variant = %variant,
            path = event.path.as_deref(),
            "greeting invoked"
        );

        let body = self.build_body(event, meta, now);
        let response = ProxyResponse::json(STATUS_OK, &body)?;

        if variant.includes_headers() {
            Ok(response.with_header(CONTENT_TYPE.as_str(), CONTENT_TYPE_JSON))
        } else {
            Ok(response)
        }
    }

    /// HTTPレスポンスを生成（Function URL向け）
    ///
    /// ボディとヘッダーは`handle`と同一。
    ///
    /// # Errors
    /// ボディのシリアライズ、またはレスポンスの構築に失敗した場合
    pub fn handle_http(
        &self,
        event: &InvocationEvent,
        meta: &InvocationMeta,
        now: DateTime<Utc>,
    ) -> Result<Response<Body>, GreetingError> {
        let proxy = self.handle(event, meta, now)?;

        let mut builder = Response::builder().status(proxy.status_code);
        for (name, value) in &proxy.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        Ok(builder.body(Body::Text(proxy.body))?)
    }
}
