/// 挨拶HTTP Lambdaエントリポイント
///
/// Lambda Function URL経由のHTTPリクエストを処理し、
/// プロキシ統合版と同じボディ・ヘッダーのHTTPレスポンスを返却する。
use chrono::Utc;
use greeter::application::GreetingHandler;
use greeter::domain::{InvocationEvent, InvocationMeta};
use greeter::infrastructure::{init_logging, DeploymentConfig};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    info!("挨拶HTTP Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// リクエストURIのパスをイベントのpathとして扱う。
/// Lambdaコンテキストが付与されていない場合、リクエストIDは"unknown"。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let config = DeploymentConfig::from_env();
    let greeting_handler = GreetingHandler::new(config);

    let invocation = InvocationEvent::with_path(request.uri().path());
    let meta = request
        .lambda_context_ref()
        .map(InvocationMeta::from)
        .unwrap_or_else(InvocationMeta::unknown);

    let response = greeting_handler.handle_http(&invocation, &meta, Utc::now())?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter::infrastructure::{ENV_FUNCTION_ALIAS, ENV_GREETING_VARIANT, ENV_STAGE};
    use lambda_http::http::Request as HttpRequest;
    use serial_test::serial;

    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn cleanup_env() {
        unsafe {
            std::env::remove_var(ENV_STAGE);
            std::env::remove_var(ENV_FUNCTION_ALIAS);
            std::env::remove_var(ENV_GREETING_VARIANT);
        }
    }

    fn get_request(uri: &str) -> Request {
        HttpRequest::builder()
            .method("GET")
            .uri(uri)
            .body(Body::Empty)
            .unwrap()
    }

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            Body::Binary(bytes) => String::from_utf8(bytes.clone()).unwrap(),
            Body::Empty => String::new(),
            _ => panic!("予期しないBody型"),
        }
    }

    #[tokio::test]
    #[serial(greeter_env)]
    async fn test_handler_returns_200_with_json_content_type() {
        init_logging();
        unsafe { cleanup_env(); }

        let response = handler(get_request("/")).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let parsed: serde_json::Value = serde_json::from_str(&body_text(&response)).unwrap();
        assert_eq!(parsed["ok"], true);
    }

    /// URIのパスがボディに反映され、コンテキストなしではrequestIdが"unknown"
    #[tokio::test]
    #[serial(greeter_env)]
    async fn test_handler_uses_uri_path() {
        init_logging();
        unsafe {
            cleanup_env();
            set_env(ENV_GREETING_VARIANT, "alias");
            set_env(ENV_FUNCTION_ALIAS, "Prod");
        }

        let response = handler(get_request("/hello?name=x")).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body_text(&response)).unwrap();

        assert_eq!(parsed["path"], "/hello");
        assert_eq!(parsed["alias"], "Prod");
        assert_eq!(parsed["requestId"], "unknown");

        unsafe { cleanup_env(); }
    }

    #[tokio::test]
    #[serial(greeter_env)]
    async fn test_handler_reflects_stage() {
        init_logging();
        unsafe {
            cleanup_env();
            set_env(ENV_GREETING_VARIANT, "stage");
            set_env(ENV_STAGE, "prod");
        }

        let response = handler(get_request("/")).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body_text(&response)).unwrap();

        assert_eq!(parsed["stage"], "prod");
        assert_eq!(parsed["message"], "Hello from Lambda");
        assert!(response.headers().get("content-type").is_none());

        unsafe { cleanup_env(); }
    }
}
