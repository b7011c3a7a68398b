/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// CloudWatch Logsで検索しやすいよう、JSON形式で1行1イベントを出力する。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// 環境変数`RUST_LOG`、未設定の場合はinfoレベルでフィルタリングする。
/// 複数回呼び出しても最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use greeter::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!(request_id = "abc-123", "greeting invoked");
/// ```
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // テストから複数経路で呼ばれうるためtry_init
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer(std::io::stdout))
            .try_init();
    });
}

/// JSON形式のログレイヤー（Lambda/CloudWatch向け）
///
/// イベントのフィールドはトップレベルに展開される。
fn json_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false)
        .with_writer(writer)
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::GreetingHandler;
    use crate::domain::{GreetingVariant, InvocationEvent, InvocationMeta};
    use crate::infrastructure::DeploymentConfig;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// 出力をメモリに溜めるライター
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedWriter;

        fn make_writer(&'a self) -> Self::Writer {
            CapturedWriter(self.0.clone())
        }
    }

    impl CapturedLogs {
        /// 1行ずつJSONとしてパース
        fn lines(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    /// infoフィルター + JSONレイヤーで`f`を実行し、出力行を返す
    fn capture_json(f: impl FnOnce()) -> Vec<serde_json::Value> {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("info"))
            .with(json_layer(logs.clone()));

        tracing::subscriber::with_default(subscriber, f);

        logs.lines()
    }

    #[test]
    fn test_init_logging_idempotent() {
        init_test_logging();
        init_test_logging();
        init_logging();
        init_logging();
    }

    /// フィールドはトップレベルに展開され、レベル・ターゲットも出力される
    #[test]
    fn test_json_layer_flattens_event_fields() {
        let lines = capture_json(|| {
            tracing::info!(request_id = "abc-123", variant = "alias", "greeting invoked");
        });

        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line["message"], "greeting invoked");
        assert_eq!(line["request_id"], "abc-123");
        assert_eq!(line["variant"], "alias");
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["target"], module_path!());
        assert!(line["line_number"].is_number());
        assert!(line.get("fields").is_none());
    }

    /// infoフィルターではdebugイベントは出力されない
    #[test]
    fn test_json_layer_respects_filter() {
        let lines = capture_json(|| {
            tracing::debug!(stage = "prod", "stage resolved");
            tracing::warn!("variant fallback");
        });

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "WARN");
    }

    /// ハンドラー呼び出しごとにリクエストIDとバリアント付きの1行が出力される
    #[test]
    fn test_handler_invocation_is_logged() {
        let handler = GreetingHandler::new(DeploymentConfig::new(
            None,
            None,
            GreetingVariant::AliasEcho,
        ));

        let lines = capture_json(|| {
            handler
                .handle(
                    &InvocationEvent::with_path("/hello"),
                    &InvocationMeta::new("abc-123"),
                    chrono::Utc::now(),
                )
                .unwrap();
        });

        let invoked: Vec<_> = lines
            .iter()
            .filter(|line| line["message"] == "greeting invoked")
            .collect();
        assert_eq!(invoked.len(), 1);
        assert_eq!(invoked[0]["request_id"], "abc-123");
        assert_eq!(invoked[0]["variant"], "alias");
        assert_eq!(invoked[0]["path"], "/hello");
    }
}
