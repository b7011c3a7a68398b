/// 挨拶ハンドラーのローカル実行
///
/// デプロイせずにハンドラーを1回呼び出し、プロキシレスポンスを
/// 整形済みJSONとして標準出力に書き出す。
///
/// # ローカル実行
/// ```bash
/// # 環境変数の設定をそのまま使う
/// STAGE=prod cargo run --bin invoke_local
///
/// # バリアントとpathを指定
/// cargo run --bin invoke_local -- --variant alias --path /hello --request-id abc-123
/// ```
use chrono::Utc;
use clap::Parser;
use greeter::application::GreetingHandler;
use greeter::domain::{GreetingVariant, InvocationEvent, InvocationMeta};
use greeter::infrastructure::{init_logging, DeploymentConfig};
use tracing::info;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "invoke_local")]
#[command(about = "挨拶ハンドラーをローカルで1回呼び出す")]
struct CliArgs {
    /// イベントのpath
    #[arg(long, short = 'p')]
    path: Option<String>,

    /// コンテキストのリクエストID
    #[arg(long, short = 'r', default_value = "local")]
    request_id: String,

    /// 応答バリアント（GREETING_VARIANTより優先）
    #[arg(long, short = 'v')]
    variant: Option<GreetingVariant>,

    /// デプロイステージ（STAGEより優先）
    #[arg(long)]
    stage: Option<String>,

    /// Lambdaエイリアス（AWS_LAMBDA_FUNCTION_ALIASより優先）
    #[arg(long)]
    alias: Option<String>,
}

impl CliArgs {
    /// 環境変数の設定に引数の値を上書きする
    fn apply_to(&self, mut config: DeploymentConfig) -> DeploymentConfig {
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(stage) = &self.stage {
            config.stage = Some(stage.clone());
        }
        if let Some(alias) = &self.alias {
            config.alias = Some(alias.clone());
        }
        config
    }
}

fn main() -> Result<(), Error> {
    init_logging();

    let args = CliArgs::parse();
    let output = invoke(&args, DeploymentConfig::from_env())?;

    info!(request_id = %args.request_id, "ローカル呼び出し完了");
    println!("{}", output);

    Ok(())
}

/// ハンドラーを呼び出して整形済みJSONを返す
fn invoke(args: &CliArgs, env_config: DeploymentConfig) -> Result<String, Error> {
    let greeting_handler = GreetingHandler::new(args.apply_to(env_config));

    let event = InvocationEvent {
        path: args.path.clone(),
    };
    let meta = InvocationMeta::new(args.request_id.clone());

    let response = greeting_handler.handle(&event, &meta, Utc::now())?;

    Ok(serde_json::to_string_pretty(&response)?)
}
