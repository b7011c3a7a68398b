// デプロイ設定
//
// 環境変数からステージ・エイリアス・応答バリアントを読み込み、
// 型安全に提供するインフラストラクチャ層コンポーネント。

use tracing::{debug, warn};

use crate::domain::GreetingVariant;

/// 環境変数名: デプロイステージ
pub const ENV_STAGE: &str = "STAGE";

/// 環境変数名: Lambdaエイリアス
pub const ENV_FUNCTION_ALIAS: &str = "AWS_LAMBDA_FUNCTION_ALIAS";

/// 環境変数名: 応答バリアント
pub const ENV_GREETING_VARIANT: &str = "GREETING_VARIANT";

/// デプロイ設定
///
/// 未設定の環境変数のみ`None`として扱う。空文字は値としてそのまま保持する。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeploymentConfig {
    /// デプロイステージ (STAGE環境変数)
    pub stage: Option<String>,
    /// Lambdaエイリアス (AWS_LAMBDA_FUNCTION_ALIAS環境変数)
    pub alias: Option<String>,
    /// 応答バリアント (GREETING_VARIANT環境変数、デフォルト: release)
    pub variant: GreetingVariant,
}

impl DeploymentConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - STAGE: デプロイステージ
    /// - AWS_LAMBDA_FUNCTION_ALIAS: Lambdaエイリアス
    /// - GREETING_VARIANT: 応答バリアント（不正な値の場合はデフォルトを使用）
    pub fn from_env() -> Self {
        let stage = get_optional_string(ENV_STAGE);
        let alias = get_optional_string(ENV_FUNCTION_ALIAS);
        let variant = parse_variant(get_optional_string(ENV_GREETING_VARIANT));

        debug!(
            stage = stage.as_deref(),
            alias = alias.as_deref(),
            variant = %variant,
            "DeploymentConfig loaded"
        );

        Self {
            stage,
            alias,
            variant,
        }
    }

    /// テスト用に明示的な値で作成
    pub fn new(stage: Option<String>, alias: Option<String>, variant: GreetingVariant) -> Self {
        Self {
            stage,
            alias,
            variant,
        }
    }
}

/// 文字列オプションを読み込む（未設定のみNone、空文字はSome("")）
fn get_optional_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// バリアント名をパースする
///
/// 未設定の場合はデフォルト、不正な名前の場合は警告を出してデフォルトを返す。
fn parse_variant(value: Option<String>) -> GreetingVariant {
    match value {
        Some(name) => match name.parse::<GreetingVariant>() {
            Ok(variant) => variant,
            Err(err) => {
                let default = GreetingVariant::default();
                warn!(
                    key = ENV_GREETING_VARIANT,
                    error = %err,
                    default = %default,
                    "Environment variable parse error, using default"
                );
                default
            }
        },
        None => GreetingVariant::default(),
    }
}
