// 挨拶レスポンスボディ
//
// プロキシレスポンスの`body`に文字列として埋め込まれるJSONの構造を定義する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// エイリアス・リクエストIDが取得できない場合の既定値
pub const UNKNOWN: &str = "unknown";

/// Release2バリアントのメッセージ接頭辞
pub const RELEASE_MESSAGE_PREFIX: &str = "Hello from Lambda Release2 at";

/// second NEW Releaseバリアントのメッセージ接頭辞
pub const SECOND_RELEASE_MESSAGE_PREFIX: &str = "Hello from second NEW Release at";

/// Stageバリアントのメッセージ
pub const STAGE_MESSAGE: &str = "Hello from Lambda";

/// AliasEchoバリアントのメッセージ
pub const ALIAS_MESSAGE: &str = "Hello from Lambda alias";

/// タイムスタンプ書式（UTC、オフセットなし、マイクロ秒精度）
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 挨拶レスポンスボディ
///
/// キー構成はバリアントによって異なる。未設定のフィールドは
/// `null`ではなくキーごと省略される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// リリース系バリアントでのメッセージ（`message`の短縮キー）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// デプロイステージ（STAGE環境変数）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// Lambdaエイリアス（AWS_LAMBDA_FUNCTION_ALIAS環境変数）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl GreetingBody {
    /// リリース系ボディを作成
    ///
    /// # Arguments
    /// * `prefix` - メッセージ接頭辞（末尾にタイムスタンプが付く）
    /// * `now` - 現在時刻
    /// * `stage` - デプロイステージ
    pub fn release(prefix: &str, now: DateTime<Utc>, stage: Option<String>) -> Self {
        Self {
            ok: Some(true),
            msg: Some(format!("{} {}", prefix, format_timestamp(now))),
            stage,
            ..Self::default()
        }
    }

    /// ステージ表示ボディを作成
    pub fn stage(stage: Option<String>) -> Self {
        Self {
            message: Some(STAGE_MESSAGE.to_string()),
            stage,
            ..Self::default()
        }
    }

    /// エイリアス・リクエスト情報を返すボディを作成
    ///
    /// エイリアスが未設定の場合は`"unknown"`を設定する。
    pub fn alias_echo(alias: Option<String>, path: Option<String>, request_id: String) -> Self {
        Self {
            message: Some(ALIAS_MESSAGE.to_string()),
            alias: Some(alias.unwrap_or_else(|| UNKNOWN.to_string())),
            path,
            request_id: Some(request_id),
            ..Self::default()
        }
    }
}

/// タイムスタンプを`YYYY-MM-DDTHH:MM:SS.ffffff`形式に整形
///
/// マイクロ秒が0でも小数部を省略せず常に6桁で出力する（ISO 8601の
/// `isoformat()`系の出力とはこの点で異なる）。固定幅のため文字列順が時刻順と一致する。
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
