// 呼び出し入力
//
// プラットフォームから渡されるイベントとコンテキストのうち、
// ハンドラーが参照する値だけを取り出した読み取り専用ビュー。

use serde_json::Value;

use super::greeting::UNKNOWN;

/// 呼び出しイベント
///
/// イベント本体の構造は検証しない。`path`キーが文字列の場合のみ取り出す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationEvent {
    pub path: Option<String>,
}

impl InvocationEvent {
    /// パスを指定して作成
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// 任意のJSON値からイベントを取り出す
    ///
    /// オブジェクト以外の値や、`path`が文字列でない場合は`path = None`とし、
    /// エラーにはしない。
    pub fn from_value(payload: &Value) -> Self {
        let path = payload
            .get("path")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { path }
    }
}

/// 呼び出しメタデータ
///
/// コンテキストから読み取ったリクエストIDを保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationMeta {
    pub request_id: String,
}

impl InvocationMeta {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// コンテキストが存在しない場合のメタデータ
    pub fn unknown() -> Self {
        Self::new(UNKNOWN)
    }
}

impl From<&lambda_runtime::Context> for InvocationMeta {
    fn from(context: &lambda_runtime::Context) -> Self {
        if context.request_id.is_empty() {
            Self::unknown()
        } else {
            Self::new(context.request_id.clone())
        }
    }
}
