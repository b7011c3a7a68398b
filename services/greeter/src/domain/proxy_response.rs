// プロキシレスポンス
//
// API Gatewayプロキシ統合が解釈するレスポンス形式
// `{statusCode, body, headers?}`を定義する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// JSONボディのContent-Type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// API Gatewayプロキシレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTPステータスコード
    pub status_code: u16,

    /// JSONエンコード済みのボディ文字列
    pub body: String,

    /// レスポンスヘッダー（空の場合は省略）
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl ProxyResponse {
    /// 値をJSON文字列にシリアライズしてボディに設定する
    ///
    /// # Errors
    /// 値のシリアライズに失敗した場合
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(value)?,
            headers: BTreeMap::new(),
        })
    }

    /// ヘッダーを追加
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
