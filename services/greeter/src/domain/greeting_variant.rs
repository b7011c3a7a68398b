// 応答バリアント
//
// デプロイごとに異なるレスポンス形状（メッセージ文言・フィールド構成）を
// 列挙型として保持するドメイン層コンポーネント。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// バリアント名のパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VariantParseError {
    /// 未知のバリアント名
    #[error("unknown greeting variant: {0}")]
    UnknownVariant(String),
}

/// 応答バリアント
///
/// 各バリアントはボディのキー構成とヘッダー有無を決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingVariant {
    /// `ok` + `msg`（Release2文言、タイムスタンプ付き）+ `stage`
    #[default]
    Release,
    /// `ok` + `msg`（second NEW Release文言、タイムスタンプ付き）+ `stage`
    SecondRelease,
    /// `message` + `stage`
    Stage,
    /// `message` + `alias` + `path` + `requestId`
    AliasEcho,
}

/// 全バリアント（ヘルプ表示・テスト用）
pub const ALL_VARIANTS: &[GreetingVariant] = &[
    GreetingVariant::Release,
    GreetingVariant::SecondRelease,
    GreetingVariant::Stage,
    GreetingVariant::AliasEcho,
];

impl GreetingVariant {
    /// 環境変数やCLIで使用する名前
    pub fn as_str(&self) -> &'static str {
        match self {
            GreetingVariant::Release => "release",
            GreetingVariant::SecondRelease => "second-release",
            GreetingVariant::Stage => "stage",
            GreetingVariant::AliasEcho => "alias",
        }
    }

    /// レスポンスに`content-type`ヘッダーを付与するか
    pub fn includes_headers(&self) -> bool {
        matches!(
            self,
            GreetingVariant::Release | GreetingVariant::SecondRelease
        )
    }
}

impl fmt::Display for GreetingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GreetingVariant {
    type Err = VariantParseError;

    /// 名前からバリアントをパース（前後の空白と大文字小文字は無視）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ALL_VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| VariantParseError::UnknownVariant(s.to_string()))
    }
}
