//! スコア出力の設定

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `train_mse, test_mse, train_r2, test_r2`
    #[default]
    Plain,
    /// 1行のJSONオブジェクト
    Json,
}

/// スコア出力の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Plain形式での区切り文字
    pub separator: String,
    /// 小数点以下の桁数（Noneなら`0.0`のような最短表現）
    pub precision: Option<usize>,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            precision: None,
            format: ReportFormat::Plain,
        }
    }
}

impl ReportConfig {
    /// TOML文字列から設定を読み込む（省略された項目はデフォルト値）
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// 小数点以下の桁数を指定する
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// 出力形式を指定する
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub(crate) fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => format!("{:?}", value),
        }
    }
}
