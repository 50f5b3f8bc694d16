//! 学習データとテストデータのスコアを1行にまとめて出力する

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::config::{ReportConfig, ReportFormat};
use super::regression::{mse, rsq};
use super::values::KnownValues;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::ml::models::Predictor;

/// 学習・テストそれぞれのMSEとR^2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub train_mse: f64,
    pub test_mse: f64,
    pub train_r2: f64,
    pub test_r2: f64,
}

impl ScoreReport {
    /// 予測値と真の値からスコアを計算する
    pub fn from_predictions<A, B>(
        train_pred: &[f64],
        train_known: &A,
        test_pred: &[f64],
        test_known: &B,
    ) -> Result<Self>
    where
        A: KnownValues + ?Sized,
        B: KnownValues + ?Sized,
    {
        Ok(Self {
            train_mse: mse(train_pred, train_known)?,
            test_mse: mse(test_pred, test_known)?,
            train_r2: rsq(train_pred, train_known)?,
            test_r2: rsq(test_pred, test_known)?,
        })
    }

    /// 出力順（train_mse, test_mse, train_r2, test_r2）の配列
    pub fn values(&self) -> [f64; 4] {
        [self.train_mse, self.test_mse, self.train_r2, self.test_r2]
    }

    /// 設定に従って1行の文字列にする（改行なし）
    pub fn render(&self, config: &ReportConfig) -> Result<String> {
        match config.format {
            ReportFormat::Plain => Ok(self
                .values()
                .iter()
                .map(|&v| config.format_value(v))
                .collect::<Vec<_>>()
                .join(&config.separator)),
            ReportFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [train_mse, test_mse, train_r2, test_r2] = self.values();
        write!(f, "{:?}, {:?}, {:?}, {:?}", train_mse, test_mse, train_r2, test_r2)
    }
}

/// スコアを1行として書き込む
pub fn write_scores<W: Write>(writer: &mut W, report: &ScoreReport, config: &ReportConfig) -> Result<()> {
    let line = report.render(config)?;
    writeln!(writer, "{}", line)?;
    Ok(())
}

/// 計算済みの予測値からスコアを計算し、標準出力に1行で表示する
pub fn print_prediction_scores<A, B>(
    train_pred: &[f64],
    test_pred: &[f64],
    y_train: &A,
    y_test: &B,
) -> Result<ScoreReport>
where
    A: KnownValues + ?Sized,
    B: KnownValues + ?Sized,
{
    let report = ScoreReport::from_predictions(train_pred, y_train, test_pred, y_test)?;
    let stdout = std::io::stdout();
    write_scores(&mut stdout.lock(), &report, &ReportConfig::default())?;
    Ok(report)
}

/// モデルで学習・テストデータを予測し、`train_mse, test_mse, train_r2, test_r2`を標準出力に表示する
///
/// # Arguments
/// * `model` - 予測に使うモデル
/// * `x_train` / `x_test` - 説明変数
/// * `y_train` / `y_test` - 目的変数（一次元の列または単一列の表）
pub fn print_scores<M, A, B>(
    model: &M,
    x_train: &DataFrame,
    x_test: &DataFrame,
    y_train: &A,
    y_test: &B,
) -> Result<ScoreReport>
where
    M: Predictor + ?Sized,
    A: KnownValues + ?Sized,
    B: KnownValues + ?Sized,
{
    let train_pred = model.predict(x_train)?;
    let test_pred = model.predict(x_test)?;
    log::debug!(
        "print_scores: {} train / {} test predictions",
        train_pred.len(),
        test_pred.len()
    );
    print_prediction_scores(train_pred.values(), test_pred.values(), y_train, y_test)
}
