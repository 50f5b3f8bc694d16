//! 機械学習の評価指標モジュール
//!
//! 回帰や分類モデルの評価に使用する指標を提供します。
//! 真の値は一次元の数値列か、単一列のDataFrameで渡せます。

pub mod classification;
pub mod config;
pub mod errstate;
pub mod regression;
pub mod report;
pub mod values;

pub use classification::accuracy_score;
pub use config::{ReportConfig, ReportFormat};
pub use errstate::{errstate, FloatErrorPolicy};
pub use regression::{mean_absolute_error, mse, rmse, rsq};
pub use report::{print_prediction_scores, print_scores, write_scores, ScoreReport};
pub use values::KnownValues;
