//! 評価対象となるモデルのインターフェース

use crate::column::Float64Column;
use crate::dataframe::DataFrame;
use crate::error::Result;

/// 説明変数の表から予測値を返すモデル
pub trait Predictor {
    /// 新しいデータに対して予測を行う（1行につき1つの予測値）
    fn predict(&self, features: &DataFrame) -> Result<Float64Column>;
}

impl<F> Predictor for F
where
    F: Fn(&DataFrame) -> Result<Float64Column>,
{
    fn predict(&self, features: &DataFrame) -> Result<Float64Column> {
        self(features)
    }
}
