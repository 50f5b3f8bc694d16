//! 分類モデル評価のためのメトリクス

use crate::error::{Error, Result};

/// 精度（Accuracy）を計算
///
/// 予測値と真の値が一致した割合を返します。
///
/// # Arguments
/// * `y_pred` - 予測ラベル
/// * `y_actual` - 真のラベル
///
/// # Returns
/// * `Result<f64>` - 精度（0〜1）
pub fn accuracy_score<T: PartialEq>(y_pred: &[T], y_actual: &[T]) -> Result<f64> {
    if y_pred.len() != y_actual.len() {
        return Err(Error::LengthMismatch {
            expected: y_pred.len(),
            actual: y_actual.len(),
        });
    }

    if y_pred.is_empty() {
        return Err(Error::EmptyData(
            "空のデータで精度を計算することはできません".to_string(),
        ));
    }

    let correct_count = y_pred
        .iter()
        .zip(y_actual.iter())
        .filter(|(p, a)| p == a)
        .count();

    Ok(correct_count as f64 / y_pred.len() as f64)
}
