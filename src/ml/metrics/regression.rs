//! 回帰モデル評価のためのメトリクス
//!
//! どの指標も負の値を返しません。浮動小数点の誤差やNaN、ベースライン（平均値予測）より
//! 悪いモデルの場合は`0.0`として報告します。

use super::errstate::{self, errstate, FloatErrorPolicy};
use super::values::KnownValues;
use crate::error::{Error, Result};

/// 真の値を正規化し、予測値と長さが一致することを確認する
fn aligned_known<K: KnownValues + ?Sized>(predicted: &[f64], known: &K) -> Result<Vec<f64>> {
    let known = known.to_values()?;
    if known.len() != predicted.len() {
        return Err(Error::LengthMismatch {
            expected: predicted.len(),
            actual: known.len(),
        });
    }
    Ok(known)
}

/// `max(value, 0.0)`。NaNも0.0になる
fn floor_at_zero(value: f64, metric: &str) -> f64 {
    let floored = value.max(0.0);
    if floored != value {
        log::debug!("{}: raw value {} reported as 0.0", metric, value);
    }
    floored
}

/// 長さが揃った予測値と真の値の平均二乗誤差（0.0で下限を切る）
fn mse_values(predicted: &[f64], known: &[f64]) -> f64 {
    let raw = errstate(FloatErrorPolicy::Ignore, || {
        let squared: Vec<f64> = predicted
            .iter()
            .zip(known.iter())
            .map(|(&p, &k)| {
                let error = p - k;
                error * error
            })
            .collect();
        errstate::mean(&squared)
    });

    floor_at_zero(raw, "mse")
}

/// 平均二乗誤差（Mean Squared Error）を計算
///
/// `known`が単一列のDataFrameの場合は一次元に展開してから計算します。
///
/// # Arguments
/// * `predicted` - 予測値
/// * `known` - 真の値
///
/// # Returns
/// * `Result<f64>` - 平均二乗誤差（0以上）。空の入力は`0.0`
pub fn mse<K: KnownValues + ?Sized>(predicted: &[f64], known: &K) -> Result<f64> {
    let known = aligned_known(predicted, known)?;
    Ok(mse_values(predicted, &known))
}

/// 平均二乗誤差の平方根（Root Mean Squared Error）を計算
///
/// # Returns
/// * `Result<f64>` - `mse(predicted, known)`の平方根
pub fn rmse<K: KnownValues + ?Sized>(predicted: &[f64], known: &K) -> Result<f64> {
    Ok(mse(predicted, known)?.sqrt())
}

/// 決定係数（R^2）を計算
///
/// `1 - mse / variance(known)`。分散は母分散です。
/// 真の値がすべて同じ（分散0）の場合はNaNまたは-infになり、`0.0`を返します。
///
/// # Returns
/// * `Result<f64>` - 決定係数（0〜1）
pub fn rsq<K: KnownValues + ?Sized>(predicted: &[f64], known: &K) -> Result<f64> {
    let known = aligned_known(predicted, known)?;
    let error = mse_values(predicted, &known);

    let raw = errstate(FloatErrorPolicy::Ignore, || {
        1.0 - error / errstate::variance(&known)
    });

    Ok(floor_at_zero(raw, "rsq"))
}

/// 平均絶対誤差（Mean Absolute Error）を計算
///
/// # Returns
/// * `Result<f64>` - 平均絶対誤差（0以上）
pub fn mean_absolute_error<K: KnownValues + ?Sized>(predicted: &[f64], known: &K) -> Result<f64> {
    let known = aligned_known(predicted, known)?;

    let raw = errstate(FloatErrorPolicy::Ignore, || {
        let absolute: Vec<f64> = predicted
            .iter()
            .zip(known.iter())
            .map(|(&p, &k)| (p - k).abs())
            .collect();
        errstate::mean(&absolute)
    });

    Ok(floor_at_zero(raw, "mean_absolute_error"))
}
