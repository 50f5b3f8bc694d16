//! 評価指標に渡す「真の値」の正規化
//!
//! 一次元の数値列、または単一列の表をフラットな`Vec<f64>`に揃えます。

use num_traits::ToPrimitive;

use crate::column::Float64Column;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// フラットな数値列に変換できる真の値
pub trait KnownValues {
    /// 添字順に並んだ`f64`の列に変換する
    fn to_values(&self) -> Result<Vec<f64>>;
}

impl<T: ToPrimitive> KnownValues for [T] {
    fn to_values(&self) -> Result<Vec<f64>> {
        self.iter()
            .enumerate()
            .map(|(i, v)| {
                v.to_f64()
                    .ok_or_else(|| Error::Cast(format!("インデックス {} の値をf64に変換できません", i)))
            })
            .collect()
    }
}

impl<T: ToPrimitive> KnownValues for Vec<T> {
    fn to_values(&self) -> Result<Vec<f64>> {
        self.as_slice().to_values()
    }
}

impl<T: ToPrimitive, const N: usize> KnownValues for [T; N] {
    fn to_values(&self) -> Result<Vec<f64>> {
        self.as_slice().to_values()
    }
}

impl KnownValues for Float64Column {
    fn to_values(&self) -> Result<Vec<f64>> {
        Ok(self.values().to_vec())
    }
}

impl KnownValues for DataFrame {
    fn to_values(&self) -> Result<Vec<f64>> {
        if self.column_count() != 1 {
            return Err(Error::DimensionMismatch(format!(
                "真の値には単一列の表が必要です: 列数 {}",
                self.column_count()
            )));
        }
        log::trace!("flattening single-column table of {} rows", self.row_count());
        Ok(self.ravel())
    }
}

impl<K: KnownValues + ?Sized> KnownValues for &K {
    fn to_values(&self) -> Result<Vec<f64>> {
        (**self).to_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_slices_are_widened() {
        assert_eq!([1i64, 2, 3].to_values().unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(vec![1u8, 0].to_values().unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_single_column_table_matches_sequence() {
        let mut df = DataFrame::new();
        df.add_column("y", vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(df.to_values().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_multi_column_table_is_rejected() {
        let mut df = DataFrame::new();
        df.add_column("a", vec![1.0]).unwrap();
        df.add_column("b", vec![2.0]).unwrap();
        assert!(matches!(df.to_values(), Err(Error::DimensionMismatch(_))));
        assert!(matches!(DataFrame::new().to_values(), Err(Error::DimensionMismatch(_))));
    }
}
