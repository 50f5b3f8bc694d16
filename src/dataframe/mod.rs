//! 列指向のDataFrame
//!
//! 評価指標に渡す表形式データ（説明変数や単一列の目的変数）を保持します。

use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::column::Float64Column;
use crate::error::{Error, Result};

/// Float64列のみを持つDataFrame
#[derive(Clone, Default)]
pub struct DataFrame {
    // 列データ
    columns: Vec<Float64Column>,
    // 列名→インデックスのマッピング
    column_indices: HashMap<String, usize>,
    // 列の順序
    column_names: Vec<String>,
    // 行数
    row_count: usize,
}

impl Debug for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 最大表示行数
        const MAX_ROWS: usize = 10;

        if self.columns.is_empty() {
            return write!(f, "DataFrame (0 rows x 0 columns)");
        }

        writeln!(
            f,
            "DataFrame ({} rows x {} columns):",
            self.row_count,
            self.columns.len()
        )?;

        write!(f, "{:<5} |", "idx")?;
        for name in &self.column_names {
            write!(f, " {:<15} |", name)?;
        }
        writeln!(f)?;

        write!(f, "{:-<5}-+", "")?;
        for _ in &self.column_names {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        let display_rows = std::cmp::min(self.row_count, MAX_ROWS);
        for i in 0..display_rows {
            write!(f, "{:<5} |", i)?;
            for col in &self.columns {
                write!(f, " {:<15} |", col.values()[i])?;
            }
            writeln!(f)?;
        }

        if self.row_count > MAX_ROWS {
            writeln!(f, "... ({} more rows)", self.row_count - MAX_ROWS)?;
        }

        Ok(())
    }
}

impl DataFrame {
    /// 空のDataFrameを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 列を追加する
    pub fn add_column(&mut self, name: impl Into<String>, column: impl Into<Float64Column>) -> Result<()> {
        let name = name.into();
        let mut column = column.into();

        if self.column_indices.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        // 最初の列が行数を決める
        if !self.columns.is_empty() && column.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column.len(),
            });
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        }

        column.set_name(name.clone());
        self.column_indices.insert(name.clone(), self.columns.len());
        self.column_names.push(name);
        self.columns.push(column);

        Ok(())
    }

    /// 列名で列を取得する
    pub fn column(&self, name: &str) -> Result<&Float64Column> {
        self.column_indices
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// 列名の一覧
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// 列数
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// 行ごとに全列を並べた一次元のベクトルを返す（NumPyのravelと同じ順序）
    pub fn ravel(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.row_count * self.columns.len());
        for row in 0..self.row_count {
            for col in &self.columns {
                values.push(col.values()[row]);
            }
        }
        values
    }

    /// 一行分の値を取得する
    pub fn row(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.row_count {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.row_count,
            });
        }
        Ok(self.columns.iter().map(|col| col.values()[index]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_columns() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column("a", vec![1.0, 2.0, 3.0]).unwrap();
        df.add_column("b", vec![10.0, 20.0, 30.0]).unwrap();
        df
    }

    #[test]
    fn test_add_column_and_lookup() {
        let df = two_columns();
        assert_eq!(df.column_count(), 2);
        assert_eq!(df.row_count(), 3);
        assert_eq!(df.column_names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(df.column("b").unwrap().values(), &[10.0, 20.0, 30.0]);
        assert_eq!(df.column("b").unwrap().get_name(), Some("b"));
        assert!(matches!(df.column("c"), Err(Error::ColumnNotFound(_))));
    }

    #[test]
    fn test_add_column_rejects_bad_shapes() {
        let mut df = two_columns();
        assert!(matches!(
            df.add_column("a", vec![0.0, 0.0, 0.0]),
            Err(Error::DuplicateColumnName(_))
        ));
        assert!(matches!(
            df.add_column("c", vec![0.0]),
            Err(Error::InconsistentRowCount { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_ravel_is_row_major() {
        let df = two_columns();
        assert_eq!(df.ravel(), vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0]);
        assert_eq!(df.row(1).unwrap(), vec![2.0, 20.0]);
        assert!(df.row(3).is_err());
    }

    #[test]
    fn test_debug_output() {
        let text = format!("{:?}", two_columns());
        assert!(text.starts_with("DataFrame (3 rows x 2 columns):"));
        assert_eq!(format!("{:?}", DataFrame::new()), "DataFrame (0 rows x 0 columns)");
    }
}
