use csv::{ReaderBuilder, Writer};
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::DataFrame;

/// CSVファイルからDataFrameを読み込む
///
/// すべてのセルは`f64`として解釈されます。数値にできないセルは`Error::Cast`になります。
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;

    // CSVリーダーを設定
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }

    // ヘッダーがない場合は"column_0", "column_1"などとする
    let headers: Vec<String> = if has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        match records.first() {
            Some(first) => (0..first.len()).map(|i| format!("column_{}", i)).collect(),
            None => return Ok(DataFrame::new()),
        }
    };

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(records.len()); headers.len()];
    for (row, record) in records.iter().enumerate() {
        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| {
                Error::Cast(format!(
                    "数値に変換できません: 行 {}, 列 '{}', 値 '{}'",
                    row, headers[col], field
                ))
            })?;
            columns[col].push(value);
        }
    }

    let mut df = DataFrame::new();
    for (header, values) in headers.into_iter().zip(columns) {
        df.add_column(header, values)?;
    }

    log::debug!(
        "read_csv: {} rows x {} columns from {}",
        df.row_count(),
        df.column_count(),
        path.as_ref().display()
    );

    Ok(df)
}

/// DataFrameをCSVファイルに書き込む
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut wtr = Writer::from_writer(file);

    // ヘッダー行を書き込む
    wtr.write_record(df.column_names())?;

    for i in 0..df.row_count() {
        let row: Vec<String> = df.row(i)?.iter().map(|v| v.to_string()).collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_csv_with_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "y").unwrap();
        writeln!(file, "1.5").unwrap();
        writeln!(file, " 2.5 ").unwrap();
        file.flush().unwrap();

        let df = read_csv(file.path(), true).unwrap();
        assert_eq!(df.column_names(), &["y".to_string()]);
        assert_eq!(df.column("y").unwrap().values(), &[1.5, 2.5]);
    }

    #[test]
    fn test_read_csv_without_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,2").unwrap();
        writeln!(file, "3,4").unwrap();
        file.flush().unwrap();

        let df = read_csv(file.path(), false).unwrap();
        assert_eq!(df.column_names(), &["column_0".to_string(), "column_1".to_string()]);
        assert_eq!(df.ravel(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_read_csv_rejects_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "y").unwrap();
        writeln!(file, "abc").unwrap();
        file.flush().unwrap();

        assert!(matches!(read_csv(file.path(), true), Err(Error::Cast(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_csv("/nonexistent/mlscore/known.csv", true),
            Err(Error::Io(_))
        ));
    }
}
