use super::{DataError, Result};
use polars::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

pub struct PriceLoader;

impl PriceLoader {
    /// Column names are matched exactly.
    pub fn verify_required_columns(headers: &[String], required: &[&str]) -> Result<()> {
        let headers_set: HashSet<&str> = headers.iter().map(String::as_str).collect();

        for column in required {
            if !headers_set.contains(column) {
                return Err(DataError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }

    /// Reads a headed CSV in file order and checks that `price_column` is present.
    pub fn load_prices<P: AsRef<Path>>(path: P, price_column: &str) -> Result<DataFrame> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::DataAccess {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loading price data from {}", path.display());
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(file)
            .finish()?;

        let headers: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        debug!("Columns: {}", headers.join(", "));
        Self::verify_required_columns(&headers, &[price_column])?;

        info!("Loaded {} rows", df.height());
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_data_access_error() {
        let dir = tempdir().unwrap();
        let err = PriceLoader::load_prices(dir.path().join("nope.csv"), "close").unwrap_err();
        assert!(matches!(err, DataError::DataAccess { .. }));
    }

    #[test]
    fn test_missing_close_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "date,open,high,low").unwrap();
        writeln!(file, "2024-01-01,1.0,2.0,0.5").unwrap();
        drop(file);

        let err = PriceLoader::load_prices(&path, "close").unwrap_err();
        match err {
            DataError::MissingColumn(column) => assert_eq!(column, "close"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_late_decimal_price_keeps_column_numeric() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "date,close").unwrap();
        for i in 0..150 {
            writeln!(file, "d{i},{}", 100 + i).unwrap();
        }
        writeln!(file, "last,250.5").unwrap();
        drop(file);

        let df = PriceLoader::load_prices(&path, "close").unwrap();
        assert_eq!(df.height(), 151);
        assert_eq!(df.column("close").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_column_match_is_exact() {
        let headers = vec!["Close".to_string()];
        assert!(PriceLoader::verify_required_columns(&headers, &["close"]).is_err());
        assert!(PriceLoader::verify_required_columns(&headers, &["Close"]).is_ok());
    }
}
