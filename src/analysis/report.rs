use crate::data::{DataError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

const FMT_MAX_ROWS: &str = "POLARS_FMT_MAX_ROWS";
const FMT_MAX_COLS: &str = "POLARS_FMT_MAX_COLS";
const FMT_STR_LEN: &str = "POLARS_FMT_STR_LEN";
const MAX_STR_LEN: &str = "1000000";
const TABLE_WIDTH: &str = "POLARS_TABLE_WIDTH";
const MAX_TABLE_WIDTH: &str = "65535";

/// Lifts the polars display limits so every row, column and string cell is printed whole.
pub fn show_all_rows() {
    std::env::set_var(FMT_MAX_ROWS, "-1");
    std::env::set_var(FMT_MAX_COLS, "-1");
    std::env::set_var(FMT_STR_LEN, MAX_STR_LEN);
    std::env::set_var(TABLE_WIDTH, MAX_TABLE_WIDTH);
}

/// Renders the whole table, without the `...` elision polars applies by default.
pub fn render_table(df: &DataFrame) -> String {
    show_all_rows();
    format!("{}", df)
}

pub fn write_csv<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| DataError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
