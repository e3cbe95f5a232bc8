use crate::data::loader::PriceLoader;
use crate::data::{DataError, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

pub const DEFAULT_PRICE_COLUMN: &str = "close";
pub const DEFAULT_RETURN_COLUMN: &str = "daily_return";

/// Appends a simple one-period return column to a price table.
///
/// Row order is taken as time order. The first row has no predecessor, so its
/// return is null. A missing price carries the last known price forward;
/// returns stay null until the first known price.
#[derive(Debug, Clone)]
pub struct ReturnCalculator {
    price_column: String,
    return_column: String,
}

impl Default for ReturnCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_COLUMN, DEFAULT_RETURN_COLUMN)
    }
}

impl ReturnCalculator {
    pub fn new(price_column: impl Into<String>, return_column: impl Into<String>) -> Self {
        Self {
            price_column: price_column.into(),
            return_column: return_column.into(),
        }
    }

    pub fn price_column(&self) -> &str {
        &self.price_column
    }

    pub fn return_column(&self) -> &str {
        &self.return_column
    }

    pub fn compute(&self, df: &DataFrame) -> Result<DataFrame> {
        let prices = df
            .column(&self.price_column)
            .map_err(|_| DataError::MissingColumn(self.price_column.clone()))?
            .as_materialized_series()
            .strict_cast(&DataType::Float64)
            .map_err(|source| DataError::NonNumericColumn {
                column: self.price_column.clone(),
                source,
            })?
            .fill_null(FillNullStrategy::Forward(None))?;
        let prices = prices.f64()?.clone();

        // (p[i] - p[i-1]) / p[i-1] over forward-filled prices
        let previous = prices.shift(1);
        let change = &prices - &previous;
        let returns = &change / &previous;

        let name: PlSmallStr = self.return_column.as_str().into();
        let return_col: Column = returns.into_series().with_name(name).into();

        let mut return_df = df.clone();
        return_df.with_column(return_col)?;
        Ok(return_df)
    }
}

/// Loads the CSV at `path` and appends the return column in one pass.
pub fn calculate_daily_returns<P: AsRef<Path>>(
    path: P,
    calculator: &ReturnCalculator,
) -> Result<DataFrame> {
    let df = PriceLoader::load_prices(path, calculator.price_column())?;
    let df = calculator.compute(&df)?;
    info!(
        "Computed `{}` for {} rows",
        calculator.return_column(),
        df.height()
    );
    Ok(df)
}
