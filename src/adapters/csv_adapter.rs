//! CSV file market data adapter.
//!
//! Prices live in `<TICKER>.csv` (`date,open,high,low,close,volume`), fundamentals
//! in `<TICKER>_fundamentals.csv` (`field,value`). A missing fundamentals file
//! yields an empty snapshot.

use crate::domain::error::EquiscoreError;
use crate::domain::price::{PricePoint, PriceSeries};
use crate::domain::snapshot::FinancialSnapshot;
use crate::ports::provider_port::{MarketData, ProviderPort};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

const FUNDAMENTALS_SUFFIX: &str = "_fundamentals.csv";

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn prices_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker))
    }

    fn fundamentals_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}{}", ticker, FUNDAMENTALS_SUFFIX))
    }

    pub fn read_prices(&self, ticker: &str) -> Result<PriceSeries, EquiscoreError> {
        let unavailable = |reason: String| EquiscoreError::DataUnavailable {
            ticker: ticker.to_string(),
            reason,
        };

        let path = self.prices_path(ticker);
        let mut rdr = csv::Reader::from_path(&path)
            .map_err(|e| unavailable(format!("failed to read {}: {}", path.display(), e)))?;
        let mut points = Vec::new();

        for (line, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| unavailable(format!("CSV parse error: {}", e)))?;
            let column = |idx: usize, name: &str| {
                record
                    .get(idx)
                    .map(str::trim)
                    .ok_or_else(|| unavailable(format!("row {}: missing {} column", line + 1, name)))
            };
            let number = |idx: usize, name: &str| -> Result<f64, EquiscoreError> {
                column(idx, name)?.parse().map_err(|e| {
                    unavailable(format!("row {}: invalid {} value: {}", line + 1, name, e))
                })
            };

            let date = NaiveDate::parse_from_str(column(0, "date")?, "%Y-%m-%d").map_err(|e| {
                unavailable(format!("row {}: invalid date format: {}", line + 1, e))
            })?;
            let volume: i64 = column(5, "volume")?.parse().map_err(|e| {
                unavailable(format!("row {}: invalid volume value: {}", line + 1, e))
            })?;

            points.push(PricePoint {
                date,
                open: number(1, "open")?,
                high: number(2, "high")?,
                low: number(3, "low")?,
                close: number(4, "close")?,
                volume,
            });
        }

        points.sort_by_key(|p| p.date);
        debug!(ticker, points = points.len(), "loaded price history");
        PriceSeries::new(points).map_err(|e| unavailable(e.to_string()))
    }

    pub fn read_snapshot(&self, ticker: &str) -> Result<FinancialSnapshot, EquiscoreError> {
        let path = self.fundamentals_path(ticker);
        if !path.exists() {
            warn!(ticker, "no fundamentals file, using an empty snapshot");
            return Ok(FinancialSnapshot::default());
        }

        let unavailable = |reason: String| EquiscoreError::DataUnavailable {
            ticker: ticker.to_string(),
            reason,
        };

        let mut rdr = csv::Reader::from_path(&path)
            .map_err(|e| unavailable(format!("failed to read {}: {}", path.display(), e)))?;
        let mut snapshot = FinancialSnapshot::default();

        for result in rdr.records() {
            let record = result.map_err(|e| unavailable(format!("CSV parse error: {}", e)))?;
            let field = record.get(0).map(str::trim).unwrap_or_default();
            let raw = record.get(1).map(str::trim).unwrap_or_default();
            if raw.is_empty() {
                continue;
            }

            let value: f64 = raw
                .parse()
                .map_err(|e| unavailable(format!("invalid value for {}: {}", field, e)))?;
            if !snapshot.set_field(field, value) {
                warn!(ticker, field, "ignoring unknown fundamentals field");
            }
        }

        Ok(snapshot)
    }

    /// Tickers with a price file in the base directory, sorted.
    pub fn list_tickers(&self) -> Result<Vec<String>, EquiscoreError> {
        let mut tickers = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let name = entry?.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(FUNDAMENTALS_SUFFIX) {
                continue;
            }
            if let Some(ticker) = name.strip_suffix(".csv") {
                tickers.push(ticker.to_string());
            }
        }
        tickers.sort();
        Ok(tickers)
    }
}

impl ProviderPort for CsvAdapter {
    fn fetch(&self, ticker: &str) -> Result<MarketData, EquiscoreError> {
        Ok(MarketData {
            series: self.read_prices(ticker)?,
            snapshot: self.read_snapshot(ticker)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let prices = "date,open,high,low,close,volume\n\
            2024-01-17,110.0,120.0,105.0,115.0,55000\n\
            2024-01-15,100.0,110.0,90.0,105.0,50000\n\
            2024-01-16,105.0,115.0,100.0,110.0,60000\n";
        fs::write(path.join("AIR.PA.csv"), prices).unwrap();

        let fundamentals = "field,value\n\
            trailing_pe,18.5\n\
            forward_pe,\n\
            dividend_yield,1.4\n\
            return_on_equity,0.21\n\
            market_cap,120000000000\n";
        fs::write(path.join("AIR.PA_fundamentals.csv"), fundamentals).unwrap();

        fs::write(
            path.join("SOP.PA.csv"),
            "date,open,high,low,close,volume\n",
        )
        .unwrap();

        (dir, path)
    }

    #[test]
    fn fetch_returns_sorted_prices_and_snapshot() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let data = adapter.fetch("AIR.PA").unwrap();
        let points = data.series.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(points[0].open, 100.0);
        assert_eq!(points[0].close, 105.0);
        assert_eq!(points[0].volume, 50000);
        assert_eq!(data.series.points().last().map(|p| p.close), Some(115.0));

        assert_eq!(data.snapshot.trailing_pe, Some(18.5));
        assert_eq!(data.snapshot.forward_pe, None);
        assert_eq!(data.snapshot.dividend_yield, Some(1.4));
        assert_eq!(data.snapshot.return_on_equity, Some(0.21));
    }

    #[test]
    fn missing_fundamentals_file_gives_empty_snapshot() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let data = adapter.fetch("SOP.PA").unwrap();
        assert!(data.series.is_empty());
        assert_eq!(data.snapshot, FinancialSnapshot::default());
    }

    #[test]
    fn missing_price_file_is_unavailable() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let err = adapter.fetch("XYZ").unwrap_err();
        assert!(matches!(err, EquiscoreError::DataUnavailable { ref ticker, .. } if ticker == "XYZ"));
    }

    #[test]
    fn bad_close_value_is_reported() {
        let (_dir, path) = setup_test_data();
        fs::write(
            path.join("BAD.csv"),
            "date,open,high,low,close,volume\n2024-01-15,1,1,1,abc,10\n",
        )
        .unwrap();
        let adapter = CsvAdapter::new(path);

        let err = adapter.read_prices("BAD").unwrap_err();
        assert!(err.to_string().contains("invalid close value"));
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let (_dir, path) = setup_test_data();
        fs::write(
            path.join("DUP.csv"),
            "date,open,high,low,close,volume\n\
             2024-01-15,1,1,1,1,10\n\
             2024-01-15,1,1,1,1,10\n",
        )
        .unwrap();
        let adapter = CsvAdapter::new(path);

        assert!(matches!(
            adapter.read_prices("DUP"),
            Err(EquiscoreError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn list_tickers_skips_fundamentals() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        assert_eq!(adapter.list_tickers().unwrap(), vec!["AIR.PA", "SOP.PA"]);
    }
}
