//! CLI integration tests with real INI and CSV files on disk.
//!
//! Tests cover:
//! - Company directory loading and validation errors
//! - Multi-company analysis through the CSV provider
//! - Report output to a file in text and JSON form
//! - Exit codes for unknown companies and missing data

mod common;

use clap::Parser;
use common::*;
use equiscore::adapters::csv_adapter::CsvAdapter;
use equiscore::cli::{self, Cli};
use equiscore::domain::error::EquiscoreError;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tempfile::TempDir;

const COMPANIES_INI: &str = r#"
; analysed companies
[Airbus]
ticker = AIR.PA
color = #00A8E8
description = Aerospace - Aviation
analyst = XU

[Sopra Steria]
ticker = SOP.PA
color = #6A4C93
description = IT services - Consulting
analyst = Yann
"#;

fn same_code(actual: ExitCode, expected: ExitCode) -> bool {
    format!("{:?}", actual) == format!("{:?}", expected)
}

fn write_prices(dir: &Path, ticker: &str, closes: &[f64]) {
    let mut csv = String::from("date,open,high,low,close,volume\n");
    for point in make_points(closes) {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            point.date, point.open, point.high, point.low, point.close, point.volume
        ));
    }
    fs::write(dir.join(format!("{}.csv", ticker)), csv).unwrap();
}

fn write_fundamentals(dir: &Path, ticker: &str, rows: &[(&str, &str)]) {
    let mut csv = String::from("field,value\n");
    for (field, value) in rows {
        csv.push_str(&format!("{},{}\n", field, value));
    }
    fs::write(dir.join(format!("{}_fundamentals.csv", ticker)), csv).unwrap();
}

/// Config plus data for both companies; Sopra Steria has no fundamentals file.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("companies.ini"), COMPANIES_INI).unwrap();

    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    write_prices(&data, "AIR.PA", &rising(100.0, 60));
    write_fundamentals(
        &data,
        "AIR.PA",
        &[
            ("trailing_pe", "12"),
            ("dividend_yield", "45"),
            ("return_on_equity", "0.25"),
            ("revenue_growth", "0.2"),
            ("debt_to_equity", "0.4"),
        ],
    );
    write_prices(&data, "SOP.PA", &rising(80.0, 30));
    dir
}

fn run(args: &[&str]) -> ExitCode {
    let mut argv = vec!["equiscore"];
    argv.extend_from_slice(args);
    cli::run(Cli::try_parse_from(argv).unwrap())
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

mod directory_loading {
    use super::*;

    #[test]
    fn loads_companies_from_ini() {
        let dir = workspace();
        let directory = cli::load_directory(&dir.path().join("companies.ini")).unwrap();

        assert_eq!(
            directory.names().collect::<Vec<_>>(),
            vec!["Airbus", "Sopra Steria"]
        );
        assert_eq!(directory.get("Sopra Steria").unwrap().color, "#6A4C93");
    }

    #[test]
    fn missing_config_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let err = cli::load_directory(&dir.path().join("absent.ini")).unwrap_err();
        assert!(matches!(err, EquiscoreError::ConfigParse { .. }));
    }

    #[test]
    fn invalid_color_is_reported_with_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.ini");
        fs::write(
            &path,
            "[Airbus]\nticker = AIR.PA\ncolor = blue\ndescription = Aero\nanalyst = XU\n",
        )
        .unwrap();

        let err = cli::load_directory(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config value [Airbus] color: 'blue' is not a #RRGGBB color"
        );
    }
}

mod analysis {
    use super::*;

    #[test]
    fn analyses_every_configured_company() {
        let dir = workspace();
        let directory = cli::load_directory(&dir.path().join("companies.ini")).unwrap();
        let provider = CsvAdapter::new(dir.path().join("data"));

        let (results, failures) = cli::analyze_selection(&directory, &provider, None).unwrap();

        assert!(failures.is_empty());
        assert_eq!(results.len(), 2);

        let airbus = &results[0];
        assert_eq!(airbus.company.name, "Airbus");
        assert_eq!(airbus.current_price, 159.0);
        assert_eq!(airbus.fundamental.total_score, 5.0);
        assert_eq!(airbus.diagnostics.len(), 1);

        let sopra = &results[1];
        assert!(sopra.technical.is_degenerate());
        assert!(!sopra.fundamental.is_degenerate());
        assert_eq!(sopra.current_price, 0.0);
    }

    #[test]
    fn missing_price_file_fails_only_that_company() {
        let dir = workspace();
        fs::remove_file(dir.path().join("data").join("SOP.PA.csv")).unwrap();
        let directory = cli::load_directory(&dir.path().join("companies.ini")).unwrap();
        let provider = CsvAdapter::new(dir.path().join("data"));

        let (results, failures) = cli::analyze_selection(&directory, &provider, None).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(failures.len(), 1);
        assert!(
            matches!(failures[0], EquiscoreError::DataUnavailable { ref ticker, .. } if ticker == "SOP.PA")
        );
    }

    #[test]
    fn unknown_company_selection_is_an_error() {
        let dir = workspace();
        let directory = cli::load_directory(&dir.path().join("companies.ini")).unwrap();
        let provider = CsvAdapter::new(dir.path().join("data"));

        let err = cli::analyze_selection(&directory, &provider, Some("Boeing")).unwrap_err();
        assert!(matches!(err, EquiscoreError::UnknownCompany { .. }));
    }
}

mod commands {
    use super::*;

    #[test]
    fn analyze_writes_text_report() {
        let dir = workspace();
        let output = dir.path().join("reports").join("airbus.txt");

        let code = run(&[
            "analyze",
            "--config",
            &path_str(&dir.path().join("companies.ini")),
            "--data",
            &path_str(&dir.path().join("data")),
            "--company",
            "Airbus",
            "--output",
            &path_str(&output),
        ]);

        assert!(same_code(code, ExitCode::SUCCESS));
        let report = fs::read_to_string(&output).unwrap();
        assert!(report.starts_with("Airbus (AIR.PA)"));
        assert!(report.contains("Recommendation: Buy"));
        assert!(report.contains("anomalous dividend_yield value 45 clamped to 10"));
    }

    #[test]
    fn analyze_writes_json_array_for_all_companies() {
        let dir = workspace();
        let output = dir.path().join("all.json");

        let code = run(&[
            "analyze",
            "-c",
            &path_str(&dir.path().join("companies.ini")),
            "-d",
            &path_str(&dir.path().join("data")),
            "-f",
            "json",
            "-o",
            &path_str(&output),
        ]);

        assert!(same_code(code, ExitCode::SUCCESS));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let results = json.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["ticker"], "AIR.PA");
        assert_eq!(results[0]["metrics"]["dividend_yield"], 10.0);
        assert_eq!(results[1]["technical"]["total_score"], 0.0);
    }

    #[test]
    fn analyze_unknown_company_exits_with_code_3() {
        let dir = workspace();
        let code = run(&[
            "analyze",
            "-c",
            &path_str(&dir.path().join("companies.ini")),
            "-d",
            &path_str(&dir.path().join("data")),
            "--company",
            "Boeing",
        ]);
        assert!(same_code(code, ExitCode::from(3)));
    }

    #[test]
    fn list_succeeds_for_valid_config() {
        let dir = workspace();
        let code = run(&["list", "-c", &path_str(&dir.path().join("companies.ini"))]);
        assert!(same_code(code, ExitCode::SUCCESS));
    }

    #[test]
    fn validate_flags_missing_price_files() {
        let dir = workspace();
        let config = path_str(&dir.path().join("companies.ini"));
        let data = path_str(&dir.path().join("data"));

        assert!(same_code(
            run(&["validate", "-c", &config, "-d", &data]),
            ExitCode::SUCCESS
        ));

        fs::remove_file(dir.path().join("data").join("AIR.PA.csv")).unwrap();
        assert!(same_code(
            run(&["validate", "-c", &config, "-d", &data]),
            ExitCode::from(5)
        ));
    }

    #[test]
    fn validate_rejects_bad_config_with_code_2() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.ini");
        fs::write(&path, "[Airbus]\nticker = AIR.PA\n").unwrap();

        assert!(same_code(
            run(&["validate", "-c", &path_str(&path)]),
            ExitCode::from(2)
        ));
    }
}
