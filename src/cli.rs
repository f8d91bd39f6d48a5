//! CLI definition and dispatch.

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report::JsonReportAdapter;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::analysis::analyze_profile;
use crate::domain::company::{CompanyDirectory, CompanyProfile};
use crate::domain::error::EquiscoreError;
use crate::domain::report::AnalysisResult;
use crate::ports::provider_port::ProviderPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "equiscore",
    about = "Composite fundamental and technical equity scoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyse one configured company, or all of them
    Analyze {
        /// Company configuration (INI, one section per company)
        #[arg(short, long)]
        config: PathBuf,
        /// Directory holding <TICKER>.csv and <TICKER>_fundamentals.csv
        #[arg(short, long)]
        data: PathBuf,
        /// Company display name; every configured company when omitted
        #[arg(long)]
        company: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List configured companies
    List {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a company configuration, and optionally the data directory
    Validate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn reporter(self) -> Box<dyn ReportPort> {
        match self {
            OutputFormat::Text => Box::new(TextReportAdapter::new()),
            OutputFormat::Json => Box::new(JsonReportAdapter::default()),
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            data,
            company,
            format,
            output,
        } => run_analyze(&config, &data, company.as_deref(), format, output.as_ref()),
        Command::List { config } => run_list(&config),
        Command::Validate { config, data } => run_validate(&config, data.as_ref()),
    }
}

fn fail(err: EquiscoreError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

pub fn load_directory(path: &Path) -> Result<CompanyDirectory, EquiscoreError> {
    let adapter = FileConfigAdapter::from_file(path)?;
    CompanyDirectory::from_config(&adapter)
}

/// Analyse the selected companies. A company that fails does not stop the
/// others; its error is returned alongside the results that succeeded.
pub fn analyze_selection(
    directory: &CompanyDirectory,
    provider: &dyn ProviderPort,
    company: Option<&str>,
) -> Result<(Vec<AnalysisResult>, Vec<EquiscoreError>), EquiscoreError> {
    let profiles: Vec<&CompanyProfile> = match company {
        Some(name) => vec![directory.get(name)?],
        None => directory.iter().collect(),
    };

    let generated_at = Local::now().naive_local();
    let mut results = Vec::new();
    let mut failures = Vec::new();
    for profile in profiles {
        match analyze_profile(profile, provider, generated_at) {
            Ok(result) => results.push(result),
            Err(e) => {
                error!(company = %profile.name, error = %e, "analysis failed");
                failures.push(e);
            }
        }
    }
    Ok((results, failures))
}

fn write_output(output: Option<&PathBuf>, rendered: &str) -> Result<(), EquiscoreError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
            Ok(())
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

fn run_analyze(
    config_path: &Path,
    data_dir: &Path,
    company: Option<&str>,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> ExitCode {
    let directory = match load_directory(config_path) {
        Ok(d) => d,
        Err(e) => return fail(e),
    };
    let provider = CsvAdapter::new(data_dir.to_path_buf());

    let (results, failures) = match analyze_selection(&directory, &provider, company) {
        Ok(outcome) => outcome,
        Err(e) => return fail(e),
    };

    if !results.is_empty() {
        let reporter = format.reporter();
        let rendered = match (company, results.as_slice()) {
            (Some(_), [only]) => reporter.render(only),
            _ => reporter.render_all(&results),
        };
        if let Err(e) = rendered.and_then(|text| write_output(output, &text)) {
            return fail(e);
        }
    }

    for e in &failures {
        eprintln!("error: {e}");
    }
    match failures.first() {
        Some(first) => first.into(),
        None => ExitCode::SUCCESS,
    }
}

fn run_list(config_path: &Path) -> ExitCode {
    let directory = match load_directory(config_path) {
        Ok(d) => d,
        Err(e) => return fail(e),
    };

    for profile in directory.iter() {
        println!(
            "{:<24} {:<10} {:<8} {:<12} {}",
            profile.name, profile.ticker, profile.color, profile.analyst, profile.description
        );
    }
    eprintln!("{} companies configured", directory.len());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path, data_dir: Option<&PathBuf>) -> ExitCode {
    eprintln!("Validating companies: {}", config_path.display());
    let directory = match load_directory(config_path) {
        Ok(d) => d,
        Err(e) => return fail(e),
    };
    eprintln!("  {} companies, all profiles valid", directory.len());

    if let Some(data_dir) = data_dir {
        let adapter = CsvAdapter::new(data_dir.clone());
        let available = match adapter.list_tickers() {
            Ok(t) => t,
            Err(e) => return fail(e),
        };

        let missing: Vec<&CompanyProfile> = directory
            .iter()
            .filter(|p| !available.contains(&p.ticker))
            .collect();
        for profile in &missing {
            eprintln!(
                "  missing price file for {} ({}.csv)",
                profile.name, profile.ticker
            );
        }
        if let Some(first) = missing.first() {
            return fail(EquiscoreError::DataUnavailable {
                ticker: first.ticker.clone(),
                reason: format!("no price file in {}", data_dir.display()),
            });
        }
        eprintln!("  price files present for every company");
    }

    eprintln!("\nCompany configuration is valid.");
    ExitCode::SUCCESS
}
