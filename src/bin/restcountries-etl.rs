use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use restcountries_etl::Client;
use restcountries_etl::api::DEFAULT_URL;
use restcountries_etl::pipeline::{self, OutputFormat, Settings};
use restcountries_etl::storage::{DEFAULT_DATA_DIR, DEFAULT_FILENAME};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "restcountries-etl",
    version,
    about = "Extract country metadata from REST Countries, flatten it, and load it into CSV"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run extract, transform, and load once.
    Run(RunArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Endpoint returning a JSON array of country objects.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
    /// Directory that receives the output file (created if missing).
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    out_dir: PathBuf,
    /// Output file name inside --out-dir.
    #[arg(long, default_value = DEFAULT_FILENAME)]
    filename: String,
    /// Output format (csv or json). If omitted, inferred from the --filename extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
    }
}

fn infer_format(filename: &str) -> OutputFormat {
    match filename.rsplit_once('.') {
        Some((_, ext)) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Csv,
    }
}

fn cmd_run(args: RunArgs) -> Result<()> {
    let format = match args.format {
        Some(OutFormat::Csv) => OutputFormat::Csv,
        Some(OutFormat::Json) => OutputFormat::Json,
        None => infer_format(&args.filename),
    };
    let settings = Settings {
        out_dir: args.out_dir,
        filename: args.filename,
        format,
    };
    let client = Client::with_base_url(&args.url);
    pipeline::run(&client, &settings).with_context(|| format!("ETL run against {}", args.url))?;
    Ok(())
}
