//! Extract → transform → load, in sequence.

use crate::api::Client;
use crate::error::Result;
use crate::storage::{self, DEFAULT_DATA_DIR, DEFAULT_FILENAME};
use crate::transform::transform_data;
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Where and how the load step writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub out_dir: PathBuf,
    pub filename: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_DATA_DIR),
            filename: DEFAULT_FILENAME.to_string(),
            format: OutputFormat::Csv,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The table was written to this path.
    Written(PathBuf),
    /// The fetch produced no records; nothing was written.
    NoData,
}

/// Run the full pipeline, printing a progress line before each step.
///
/// Stops after the extract step when it yields no records, leaving the output
/// location untouched.
pub fn run(client: &Client, settings: &Settings) -> Result<Outcome> {
    println!("Testing the full ETL process...");

    println!("Extracting data...");
    let records = client.extract_data()?;
    if records.is_empty() {
        println!("No data to process.");
        return Ok(Outcome::NoData);
    }

    println!("Transforming data...");
    let table = transform_data(&records);

    println!("Loading data...");
    let path = match settings.format {
        OutputFormat::Csv => storage::load_data_in(&settings.out_dir, &table, &settings.filename)?,
        OutputFormat::Json => {
            let path = storage::prepare_output(&settings.out_dir, &settings.filename)?;
            storage::save_json(&table, &path)?;
            println!("Data saved to {}", path.display());
            path
        }
    };
    info!("loaded {} rows into {}", table.len(), path.display());

    println!("ETL process completed successfully!");
    Ok(Outcome::Written(path))
}
