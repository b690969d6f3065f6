//! restcountries_etl
//!
//! A small Rust library for pulling country metadata from the
//! [REST Countries](https://restcountries.com) API, flattening it into a fixed
//! eleven-column table, and saving it as CSV. Pairs with the `restcountries-etl` CLI.
//!
//! ### Stages
//! - **Extract**: [`Client::extract_data`] issues one GET; a non-200 status yields no records
//! - **Transform**: [`transform::transform_data`] maps each record to a row, defaulting
//!   missing fields and writing `"Unknown"` into any cell that has no value
//! - **Load**: [`storage::load_data`] writes `data/countries.csv`, replacing any previous file
//!
//! ### Example
//! ```no_run
//! use restcountries_etl::{Client, storage, transform};
//!
//! let records = Client::default().extract_data()?;
//! if !records.is_empty() {
//!     let table = transform::transform_data(&records);
//!     storage::load_data(&table, storage::DEFAULT_FILENAME)?;
//! }
//! # Ok::<(), restcountries_etl::EtlError>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod transform;

pub use api::Client;
pub use error::EtlError;
pub use models::{Cell, CountryRow, CountryTable, RawCountryRecord};
