use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// One country object exactly as the REST Countries API returns it.
///
/// The schema belongs to the API and is never validated here; the transformer
/// reads the few paths it needs and falls back to defaults for the rest.
pub type RawCountryRecord = Value;

/// Sentinel written for text fields the API did not provide, and for any cell
/// left unset after mapping.
pub const UNKNOWN: &str = "Unknown";

/// Default for the `Flag` column.
pub const NO_FLAG: &str = "No flag available";

pub const COLUMN_COUNT: usize = 11;

/// Output columns, in file order.
pub const HEADERS: [&str; COLUMN_COUNT] = [
    "Country",
    "Official Name",
    "Region",
    "Subregion",
    "Capital",
    "Population",
    "Latitude",
    "Longitude",
    "Area (sq km)",
    "Timezones",
    "Flag",
];

/// A single table cell.
///
/// Numbers keep the JSON representation they arrived with, so `1.0` is written
/// as `1.0` and `500` as `500`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(Number),
    /// No value and no field-specific default. Never survives into a `CountryTable`.
    Unset,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Cell::Unset)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Cell::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<Option<Number>> for Cell {
    fn from(v: Option<Number>) -> Self {
        v.map(Cell::Number).unwrap_or(Cell::Unset)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Unset => Ok(()),
        }
    }
}

/// Flat record derived from one `RawCountryRecord` (one row = one country).
///
/// `None` marks a value the API sent as an explicit `null`, or coordinates it
/// did not send at all. Those cells become `UNKNOWN` in the table; an absent key
/// gets the column default instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRow {
    pub country: String,
    pub official_name: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub population: Option<Number>,
    pub latitude: Option<Number>,
    pub longitude: Option<Number>,
    pub area: Option<Number>,
    pub timezones: String,
    pub flag: Option<String>,
}

impl CountryRow {
    /// Cells in `HEADERS` order, `None` fields as `Cell::Unset`.
    pub fn cells(&self) -> [Cell; COLUMN_COUNT] {
        [
            Cell::text(&self.country),
            Cell::text(&self.official_name),
            Cell::text(&self.region),
            Cell::text(&self.subregion),
            Cell::text(&self.capital),
            Cell::from(self.population.clone()),
            Cell::from(self.latitude.clone()),
            Cell::from(self.longitude.clone()),
            Cell::from(self.area.clone()),
            Cell::text(&self.timezones),
            self.flag.clone().map(Cell::Text).unwrap_or(Cell::Unset),
        ]
    }
}

/// Ordered table of countries, one row per input record, in API order.
///
/// Construction runs the normalization pass, so no cell in a table is ever
/// `Cell::Unset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryTable {
    rows: Vec<[Cell; COLUMN_COUNT]>,
}

impl CountryTable {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CountryRow>,
    {
        let rows = rows.into_iter().map(|r| normalize(r.cells())).collect();
        Self { rows }
    }

    pub fn headers(&self) -> &'static [&'static str; COLUMN_COUNT] {
        &HEADERS
    }

    pub fn rows(&self) -> &[[Cell; COLUMN_COUNT]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell by row index and header name.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = HEADERS.iter().position(|h| *h == column)?;
        self.rows.get(row).map(|r| &r[idx])
    }
}

/// Replace every unset cell with the `UNKNOWN` sentinel.
fn normalize(cells: [Cell; COLUMN_COUNT]) -> [Cell; COLUMN_COUNT] {
    cells.map(|c| if c.is_unset() { Cell::text(UNKNOWN) } else { c })
}
