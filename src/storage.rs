use crate::error::{EtlError, Result};
use crate::models::{COLUMN_COUNT, Cell, CountryTable, HEADERS};
use csv::WriterBuilder;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory (relative to the working directory) that receives output files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name used when the caller does not pick one.
pub const DEFAULT_FILENAME: &str = "countries.csv";

/// Write `table` as CSV to `data/<filename>`, creating `data/` if needed.
///
/// Any existing file is overwritten. Prints the output path on success and
/// returns it.
pub fn load_data(table: &CountryTable, filename: &str) -> Result<PathBuf> {
    load_data_in(DEFAULT_DATA_DIR, table, filename)
}

/// Same as [`load_data`], with the output directory chosen by the caller.
pub fn load_data_in<P: AsRef<Path>>(dir: P, table: &CountryTable, filename: &str) -> Result<PathBuf> {
    let path = prepare_output(dir.as_ref(), filename)?;
    save_csv(table, &path)?;
    println!("Data saved to {}", path.display());
    Ok(path)
}

/// Create `dir` if missing and return `dir/filename`.
pub fn prepare_output(dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| EtlError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.join(filename))
}

/// Save the table as CSV with header.
pub fn save_csv<P: AsRef<Path>>(table: &CountryTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| EtlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADERS)?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|c| c.to_string()))?;
    }
    wtr.flush().map_err(|source| EtlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Save the table as a pretty JSON array of objects keyed by column name.
pub fn save_json<P: AsRef<Path>>(table: &CountryTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let rows: Vec<JsonRow<'_>> = table.rows().iter().map(JsonRow).collect();
    let s = serde_json::to_string_pretty(&rows)?;
    let mut f = File::create(path).map_err(|source| EtlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    f.write_all(s.as_bytes()).map_err(|source| EtlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Serializes one row as a map in column order.
struct JsonRow<'a>(&'a [Cell; COLUMN_COUNT]);

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for (h, c) in HEADERS.iter().zip(self.0.iter()) {
            map.serialize_entry(h, c)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::transform_data;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let table = transform_data(&[json!({ "name": { "common": "Testland" }, "latlng": [1.5, 2] })]);
        save_csv(&table, &csvp).unwrap();
        save_json(&table, &jsonp).unwrap();

        let csv_txt = fs::read_to_string(&csvp).unwrap();
        assert!(csv_txt.starts_with("Country,Official Name,Region,"));
        assert_eq!(csv_txt.lines().count(), 2);

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&jsonp).unwrap()).unwrap();
        assert_eq!(v[0]["Country"], "Testland");
        assert_eq!(v[0]["Latitude"], 1.5);
        assert_eq!(v[0]["Population"], 0);
        assert_eq!(v[0]["Flag"], "No flag available");
    }

    #[test]
    fn prepare_output_creates_nested_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let p = prepare_output(&nested, "c.csv").unwrap();
        assert!(nested.is_dir());
        assert_eq!(p, nested.join("c.csv"));
        // second call on an existing directory is fine
        prepare_output(&nested, "c.csv").unwrap();
    }
}
