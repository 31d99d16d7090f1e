//! The current-dataset handle.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use fare_radar_flight_models::FlightRecord;

use crate::{DEFAULT_DATASET_FILENAME, DatasetError, codec};

/// Handle to the dataset directory and the path of the current dataset.
///
/// Exactly one dataset is current at a time. The path is swapped after a
/// successful publish and read by every analysis request; a failed publish
/// leaves the previous path (and file) untouched.
pub struct DatasetStore {
    /// Directory all dataset files are written into.
    dir: PathBuf,
    /// Path of the current dataset file.
    current: RwLock<PathBuf>,
}

impl DatasetStore {
    /// Creates a store rooted at `dir`, with the current path defaulting to
    /// `dir/flight_data.csv`.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        let current = RwLock::new(dir.join(DEFAULT_DATASET_FILENAME));
        Self { dir, current }
    }

    /// Returns the dataset directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the current dataset file.
    ///
    /// # Panics
    ///
    /// Panics if the path lock is poisoned.
    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        self.current.read().expect("dataset path lock poisoned").clone()
    }

    /// Whether the current dataset file exists on disk.
    #[must_use]
    pub fn data_available(&self) -> bool {
        self.current_path().exists()
    }

    /// Swaps the current dataset path.
    ///
    /// # Panics
    ///
    /// Panics if the path lock is poisoned.
    pub fn set_current(&self, path: PathBuf) {
        *self.current.write().expect("dataset path lock poisoned") = path;
    }

    /// Writes `records` as a complete CSV file named `filename` inside the
    /// store directory and makes it the current dataset.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place, so a reader racing this publish sees either the previous file
    /// or the new one in full. On error the previous dataset remains
    /// current.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the directory cannot be created or the
    /// write/rename fails.
    pub fn publish(
        &self,
        records: &[FlightRecord],
        filename: &str,
    ) -> Result<PathBuf, DatasetError> {
        fs::create_dir_all(&self.dir)?;

        let target = self.dir.join(filename);
        let tmp = self.dir.join(format!("{filename}.tmp"));

        let result: Result<(), DatasetError> = (|| {
            let writer = BufWriter::new(File::create(&tmp)?);
            codec::write_records(writer, records)?;
            fs::rename(&tmp, &target)?;
            Ok(())
        })();

        if let Err(e) = result {
            // Best-effort cleanup; the publish itself already failed.
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        log::info!("Published {} records to {}", records.len(), target.display());
        self.set_current(target.clone());
        Ok(target)
    }

    /// Reads every record from the current dataset file, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be opened or read.
    pub fn read(&self) -> Result<Vec<FlightRecord>, DatasetError> {
        let path = self.current_path();
        let file = File::open(&path)?;
        let records = codec::read_records(file)?;
        log::debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(airline: &str, price: &str) -> FlightRecord {
        FlightRecord {
            departure_time: "6:00 AM".to_string(),
            arrival_time: "9:15 AM".to_string(),
            airline: airline.to_string(),
            duration: "3 hr 15 min".to_string(),
            stops: "Nonstop".to_string(),
            price: price.to_string(),
            co2_emissions: "210 kg CO2e".to_string(),
            emissions_variation: "+4%".to_string(),
            date: None,
        }
    }

    fn temp_store(name: &str) -> DatasetStore {
        let dir = std::env::temp_dir().join(format!("fare_radar_store_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        DatasetStore::new(dir)
    }

    #[test]
    fn publish_then_read_round_trips() {
        let store = temp_store("round_trip");
        let records = vec![record("United", "$120"), record("Delta", "$95")];

        let path = store.publish(&records, DEFAULT_DATASET_FILENAME).unwrap();

        assert_eq!(path, store.current_path());
        assert_eq!(store.read().unwrap(), records);
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn publish_leaves_no_temp_file() {
        let store = temp_store("no_tmp");
        store
            .publish(&[record("United", "$120")], DEFAULT_DATASET_FILENAME)
            .unwrap();

        let leftovers: Vec<_> = fs::read_dir(store.dir())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn publish_replaces_previous_content_wholly() {
        let store = temp_store("replace");
        store
            .publish(&[record("United", "$120"), record("Delta", "$95")], DEFAULT_DATASET_FILENAME)
            .unwrap();
        store
            .publish(&[record("Alaska", "$80")], DEFAULT_DATASET_FILENAME)
            .unwrap();

        let records = store.read().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].airline, "Alaska");
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn data_available_reflects_file_presence() {
        let store = temp_store("available");
        assert!(!store.data_available());

        store
            .publish(&[record("United", "$120")], DEFAULT_DATASET_FILENAME)
            .unwrap();
        assert!(store.data_available());
        let _ = fs::remove_dir_all(store.dir());
    }
}
