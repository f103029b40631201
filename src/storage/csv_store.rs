use std::fs::{remove_file, File, OpenOptions};
use std::io::{self, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info, warn};

use crate::models::Transaction;
use crate::storage::errors::StoreError;
use crate::storage::{RecordStore, ResetOutcome};

/// Append-only record store backed by a single CSV file.
///
/// The header row is written lazily by the first append into a missing or empty
/// file. Every operation opens the file, uses it and drops the handle before
/// returning.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn append(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|error| StoreError::io(&self.path, error))?;

        let length = file.metadata()
            .map_err(|error| StoreError::io(&self.path, error))?
            .len();
        let needs_header = length == 0;

        if length > 0 && !ends_with_newline(&mut file).map_err(|error| StoreError::io(&self.path, error))? {
            warn!("[{}] does not end with a line break, terminating its last row", self.path.display());
            file.write_all(b"\n").map_err(|error| StoreError::io(&self.path, error))?;
        }

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        writer.serialize(transaction).map_err(|error| StoreError::csv(&self.path, error))?;
        writer.flush().map_err(|error| StoreError::io(&self.path, error))?;

        info!("Transaction [{}]:[{}] appended to [{}]", transaction.description, transaction.amount, self.path.display());

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("No data file at [{}], treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(error) => return Err(StoreError::io(&self.path, error))
        };

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut transactions = Vec::new();

        for result in reader.deserialize::<Transaction>() {
            match result {
                Ok(transaction) => transactions.push(transaction),
                Err(error) if error.is_io_error() => return Err(StoreError::csv(&self.path, error)),
                Err(error) => {
                    //NOTE: A hand-edited row should not hide every other record, so it is logged and dropped
                    warn!("Skipping unreadable row in [{}]: {error}", self.path.display());
                }
            }
        }

        debug!("Loaded [{}] transactions from [{}]", transactions.len(), self.path.display());

        Ok(transactions)
    }

    fn clear(&self) -> Result<ResetOutcome, StoreError> {
        match remove_file(&self.path) {
            Ok(()) => {
                info!("All transactions in [{}] have been reset", self.path.display());
                Ok(ResetOutcome::Cleared)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("No data file at [{}] to reset", self.path.display());
                Ok(ResetOutcome::NothingToClear)
            }
            Err(error) => Err(StoreError::io(&self.path, error))
        }
    }
}

/// Appended rows must start on a fresh line or they merge into the last record.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;

    Ok(last[0] == b'\n')
}
