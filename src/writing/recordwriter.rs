//! JSON-lines writer for one partition name.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::review::ReviewRecord;

/// Append-mode record writer.
///
/// Writes `{name}.jsonl` under `dst`, one serialized record per line.
/// Note that nothing is created/written unless a write is performed.
pub struct RecordWriter {
    name: String,
    dst: PathBuf,
    file: Option<File>,
    nb_records: u64,
}

impl RecordWriter {
    pub fn new(dst: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            dst: dst.to_path_buf(),
            file: None,
            nb_records: 0,
        }
    }

    fn create_file(&mut self) -> std::io::Result<()> {
        let mut path = self.dst.clone();
        path.push(format!("{}.jsonl", self.name));

        let mut options = OpenOptions::new();
        options.append(true).create(true);

        info!("creating {:?}", path);
        self.file = Some(options.open(path)?);
        Ok(())
    }

    pub fn write(&mut self, record: &ReviewRecord) -> Result<(), Error> {
        // if there's no file open, create one
        if self.file.is_none() {
            self.create_file()?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        // file is necessarily open at this point
        let file = self.file.as_mut().ok_or_else(|| {
            Error::Custom(format!("could not open file for partition {}", self.name))
        })?;
        file.write_all(line.as_bytes())?;
        self.nb_records += 1;

        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }

    pub fn nb_records(&self) -> u64 {
        self.nb_records
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
