/*! Thread-safe partition-separated record writer.

Each partition name is given a [RecordWriter] wrapped into an
[Arc<Mutex<RecordWriter>>].

`dev` and `train` share a partition name per language, so two generation
workers can hold the same writer; the mutex serializes their writes.
!*/
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, RwLock},
};

use log::debug;

use crate::error::Error;

use super::RecordWriter;

type WriterMap = HashMap<String, Arc<Mutex<RecordWriter>>>;

pub struct PartitionFiles {
    writers: Arc<RwLock<WriterMap>>,
    dst: PathBuf,
}

impl PartitionFiles {
    /// Create a new [PartitionFiles] rooted at `dst`. Writers are
    /// created on first use, see [Self::writer].
    ///
    /// Keep in mind that [Self::flush_all] has to be called once every
    /// write is done.
    pub fn new(dst: &Path) -> Self {
        Self {
            writers: Arc::new(RwLock::new(HashMap::new())),
            dst: dst.to_path_buf(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.writers
            .read()
            .expect("Problem locking writers (in read)")
            .contains_key(name)
    }

    /// Get the writer for `name`, creating it if needed.
    pub fn writer(&self, name: &str) -> Arc<Mutex<RecordWriter>> {
        if let Some(w) = self
            .writers
            .read()
            .expect("Problem locking writers (in read)")
            .get(name)
        {
            return Arc::clone(w);
        }

        debug!("creating writer {name}");
        let mut writers = self
            .writers
            .write()
            .expect("Problem with locking writers (in write)");

        // we use the entry API rather than insert to keep the
        // old writer if the name already exists
        let w = writers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(RecordWriter::new(&self.dst, name))));

        Arc::clone(w)
    }

    /// Flush every open writer.
    pub fn flush_all(&self) -> Result<(), Error> {
        for writer in self
            .writers
            .read()
            .expect("Problem locking writers (in read)")
            .values()
        {
            let mut writer_lock = writer.lock().expect("Problem locking writer");
            writer_lock.flush()?;
        }
        Ok(())
    }
}
