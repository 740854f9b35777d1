//! Review corpus generation pipeline.
//!
//! The source release is composed of twelve (language, split) files.
//! Each one is resolved through the download cache, stream-mapped line
//! by line into normalized records and appended under its partition
//! name.
//!
//! Partitions are generated in parallel and share no state besides the
//! per-name writers. A failing partition is logged and counted, the
//! others keep going.
use std::path::PathBuf;

use log::{error, info};
use rayon::prelude::*;

use crate::download::Downloader;
use crate::error::Error;
use crate::mapper::RecordMapper;
use crate::partition::{partitions, SplitPartition};
use crate::pipeline::Pipeline;
use crate::writing::PartitionFiles;

pub struct ReviewsPipeline {
    cache: PathBuf,
    dst: PathBuf,
    lang: Option<String>,
}

impl ReviewsPipeline {
    pub fn new(cache: PathBuf, dst: PathBuf, lang: Option<String>) -> Self {
        Self { cache, dst, lang }
    }

    /// Generate a single partition.
    ///
    /// This resolves the partition's source file, then streams its
    /// records into the partition's writer. Returns the number of
    /// records written.
    fn generate_partition(
        partition: &SplitPartition,
        dl: &Downloader,
        files: &PartitionFiles,
    ) -> Result<u64, Error> {
        info!("working on partition: {}", partition.name());

        let path = partition.resolve(dl)?;
        let mapper = RecordMapper::from_path(&path)?;

        let writer = files.writer(&partition.name());
        let mut writer = writer.lock().expect("Problem locking writer");

        let mut nb_records = 0u64;
        for entry in mapper {
            let (_index, record) = entry?;
            writer.write(&record)?;
            nb_records += 1;
        }

        Ok(nb_records)
    }
}

impl Pipeline<()> for ReviewsPipeline {
    fn run(&self) -> Result<(), Error> {
        let partitions = partitions(self.lang.as_deref())?;

        std::fs::create_dir_all(&self.dst)?;
        let dl = Downloader::new(&self.cache);
        let files = PartitionFiles::new(&self.dst);

        let results: Vec<(String, Result<u64, Error>)> = partitions
            .par_iter()
            .map(|partition| {
                (
                    format!("{}/{}", partition.name(), partition.split()),
                    Self::generate_partition(partition, &dl, &files),
                )
            })
            .collect();

        files.flush_all()?;

        let mut nb_failed = 0;
        for (name, result) in results {
            match result {
                Ok(nb_records) => info!("{}: {} records", name, nb_records),
                Err(e) => {
                    error!("{}: generation failed: {:?}", name, e);
                    nb_failed += 1;
                }
            }
        }

        if nb_failed > 0 {
            return Err(Error::Custom(format!(
                "{} partition(s) failed to generate",
                nb_failed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_source(dir: &Path, lang: &str, split: &str, ids: &[&str]) {
        let mut content = String::new();
        for id in ids {
            content.push_str(&format!(
                r#"{{"review_id":"{}","product_id":"P_{}","reviewer_id":"U1","stars":"5","review_body":"ok"}}"#,
                id, lang
            ));
            content.push('\n');
        }
        std::fs::write(
            dir.join(format!("dataset_{}_{}.json", lang, split)),
            content,
        )
        .unwrap();
    }

    #[test]
    fn single_language_generation() {
        let cache = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        write_source(cache.path(), "en", "dev", &["D1", "D2"]);
        write_source(cache.path(), "en", "test", &["T1"]);
        write_source(cache.path(), "en", "train", &["X1", "X2", "X3"]);

        let p = ReviewsPipeline::new(
            cache.path().to_path_buf(),
            dst.path().to_path_buf(),
            Some("en".to_string()),
        );
        p.run().unwrap();

        // dev and train end up in the same partition file
        let en = std::fs::read_to_string(dst.path().join("en.jsonl")).unwrap();
        assert_eq!(en.lines().count(), 5);

        let validate = std::fs::read_to_string(dst.path().join("en_validate.jsonl")).unwrap();
        assert_eq!(validate.lines().count(), 1);
        assert!(validate.contains(r#""review_id":"T1""#));
    }

    #[test]
    fn malformed_line_fails_partition_but_not_others() {
        let cache = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        write_source(cache.path(), "en", "dev", &["D1"]);
        write_source(cache.path(), "en", "train", &["X1"]);
        std::fs::write(
            cache.path().join("dataset_en_test.json"),
            "definitely not json\n",
        )
        .unwrap();

        let p = ReviewsPipeline::new(
            cache.path().to_path_buf(),
            dst.path().to_path_buf(),
            Some("en".to_string()),
        );

        match p.run() {
            Err(Error::Custom(msg)) => assert!(msg.contains("1 partition(s) failed")),
            other => panic!("expected summary error, got {:?}", other),
        }

        // healthy partitions still generated
        let en = std::fs::read_to_string(dst.path().join("en.jsonl")).unwrap();
        assert_eq!(en.lines().count(), 2);
    }
}
