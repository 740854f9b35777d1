/*! Line-to-record mapping.

[RecordMapper] turns a JSON-lines review file into a lazy sequence of
`(index, record)` pairs, where `index` is the zero-based line number.

Lines are streamed, never loaded wholesale: source files can be large.
The iterator is fused on error: the first malformed line, missing field
or I/O failure is yielded as an `Err` and ends the sequence. Records
yielded before the failure stand.

!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use crate::error::Error;
use crate::review::ReviewRecord;

/// Streaming reader yielding one [ReviewRecord] per source line.
#[derive(Debug)]
pub struct RecordMapper<T> {
    path: PathBuf,
    lines: Lines<BufReader<T>>,
    index: usize,
    failed: bool,
}

impl RecordMapper<File> {
    /// Open `src` for buffered reading. The file handle is owned by the
    /// mapper and released when it is dropped.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self::new(handle, src.to_path_buf()))
    }
}

impl<T> RecordMapper<T>
where
    T: Read,
{
    pub fn new(src: T, path: PathBuf) -> Self {
        Self {
            path,
            lines: BufReader::new(src).lines(),
            index: 0,
            failed: false,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<T> Iterator for RecordMapper<T>
where
    T: Read,
{
    type Item = Result<(usize, ReviewRecord), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                self.failed = true;
                return Some(Err(Error::Io(e)));
            }
        };

        match ReviewRecord::from_json_line(&line) {
            Ok(record) => {
                let index = self.index;
                self.index += 1;
                Some(Ok((index, record)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn mapper(content: &'static str) -> RecordMapper<Cursor<&'static str>> {
        RecordMapper::new(Cursor::new(content), PathBuf::new())
    }

    #[test]
    fn well_formed_lines() {
        let tr = mapper(
            r#"{"review_id":"R1","product_id":"P1","reviewer_id":"U1","stars":"5","review_body":"Great"}
{"review_id":"R2","product_id":"P2","reviewer_id":"U2","stars":"1","review_body":"Bad"}"#,
        );

        let records: Vec<_> = tr.map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);

        let (index, record) = &records[0];
        assert_eq!(*index, 0);
        assert_eq!(record.review_id(), "R1");
        assert_eq!(record.star_rating(), 5);

        let (index, record) = &records[1];
        assert_eq!(*index, 1);
        assert_eq!(record.review_id(), "R2");
        assert_eq!(record.star_rating(), 1);
    }

    #[test]
    fn malformed_line_stops_iteration() {
        let mut tr = mapper(
            r#"{"review_id":"R1","product_id":"P1","reviewer_id":"U1","stars":"5","review_body":"a"}
{"review_id":"R2","product_id":"P2","reviewer_id":"U2","stars":"4","review_body":"b"}
not json at all
{"review_id":"R4","product_id":"P4","reviewer_id":"U4","stars":"2","review_body":"d"}"#,
        );

        assert!(tr.next().unwrap().is_ok());
        assert!(tr.next().unwrap().is_ok());
        assert!(tr.next().unwrap().is_err());
        // fused: the valid fourth line is never reached
        assert!(tr.next().is_none());
        assert!(tr.next().is_none());
    }

    #[test]
    fn bad_rating_stops_iteration() {
        let mut tr = mapper(
            r#"{"review_id":"R1","product_id":"P1","reviewer_id":"U1","stars":"abc","review_body":"a"}
{"review_id":"R2","product_id":"P2","reviewer_id":"U2","stars":"4","review_body":"b"}"#,
        );

        assert!(matches!(tr.next(), Some(Err(Error::Rating(_)))));
        assert!(tr.next().is_none());
    }

    #[test]
    fn empty_input() {
        let mut tr = mapper("");
        assert!(tr.next().is_none());
    }

    #[test]
    fn reread_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset_en_dev.json");
        std::fs::write(
            &path,
            r#"{"review_id":"R1","product_id":"P1","reviewer_id":"U1","stars":"5","review_body":"a"}
{"review_id":"R2","product_id":"P2","reviewer_id":"U2","stars":"3","review_body":"b"}
"#,
        )
        .unwrap();

        let first: Vec<_> = RecordMapper::from_path(&path)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        let second: Vec<_> = RecordMapper::from_path(&path)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
