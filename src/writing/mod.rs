/*! Partition-separated corpus writing.

[RecordWriter] persists records of a single partition name as JSON
lines; [PartitionFiles] hands out shared writers keyed by name, since
two source splits can map to the same partition name.
!*/
mod partitionfiles;
mod recordwriter;

pub use partitionfiles::PartitionFiles;
pub use recordwriter::RecordWriter;
