//! I/O module: stream acquisition, buffered line reading, and the
//! line-grouping pipeline stage

pub mod group;
pub mod lines;
pub mod source;

pub use group::{group_records, GroupingMode, RecordGrouper};
pub use lines::{Line, LineReader};
pub use source::{FileSource, StreamSource, GZIP_MAGIC};
