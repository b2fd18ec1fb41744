//! seqload: typed loaders for small flat-text DNA sequence resources
//!
//! # Overview
//!
//! seqload locates, validates, and parses flat-text sequence resources into
//! strongly typed in-memory collections. Two formats are supported:
//!
//! - **Row format** (`.dna`): exactly one label line followed by one or
//!   more body lines,
//! - **FASTA-like format** (`.fas`/`.fasta`): one or more label/body
//!   groups.
//!
//! A label line starts with `>`; body lines are trimmed and concatenated,
//! so a long sequence may wrap across lines while remaining one logical
//! sequence. Blank lines, a missing leading label line, or a label line
//! without a following body line are format errors. Each load either
//! returns a fully validated result or fails with the first error a
//! pipeline stage produced — never a partial collection.
//!
//! # Quick Start
//!
//! ```no_run
//! use seqload::load_labeled_sequences;
//!
//! # fn main() -> seqload::Result<()> {
//! for entry in load_labeled_sequences("resources/phage.fasta")? {
//!     println!("{}: {} bp", entry.label, entry.sequence.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Loading is atomic and strictly staged: the path is validated before any
//! I/O happens, the stream is grouped into `(label, body)` records, and the
//! records are converted into the requested target, with the nucleotide
//! alphabet checked during conversion:
//!
//! ```no_run
//! use seqload::{load_sequence, load_sequence_set};
//!
//! # fn main() -> seqload::Result<()> {
//! // One sequence from a single-record row file
//! let genome = load_sequence("resources/genome.dna")?;
//!
//! // Distinct sequences from a multi-record file, collapsed by content
//! let distinct = load_sequence_set("resources/reads.fasta")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`loader`]: pipeline orchestration ([`ResourceLoader`]) and one-call
//!   load functions
//! - [`io`]: stream sources, buffered line reading, and record grouping
//! - [`convert`]: converters from grouped records to typed collections
//! - [`validate`]: pre-I/O path validation
//! - [`catalog`]: logical-name-to-path resolution
//! - [`types`]: the domain value types ([`Sequence`], [`Record`], ...)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod convert;
pub mod error;
pub mod io;
pub mod loader;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use catalog::ResourceCatalog;
pub use convert::{Convert, LabeledSequences, SequenceList, SequenceSet, SingleSequence};
pub use error::{Result, SeqLoadError};
pub use io::{group_records, FileSource, GroupingMode, Line, LineReader, RecordGrouper, StreamSource};
pub use loader::{
    load_labeled_sequences, load_sequence, load_sequence_list, load_sequence_set, ResourceLoader,
};
pub use types::{
    FileFormat, LabeledSequence, Record, Sequence, LABEL_MARKER, NUCLEOTIDES,
};
pub use validate::PathValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
