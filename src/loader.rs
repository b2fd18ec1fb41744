//! Resource loading orchestration
//!
//! A [`ResourceLoader`] runs the whole pipeline for one call:
//! validate path → open stream → wrap in lines → group records → convert.
//! Each stage is a hard gate; nothing runs after a failure, and a
//! validation failure never touches the stream source. The stream lives
//! only inside the call frame and is released when the frame unwinds,
//! success or not.
//!
//! Loaders hold only immutable collaborators, so one loader instance can
//! serve concurrent callers; every call allocates its own stream, line
//! buffer, and record list.

use crate::convert::{Convert, LabeledSequences, SequenceList, SequenceSet, SingleSequence};
use crate::error::Result;
use crate::io::{group_records, FileSource, GroupingMode, LineReader, StreamSource};
use crate::types::{FileFormat, LabeledSequence, Sequence};
use crate::validate::PathValidator;
use std::collections::HashSet;

/// Pipeline orchestrator, generic over the conversion target and the
/// stream source
///
/// # Examples
///
/// ```no_run
/// use seqload::ResourceLoader;
///
/// let loader = ResourceLoader::fasta_array();
/// let sequences = loader.load("resources/sample.fasta")?;
/// for entry in &sequences {
///     println!("{}: {} bp", entry.label, entry.sequence.len());
/// }
/// # Ok::<(), seqload::SeqLoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ResourceLoader<C, S = FileSource> {
    validator: PathValidator,
    mode: GroupingMode,
    converter: C,
    source: S,
}

impl<C: Convert> ResourceLoader<C, FileSource> {
    /// Build a loader over local files for the given format and converter
    pub fn new(format: FileFormat, converter: C) -> Self {
        Self::with_source(format, converter, FileSource::new())
    }
}

impl<C, S> ResourceLoader<C, S>
where
    C: Convert,
    S: StreamSource,
{
    /// Build a loader with an explicit stream source
    pub fn with_source(format: FileFormat, converter: C, source: S) -> Self {
        Self {
            validator: PathValidator::for_format(format),
            mode: GroupingMode::for_format(format),
            converter,
            source,
        }
    }

    /// Load and convert the resource at `path`
    ///
    /// Performs exactly one stream acquisition and release per call; no
    /// caching, no retry. Either returns a fully converted, fully
    /// validated value or the first error any stage produced.
    pub fn load(&self, path: &str) -> Result<C::Output> {
        self.validator.validate(path)?;
        let stream = self.source.open(path)?;
        let lines = LineReader::new(stream);
        let records = group_records(lines, self.mode)?;
        self.converter.convert(records)
    }
}

impl ResourceLoader<SingleSequence> {
    /// Loader for single-sequence row files (`.dna`)
    pub fn row() -> Self {
        Self::new(FileFormat::Row, SingleSequence)
    }
}

impl ResourceLoader<SequenceList> {
    /// Loader producing an ordered sequence list from FASTA-like files
    pub fn fasta_list() -> Self {
        Self::new(FileFormat::Fasta, SequenceList)
    }
}

impl ResourceLoader<SequenceSet> {
    /// Loader producing a de-duplicated sequence set from FASTA-like files
    pub fn fasta_set() -> Self {
        Self::new(FileFormat::Fasta, SequenceSet)
    }
}

impl ResourceLoader<LabeledSequences> {
    /// Loader producing a labeled sequence array from FASTA-like files
    pub fn fasta_array() -> Self {
        Self::new(FileFormat::Fasta, LabeledSequences)
    }
}

/// Load the single sequence of a row file (`.dna`)
pub fn load_sequence(path: &str) -> Result<LabeledSequence> {
    ResourceLoader::row().load(path)
}

/// Load a FASTA-like file into an ordered list of sequences
pub fn load_sequence_list(path: &str) -> Result<Vec<Sequence>> {
    ResourceLoader::fasta_list().load(path)
}

/// Load a FASTA-like file into a set of distinct sequences
pub fn load_sequence_set(path: &str) -> Result<HashSet<Sequence>> {
    ResourceLoader::fasta_set().load(path)
}

/// Load a FASTA-like file into a labeled sequence array
pub fn load_labeled_sequences(path: &str) -> Result<Vec<LabeledSequence>> {
    ResourceLoader::fasta_array().load(path)
}
