//! Line grouping: the core format algorithm
//!
//! Grouping turns an ordered stream of raw lines into ordered
//! `(label, body)` records. This is where format correctness is enforced:
//!
//! - the first line must be a label line (`>` marker),
//! - every label line must be followed by at least one body line before the
//!   next label line or end of input,
//! - blank lines are a format violation anywhere in the input,
//! - consecutive body lines are trimmed and concatenated without a
//!   separator, so a long sequence may wrap across lines while remaining
//!   one logical body.
//!
//! Grouping never recovers or skips: the first violation aborts the whole
//! load and no partial record list escapes (see [`group_records`]).

use crate::error::{Result, SeqLoadError};
use crate::io::lines::Line;
use crate::types::{FileFormat, Record, LABEL_MARKER};

/// How many records a grouped stream is allowed to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    /// Exactly one record (row format)
    Single,
    /// One or more records (FASTA-like format)
    Multi,
}

impl GroupingMode {
    /// The grouping mode belonging to a file format
    pub const fn for_format(format: FileFormat) -> Self {
        match format {
            FileFormat::Row => GroupingMode::Single,
            FileFormat::Fasta => GroupingMode::Multi,
        }
    }
}

/// Streaming record grouper over a line iterator
///
/// Consumes lines forward-only and yields one [`Record`] per label/body
/// group. A label line that closes the previous record is held in a
/// one-line lookahead buffer and opens the next record on the following
/// call. After the first error the iterator fuses.
///
/// Most callers want [`group_records`], which drives the grouper to
/// completion and enforces the record count; the iterator itself is the
/// seam used by the loader and by tests feeding synthetic line streams.
pub struct RecordGrouper<I> {
    lines: I,
    /// Label line that terminated the previous record, not yet consumed
    pending: Option<Line>,
    started: bool,
    finished: bool,
}

impl<I> RecordGrouper<I>
where
    I: Iterator<Item = Result<Line>>,
{
    /// Create a grouper over a line stream
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            pending: None,
            started: false,
            finished: false,
        }
    }

    fn fail(&mut self, line: usize, msg: impl Into<String>) -> Option<Result<Record>> {
        self.finished = true;
        Some(Err(SeqLoadError::InvalidFormat {
            line,
            msg: msg.into(),
        }))
    }
}

impl<I> Iterator for RecordGrouper<I>
where
    I: Iterator<Item = Result<Line>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // Label line: either the lookahead from the previous record, or the
        // next line of the stream.
        let label_line = match self.pending.take() {
            Some(line) => line,
            None => match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    if self.started {
                        return None;
                    }
                    return Some(Err(SeqLoadError::InvalidFormat {
                        line: 1,
                        msg: "empty input, expected a label line".to_string(),
                    }));
                }
            },
        };
        self.started = true;

        let text = label_line.text.trim();
        if text.is_empty() {
            return self.fail(label_line.number, "blank line");
        }
        let label = match text.strip_prefix(LABEL_MARKER) {
            Some(rest) => rest.trim().to_string(),
            None => {
                return self.fail(
                    label_line.number,
                    format!("expected a label line starting with '{}'", LABEL_MARKER),
                );
            }
        };

        // Body lines, until the next label line or end of input. Closing a
        // record requires at least one accumulated body line.
        let mut body = String::new();
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    let text = line.text.trim();
                    if text.is_empty() {
                        return self.fail(line.number, "blank line");
                    }
                    if text.starts_with(LABEL_MARKER) {
                        if body.is_empty() {
                            return self.fail(
                                line.number,
                                "label line follows a label line with no body line between",
                            );
                        }
                        self.pending = Some(line);
                        break;
                    }
                    body.push_str(text);
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    if body.is_empty() {
                        return self.fail(
                            label_line.number,
                            "label line is not followed by a body line",
                        );
                    }
                    break;
                }
            }
        }

        Some(Ok(Record { label, body }))
    }
}

/// Group a line stream into records, enforcing the mode's record count
///
/// Drives a [`RecordGrouper`] to completion, aborting on the first error so
/// no partial record list is ever returned. In [`GroupingMode::Single`] the
/// grouped stream must contain exactly one record.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use seqload::{group_records, GroupingMode, LineReader};
///
/// let lines = LineReader::new(Cursor::new(">c1\nAC\nGT\n>c2\nTT\n"));
/// let records = group_records(lines, GroupingMode::Multi)?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].body, "ACGT");
/// # Ok::<(), seqload::SeqLoadError>(())
/// ```
pub fn group_records<I>(lines: I, mode: GroupingMode) -> Result<Vec<Record>>
where
    I: Iterator<Item = Result<Line>>,
{
    let records: Vec<Record> = RecordGrouper::new(lines).collect::<Result<_>>()?;
    if mode == GroupingMode::Single && records.len() != 1 {
        return Err(SeqLoadError::WrongRecordCount {
            expected: 1,
            found: records.len(),
        });
    }
    Ok(records)
}
