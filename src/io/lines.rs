//! Buffered line reading
//!
//! [`LineReader`] wraps a raw stream into a finite, forward-only sequence of
//! text lines. It owns the underlying reader, so the stream is released
//! exactly once — when the `LineReader` is dropped — regardless of whether
//! consumption ends by exhaustion, an early abort, or an error. There is no
//! way to rewind or restart it.

use std::io::BufRead;

use crate::error::Result;

/// One raw line of text, with terminators stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line number within the stream (1-based)
    pub number: usize,
    /// Line text without `\n`/`\r\n`
    pub text: String,
}

/// Lazy line iterator over an owned reader
///
/// After the first I/O error the iterator fuses: subsequent calls return
/// `None` rather than retrying a failed stream.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use seqload::LineReader;
///
/// let mut lines = LineReader::new(Cursor::new(">s\nACGT\n"));
/// let first = lines.next().unwrap()?;
/// assert_eq!((first.number, first.text.as_str()), (1, ">s"));
/// # Ok::<(), seqload::SeqLoadError>(())
/// ```
pub struct LineReader<R> {
    reader: R,
    buffer: String,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a reader, taking ownership of the stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(256),
            line_number: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                let text = self.buffer.trim_end_matches(&['\r', '\n'][..]).to_string();
                Some(Ok(Line {
                    number: self.line_number,
                    text,
                }))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_texts(input: &str) -> Vec<String> {
        LineReader::new(Cursor::new(input.to_string()))
            .map(|line| line.unwrap().text)
            .collect()
    }

    #[test]
    fn test_lines_are_numbered_from_one() {
        let lines: Vec<Line> = LineReader::new(Cursor::new(">a\nAC\nGT\n"))
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_terminators_stripped() {
        assert_eq!(collect_texts(">a\r\nACGT\r\n"), vec![">a", "ACGT"]);
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(collect_texts(">a\nACGT"), vec![">a", "ACGT"]);
    }

    #[test]
    fn test_blank_lines_are_reported_not_skipped() {
        assert_eq!(collect_texts(">a\n\nACGT\n"), vec![">a", "", "ACGT"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect_texts("").is_empty());
    }
}
