//! Record conversion
//!
//! Converters map the grouped `(label, body)` records into the crate's
//! strongly typed collection targets. Every target builds its [`Sequence`]
//! values through [`Sequence::new`], so the alphabet check runs here — the
//! last gate after structural grouping has already succeeded.

use std::collections::HashSet;

use crate::error::{Result, SeqLoadError};
use crate::types::{LabeledSequence, Record, Sequence};

/// Conversion step from grouped records to a domain collection type
///
/// Converters are stateless configuration objects bound to a loader at
/// construction time. A conversion either produces a fully validated value
/// or fails; no partial collection escapes.
pub trait Convert {
    /// The collection type this converter produces
    type Output;

    /// Convert a full record stream, validating every body
    fn convert(&self, records: Vec<Record>) -> Result<Self::Output>;
}

/// Exactly one record, converted to a sequence with its label attached
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSequence;

impl Convert for SingleSequence {
    type Output = LabeledSequence;

    fn convert(&self, records: Vec<Record>) -> Result<LabeledSequence> {
        let found = records.len();
        let mut records = records.into_iter();
        match (records.next(), found) {
            (Some(record), 1) => {
                let sequence = Sequence::new(record.body)?;
                Ok(LabeledSequence::new(record.label, sequence))
            }
            _ => Err(SeqLoadError::WrongRecordCount { expected: 1, found }),
        }
    }
}

/// Every record's sequence value, in encounter order, duplicates kept
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceList;

impl Convert for SequenceList {
    type Output = Vec<Sequence>;

    fn convert(&self, records: Vec<Record>) -> Result<Vec<Sequence>> {
        records
            .into_iter()
            .map(|record| Sequence::new(record.body))
            .collect()
    }
}

/// Every record's sequence value, duplicates collapsed by body content
///
/// Labels are ignored for equality; two records with different labels but
/// the same body contribute one element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceSet;

impl Convert for SequenceSet {
    type Output = HashSet<Sequence>;

    fn convert(&self, records: Vec<Record>) -> Result<HashSet<Sequence>> {
        records
            .into_iter()
            .map(|record| Sequence::new(record.body))
            .collect()
    }
}

/// Every record converted in encounter order, each retaining its label
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledSequences;

impl Convert for LabeledSequences {
    type Output = Vec<LabeledSequence>;

    fn convert(&self, records: Vec<Record>) -> Result<Vec<LabeledSequence>> {
        records
            .into_iter()
            .map(|record| {
                let sequence = Sequence::new(record.body)?;
                Ok(LabeledSequence::new(record.label, sequence))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, &str)]) -> Vec<Record> {
        pairs
            .iter()
            .map(|(label, body)| Record::new(*label, *body))
            .collect()
    }

    #[test]
    fn test_single_requires_exactly_one_record() {
        assert!(matches!(
            SingleSequence.convert(records(&[])),
            Err(SeqLoadError::WrongRecordCount {
                expected: 1,
                found: 0
            })
        ));
        assert!(matches!(
            SingleSequence.convert(records(&[("a", "AC"), ("b", "GT")])),
            Err(SeqLoadError::WrongRecordCount {
                expected: 1,
                found: 2
            })
        ));

        let single = SingleSequence
            .convert(records(&[("chr1", "ACGT")]))
            .unwrap();
        assert_eq!(single.label, "chr1");
        assert_eq!(single.sequence.bases(), "ACGT");
    }

    #[test]
    fn test_list_keeps_order_and_duplicates() {
        let list = SequenceList
            .convert(records(&[("a", "AC"), ("b", "GT"), ("c", "AC")]))
            .unwrap();
        let bases: Vec<&str> = list.iter().map(Sequence::bases).collect();
        assert_eq!(bases, vec!["AC", "GT", "AC"]);
    }

    #[test]
    fn test_set_collapses_by_body_ignoring_labels() {
        let set = SequenceSet
            .convert(records(&[("a", "ACGT"), ("b", "ACGT"), ("c", "TT")]))
            .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Sequence::new("ACGT").unwrap()));
        assert!(set.contains(&Sequence::new("TT").unwrap()));
    }

    #[test]
    fn test_labeled_array_preserves_order_and_labels() {
        let array = LabeledSequences
            .convert(records(&[("c1", "AC"), ("c2", "GT")]))
            .unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0].label, "c1");
        assert_eq!(array[0].sequence.bases(), "AC");
        assert_eq!(array[1].label, "c2");
        assert_eq!(array[1].sequence.bases(), "GT");
    }

    #[test]
    fn test_alphabet_violation_fails_conversion() {
        for converter_result in [
            SequenceList.convert(records(&[("a", "AGCU")])).map(|_| ()),
            LabeledSequences
                .convert(records(&[("a", "AGCU")]))
                .map(|_| ()),
            SequenceSet.convert(records(&[("a", "AGCU")])).map(|_| ()),
        ] {
            assert!(matches!(
                converter_result,
                Err(SeqLoadError::InvalidBase { base: 'U', .. })
            ));
        }
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Any structurally valid record list with alphabet-clean bodies
        /// converts, and the rebuilt bodies equal the grouped bodies exactly
        #[test]
        fn test_roundtrip(
            pairs in prop::collection::vec(
                ("[A-Za-z0-9_]{0,10}", "[ACGT]{1,40}"),
                0..8,
            ),
        ) {
            let input: Vec<Record> = pairs
                .iter()
                .map(|(label, body)| Record::new(label.clone(), body.clone()))
                .collect();

            let array = LabeledSequences.convert(input).unwrap();
            prop_assert_eq!(array.len(), pairs.len());
            for (labeled, (label, body)) in array.iter().zip(&pairs) {
                prop_assert_eq!(&labeled.label, label);
                prop_assert_eq!(labeled.sequence.bases(), body.as_str());
            }
        }

        /// Set cardinality equals the number of distinct bodies, independent
        /// of labels and of how often the conversion runs
        #[test]
        fn test_set_cardinality(
            bodies in prop::collection::vec("[ACGT]{1,20}", 1..10),
        ) {
            let labeled: Vec<Record> = bodies
                .iter()
                .enumerate()
                .map(|(i, body)| Record::new(format!("r{}", i), body.clone()))
                .collect();
            let relabeled: Vec<Record> = bodies
                .iter()
                .map(|body| Record::new("same", body.clone()))
                .collect();

            let first = SequenceSet.convert(labeled).unwrap();
            let second = SequenceSet.convert(relabeled).unwrap();

            let distinct: std::collections::HashSet<&String> = bodies.iter().collect();
            prop_assert_eq!(first.len(), distinct.len());
            prop_assert_eq!(first, second);
        }
    }
}
