//! Determinism verification.
//!
//! Runs a generation closure several times and compares the outputs byte by
//! byte.

use std::fmt;

use barsong_spec::blake3_hash;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// First difference, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference (or the shorter length on a size mismatch).
    pub offset: usize,
    /// Reference byte, if the reference is long enough.
    pub expected: Option<u8>,
    /// Differing byte, if the output is long enough.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<u8>| b.map_or("EOF".to_string(), |b| format!("0x{:02X}", b));
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            show(self.expected),
            show(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Runs `generate_fn` `runs` times and checks every output matches the first.
///
/// # Example
///
/// ```
/// use barsong_tests::verify_determinism;
///
/// let result = verify_determinism(|| vec![1u8, 2, 3], 3);
/// assert!(result.is_deterministic);
/// ```
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = blake3_hash(reference);

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs: run_index + 1,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(a, b)| a != b)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;
    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_outputs() {
        let result = verify_determinism(|| b"MThd".to_vec(), 4);
        assert!(result.is_deterministic);
        assert_eq!(result.runs, 4);
        assert_eq!(result.output_size, 4);
        result.assert_deterministic();
    }

    #[test]
    fn test_detects_byte_difference() {
        let counter = Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0, counter.get()]
            },
            3,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 1);
        assert_eq!(diff.expected, Some(1));
        assert_eq!(diff.actual, Some(2));
        assert_eq!(diff.run_index, 1);
    }

    #[test]
    fn test_detects_length_difference() {
        let counter = Cell::new(0usize);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![7u8; counter.get()]
            },
            2,
        );
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 1);
        assert_eq!(diff.expected, None);
        assert_eq!(diff.actual, Some(7));
    }

    #[test]
    #[should_panic(expected = "Non-deterministic")]
    fn test_assert_panics_on_difference() {
        let counter = Cell::new(0u8);
        verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![counter.get()]
            },
            2,
        )
        .assert_deterministic();
    }
}
