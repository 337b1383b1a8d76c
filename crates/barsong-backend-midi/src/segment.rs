//! Run-length segmentation of scan text.

use serde::Serialize;

/// A maximal run of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    /// The repeated character.
    pub ch: char,
    /// How many times it repeats, at least 1.
    pub length: usize,
}

impl Run {
    /// Creates a new run.
    pub fn new(ch: char, length: usize) -> Self {
        Self { ch, length }
    }
}

/// Collapses text into maximal runs, left to right.
///
/// Expects normalized text (no CR/LF). Empty text yields no runs; callers
/// decide whether that is an error.
///
/// # Example
/// ```
/// use barsong_backend_midi::segment::{segment_runs, Run};
///
/// let runs = segment_runs("||||    XX");
/// assert_eq!(runs, vec![Run::new('|', 4), Run::new(' ', 4), Run::new('X', 2)]);
/// ```
pub fn segment_runs(text: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for ch in text.chars() {
        match runs.last_mut() {
            Some(run) if run.ch == ch => run.length += 1,
            _ => runs.push(Run::new(ch, 1)),
        }
    }
    runs
}

/// Rebuilds the text a run sequence was segmented from.
pub fn expand_runs(runs: &[Run]) -> String {
    runs.iter()
        .flat_map(|run| std::iter::repeat(run.ch).take(run.length))
        .collect()
}
