// Lottery number range, combination type, formatting and input parsing.

/// Smallest number that can be drawn.
pub const MIN_NUMBER: u32 = 1;

/// Largest number that can be drawn.
pub const MAX_NUMBER: u32 = 49;

/// Number of values in a single bet.
pub const COMBINATION_SIZE: usize = 6;

/// One 6-number bet, in the order given by its pattern.
pub type Combination = [u32; COMBINATION_SIZE];

/// Error type for parsing user-entered numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNumbersError {
    /// A whitespace-separated token is not a non-negative integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Check whether `n` lies within the drawable range.
#[inline]
pub fn in_range(n: u32) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&n)
}

/// Format numbers as zero-padded two-digit strings joined by single spaces.
///
/// `[3, 7, 12]` becomes `"03 07 12"`.
pub fn format_combination(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a numbered output line: `"[01] 03 07 12 19 22 28"`.
///
/// `index` is 1-based.
pub fn format_indexed(index: usize, numbers: &[u32]) -> String {
    format!("[{index:02}] {}", format_combination(numbers))
}

/// Parse whitespace-separated integers.
///
/// Range and count are not checked here; that is the generator's job.
pub fn parse_numbers(input: &str) -> Result<Vec<u32>, ParseNumbersError> {
    input
        .split_whitespace()
        .map(|tok| {
            tok.parse::<u32>()
                .map_err(|_| ParseNumbersError::NotANumber(tok.to_string()))
        })
        .collect()
}
