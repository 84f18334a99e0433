// Built-in combination types
//
// Each type is a static table of index patterns into the sorted selection.
// The table is never mutated; lookups hand out `&'static` references.

use marksix_core::number::{COMBINATION_SIZE, MAX_NUMBER, MIN_NUMBER};

use crate::SmartError;

/// Indices into the sorted selection that make up one combination.
pub type Pattern = [usize; COMBINATION_SIZE];

/// A smart combination preset.
///
/// Invariants (checked by [`CombinationType::new`], and by tests for the
/// built-in table):
/// - `input_count` lies within [`INPUT_COUNT_RANGE`]
/// - `patterns.len() == output_count`
/// - every pattern holds `COMBINATION_SIZE` distinct indices below `input_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationType {
    id: u8,
    input_count: usize,
    output_count: usize,
    patterns: &'static [Pattern],
    match_guarantee: (u8, u8),
}

/// Smart Combination 9: 10 numbers, 16 bets, at least one bet with 5 of the
/// 6 drawn numbers when all 6 are among the 10 chosen.
const SMART_9: &[Pattern] = &[
    [0, 1, 2, 3, 4, 5],
    [1, 2, 3, 6, 7, 9],
    [0, 2, 3, 6, 8, 9],
    [0, 1, 3, 5, 7, 8],
    [1, 2, 4, 6, 7, 8],
    [0, 1, 4, 5, 6, 9],
    [0, 2, 4, 5, 7, 9],
    [0, 1, 3, 4, 8, 9],
    [0, 2, 5, 6, 7, 8],
    [1, 2, 5, 7, 8, 9],
    [0, 3, 4, 5, 6, 7],
    [0, 4, 6, 7, 8, 9],
    [2, 3, 4, 5, 7, 8],
    [1, 3, 5, 6, 8, 9],
    [1, 3, 4, 5, 7, 9],
    [2, 4, 5, 6, 8, 9],
];

/// Full wheel of 7: every 6-number subset of 7 numbers, lexicographic order.
const WHEEL_7: &[Pattern] = &[
    [0, 1, 2, 3, 4, 5],
    [0, 1, 2, 3, 4, 6],
    [0, 1, 2, 3, 5, 6],
    [0, 1, 2, 4, 5, 6],
    [0, 1, 3, 4, 5, 6],
    [0, 2, 3, 4, 5, 6],
    [1, 2, 3, 4, 5, 6],
];

const WHEEL_OF_7: CombinationType = CombinationType {
    id: 7,
    input_count: 7,
    output_count: 7,
    patterns: WHEEL_7,
    match_guarantee: (6, 6),
};

const SMART_COMBINATION_9: CombinationType = CombinationType {
    id: 9,
    input_count: 10,
    output_count: 16,
    patterns: SMART_9,
    match_guarantee: (5, 6),
};

/// Registered types, ascending by id.
static REGISTRY: &[CombinationType] = &[WHEEL_OF_7, SMART_COMBINATION_9];

/// Allowed input counts: at least one full bet, at most every drawable number.
pub const INPUT_COUNT_RANGE: std::ops::RangeInclusive<usize> =
    COMBINATION_SIZE..=(MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Id used when none is chosen.
pub const DEFAULT_TYPE_ID: u8 = 9;

impl CombinationType {
    /// Build a custom type, checking the input count and pattern invariants.
    ///
    /// `output_count` is taken from the number of patterns. Patterns must be
    /// `'static`, like the built-in tables: a literal, a `const`, or a leaked
    /// `Vec` for patterns built at run time.
    pub fn new(
        id: u8,
        input_count: usize,
        patterns: &'static [Pattern],
        match_guarantee: (u8, u8),
    ) -> Result<Self, SmartError> {
        if !INPUT_COUNT_RANGE.contains(&input_count) {
            return Err(SmartError::InvalidInputCount {
                input_count,
                min: *INPUT_COUNT_RANGE.start(),
                max: *INPUT_COUNT_RANGE.end(),
            });
        }
        for (index, pattern) in patterns.iter().enumerate() {
            if !pattern_is_valid(pattern, input_count) {
                return Err(SmartError::InvalidPattern { index, input_count });
            }
        }
        Ok(Self {
            id,
            input_count,
            output_count: patterns.len(),
            patterns,
            match_guarantee,
        })
    }

    /// All built-in types in ascending id order.
    pub fn all() -> &'static [CombinationType] {
        REGISTRY
    }

    /// Look up a built-in type by id.
    pub fn by_id(id: u8) -> Result<&'static CombinationType, SmartError> {
        REGISTRY
            .iter()
            .find(|t| t.id == id)
            .ok_or(SmartError::UnknownType(id))
    }

    /// The default type (Smart Combination 9).
    pub fn default_type() -> &'static CombinationType {
        &SMART_COMBINATION_9
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Numbers the user must supply.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Combinations produced.
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn patterns(&self) -> &'static [Pattern] {
        self.patterns
    }

    /// `(matched, of)`, e.g. `(5, 6)` for "5 of 6". Documentation only.
    pub fn match_guarantee(&self) -> (u8, u8) {
        self.match_guarantee
    }
}

fn pattern_is_valid(pattern: &Pattern, input_count: usize) -> bool {
    pattern.iter().all(|&i| i < input_count)
        && pattern
            .iter()
            .enumerate()
            .all(|(a, x)| pattern[a + 1..].iter().all(|y| x != y))
}
