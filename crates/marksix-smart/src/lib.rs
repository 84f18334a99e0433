//! Smart combination generator for Mark Six.
//!
//! A combination type maps a pool of N chosen numbers onto M fixed 6-number
//! bets through a static table of index patterns. The pool is sorted before
//! the patterns are applied, so the result depends only on the set of
//! numbers chosen.
//!
//! - [`registry`] -- The built-in combination types
//! - [`generator`] -- Selection validation, pattern remapping and labels
//! - [`random`] -- Random selections for the "quick pick" mode

pub mod generator;
pub mod random;
pub mod registry;

pub use generator::{describe, describe_lang, generate, validate};
pub use registry::CombinationType;

use marksix_core::locale::{self, Language, Message};

/// Error type for combination generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmartError {
    /// Wrong count of distinct numbers, or a number outside 1..=49.
    #[error("please select exactly {required} different numbers between 1 and 49")]
    InvalidSelection { required: usize },

    /// No combination type is registered under this id.
    #[error("unknown combination type: {0}")]
    UnknownType(u8),

    /// The input count cannot be drawn from 1..=49 or cannot fill one bet.
    #[error("input count {input_count} must be between {min} and {max}")]
    InvalidInputCount {
        input_count: usize,
        min: usize,
        max: usize,
    },

    /// A pattern is not a set of distinct indices into the input.
    #[error("pattern {index} must hold distinct indices below {input_count}")]
    InvalidPattern { index: usize, input_count: usize },
}

impl SmartError {
    /// User-facing message in the given language.
    ///
    /// `InvalidInputCount` and `InvalidPattern` only arise from malformed
    /// custom types and are reported with their English `Display` text.
    pub fn localized(&self, lang: Language) -> String {
        match self {
            SmartError::InvalidSelection { required } => {
                locale::fill(locale::message(Message::InvalidSelection, lang), required)
            }
            SmartError::UnknownType(id) => {
                locale::fill(locale::message(Message::UnknownType, lang), id)
            }
            SmartError::InvalidInputCount { .. } | SmartError::InvalidPattern { .. } => {
                self.to_string()
            }
        }
    }
}
