//! Shared types for Mark Six smart combinations.
//!
//! - [`number`] -- Number range constants, combination formatting and input parsing
//! - [`locale`] -- Localized message table (Traditional Chinese, English)

pub mod locale;
pub mod number;

pub use locale::{Language, Message};
pub use number::{COMBINATION_SIZE, Combination, MAX_NUMBER, MIN_NUMBER, ParseNumbersError};
