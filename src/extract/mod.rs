//! Heuristic extraction pipeline
//!
//! Everything in this module works on raw file text with regular expressions;
//! there is no real parser. The pattern grammars are:
//!
//! - read-set literals: `var readSet = []common.HString{ ... }`
//! - grouped constants: `const ( name = "value" ... )`
//! - type-label override: a `processAndActivityName` constant inside the
//!   same grouped block, for files under `scoring` or `operation`
//!
//! The heuristics have known blind spots (braces or quotes inside strings,
//! block comments between fields). They are kept as-is so the emitted
//! artifacts stay compatible with existing consumers.

pub mod constants;
pub mod paths;
pub mod readsets;
pub mod reconcile;

pub use constants::ConstantExtractor;
pub use readsets::ReadSetExtractor;
