//! Canonical departments a student request passes through.

mod types;

pub use types::{Department, CANONICAL_DEPARTMENTS};
