//! tickwork Core - Foundational pieces shared by the tickwork crates
//!
//! This crate provides what every other tickwork crate depends on:
//! - `TickworkError` - Error type and Result alias
//! - `strings` - Stateless string helpers with a bounded formatting contract

mod error;
pub mod strings;

pub use error::{Result, TickworkError};
pub use strings::{
    append_trailing_char, formatted, int_to_string, pad_left, padded_left, replace_all,
    try_formatted, FORMAT_BUFFER_LEN, FORMAT_MAX_LEN,
};
