//! String helpers shared by hosts of the frame loop
//!
//! Everything here is a pure function over its inputs. Formatting goes through
//! a bounded buffer: output that would not fit in [`FORMAT_BUFFER_LEN`] bytes is
//! cut to [`FORMAT_MAX_LEN`] bytes on a char boundary. Truncation is part of
//! the contract, not an error.

use crate::error::{Result, TickworkError};
use std::fmt::{self, Write};

/// Capacity of the formatting buffer in bytes, terminator included
pub const FORMAT_BUFFER_LEN: usize = 255;

/// Longest text `formatted` can return, in bytes
pub const FORMAT_MAX_LEN: usize = FORMAT_BUFFER_LEN - 2;

/// Append `ch` unless the string already ends with it.
///
/// Calling this twice has the same effect as calling it once.
pub fn append_trailing_char(s: &mut String, ch: char) {
    if !s.ends_with(ch) {
        s.push(ch);
    }
}

/// Replace every non-overlapping occurrence of `old` with `new`.
///
/// Matches are found left to right and the scan resumes after the inserted
/// text, so a replacement that itself contains `old` is never rescanned.
/// An empty `old` has no meaningful match position and is rejected.
pub fn replace_all(s: &str, old: &str, new: &str) -> Result<String> {
    if old.is_empty() {
        return Err(TickworkError::InvalidArgument(
            "replace_all: search substring must not be empty".into(),
        ));
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find(old) {
        result.push_str(&rest[..pos]);
        result.push_str(new);
        rest = &rest[pos + old.len()..];
    }
    result.push_str(rest);

    Ok(result)
}

/// Prepend `pad` until `s` is at least `len` characters long. Never truncates.
pub fn pad_left(s: &mut String, len: usize, pad: char) {
    let current = s.chars().count();
    if current >= len {
        return;
    }

    let mut padded = String::with_capacity(s.len() + (len - current) * pad.len_utf8());
    padded.extend(std::iter::repeat(pad).take(len - current));
    padded.push_str(s);
    *s = padded;
}

/// Copying variant of [`pad_left`]
pub fn padded_left(s: &str, len: usize, pad: char) -> String {
    let mut out = s.to_string();
    pad_left(&mut out, len, pad);
    out
}

/// Format into the bounded buffer, truncating silently.
///
/// Panics if a `Display` implementation in `args` returns an error, as
/// `format!` does. Prefer the [`formatted!`](crate::formatted) macro at call sites.
pub fn formatted(args: fmt::Arguments<'_>) -> String {
    bounded_format(args).text
}

/// Format into the bounded buffer, reporting truncation.
///
/// On overflow the error is [`TickworkError::FormatTruncated`], which still
/// carries the truncated text. Panics on a failing `Display` like [`formatted`].
pub fn try_formatted(args: fmt::Arguments<'_>) -> Result<String> {
    let out = bounded_format(args);
    if out.len > out.text.len() {
        Err(TickworkError::FormatTruncated {
            text: out.text,
            len: out.len,
        })
    } else {
        Ok(out.text)
    }
}

/// Decimal representation of a signed integer
pub fn int_to_string(i: i64) -> String {
    formatted(format_args!("{i}"))
}

/// Writer that keeps at most `FORMAT_MAX_LEN` bytes and counts the rest
struct BoundedWriter {
    text: String,
    /// Bytes the full output would have taken
    len: usize,
    full: bool,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        if self.full {
            return Ok(());
        }

        let room = FORMAT_MAX_LEN - self.text.len();
        if s.len() <= room {
            self.text.push_str(s);
            return Ok(());
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.text.push_str(&s[..cut]);
        self.full = true;
        Ok(())
    }
}

fn bounded_format(args: fmt::Arguments<'_>) -> BoundedWriter {
    let mut writer = BoundedWriter {
        text: String::new(),
        len: 0,
        full: false,
    };
    // BoundedWriter itself never fails
    writer
        .write_fmt(args)
        .expect("a Display implementation returned an error");
    writer
}

/// Bounded, type-safe formatting. Same arguments as `format!`.
///
/// ```
/// let s = tickwork_core::formatted!("{}-{:03}", "frame", 7);
/// assert_eq!(s, "frame-007");
/// ```
#[macro_export]
macro_rules! formatted {
    ($($arg:tt)*) => {
        $crate::strings::formatted(::std::format_args!($($arg)*))
    };
}
