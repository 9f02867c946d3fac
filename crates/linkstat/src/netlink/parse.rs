//! Bounds-checked cursor helpers for pulling wire records off a byte slice.
//!
//! A cursor is a `&mut &[u8]`: every successful read shrinks the slice, and
//! a read that would run past its end fails without consuming anything.

use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take;
use zerocopy::FromBytes;

/// Result type for cursor reads.
pub type PResult<T> = Result<T, ErrMode<ContextError>>;

/// Take exactly `count` bytes from the cursor.
pub fn bytes<'a>(input: &mut &'a [u8], count: usize) -> PResult<&'a [u8]> {
    let taken: PResult<&'a [u8]> = take(count).parse_next(input);
    taken
}

/// Read a fixed-size record of type `T` from the cursor.
///
/// The record is copied out, so the input needs no alignment.
pub fn record<T: FromBytes>(input: &mut &[u8]) -> PResult<T> {
    let raw = bytes(input, std::mem::size_of::<T>())?;
    T::read_from_bytes(raw).map_err(|_| ErrMode::Cut(ContextError::new()))
}
