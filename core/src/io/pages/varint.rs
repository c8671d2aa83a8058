//! LEB128 variable-length integers.

use bytes::{Buf, BufMut};
use std::convert::TryFrom;

use super::{PagesError, PagesResult};

/// Appends `value` to `buf` as an unsigned LEB128 varint.
pub fn put_varint(buf: &mut impl BufMut, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Reads an unsigned LEB128 varint from `buf`.
pub fn get_varint(buf: &mut impl Buf) -> PagesResult<u64> {
    let mut ret = 0_u64;
    let mut shift = 0;
    loop {
        if !buf.has_remaining() {
            return Err(PagesError::Truncated);
        }
        let byte = buf.get_u8();
        let bits = u64::from(byte & 0x7F);
        if (shift == 63 && bits > 1) || shift > 63 {
            return Err(PagesError::VarintOverflow);
        }
        ret |= bits << shift;
        if byte & 0x80 == 0 {
            return Ok(ret);
        }
        shift += 7;
    }
}

/// Reads a varint that must fit in a `usize`.
pub fn get_varint_usize(buf: &mut impl Buf) -> PagesResult<usize> {
    let value = get_varint(buf)?;
    usize::try_from(value).map_err(|_| PagesError::ValueTooLarge(value))
}
