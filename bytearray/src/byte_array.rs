//! Growable byte array with a read/write cursor.

use std::fmt;

use tracing::{trace, warn};

use crate::error::{ByteArrayError, Result};
use crate::{Endian, Options};

/// A growable binary buffer with cursor-based reads and writes.
///
/// `ByteArray` tracks three extents over one owned allocation:
///
/// - **position**: the read/write cursor, advanced by every read and write
/// - **length**: how much of the allocation holds meaningful content
/// - **capacity**: the size of the allocation, grown by doubling
///
/// After any operation that changes the length, `position <= length <= capacity`.
/// [`set_position`](Self::set_position) is the one unchecked setter: the cursor
/// may be placed past the end, after which reads fail with
/// [`ByteArrayError::Eof`] and writes extend the content to cover it.
///
/// # Semantics
///
/// - **Read**: fails with `Eof` when too few bytes remain; never moves the cursor on failure
/// - **Write**: never fails, grows the allocation as needed and extends the length
/// - **Endian**: applies to 2, 4 and 8 byte numbers only
///
/// # Thread Safety
///
/// There is no internal locking. Sharing a `ByteArray` across threads requires
/// the caller to wrap it (e.g. in a `Mutex`).
///
/// # Example
///
/// ```
/// use flash_bytearray::ByteArray;
///
/// let mut ba = ByteArray::new();
/// ba.write_int(-42);
/// ba.write_utf("hello").unwrap();
/// ba.set_position(0);
///
/// assert_eq!(ba.read_int().unwrap(), -42);
/// assert_eq!(ba.read_utf().unwrap(), "hello");
/// assert_eq!(ba.bytes_available(), 0);
/// ```
#[derive(Clone, Default)]
pub struct ByteArray {
    // raw.len() is the capacity; only raw[..length] is meaningful.
    raw: Vec<u8>,
    length: usize,
    position: usize,
    endian: Endian,
}

impl ByteArray {
    /// Creates an empty byte array: capacity 0, big-endian.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty byte array with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteArray {
            raw: vec![0; capacity],
            ..Self::default()
        }
    }

    /// Creates an empty byte array from [`Options`].
    pub fn with_options(opts: Options) -> Self {
        let mut ba = Self::with_capacity(opts.capacity);
        ba.endian = opts.endian;
        ba
    }

    /// Creates a byte array holding a copy of `bytes`, positioned at 0.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }

    // ------------------------------------------------------------------
    // Extents
    // ------------------------------------------------------------------

    /// Returns the byte order used for multi-byte numbers.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Sets the byte order used for multi-byte numbers.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Returns the length of the meaningful content.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns true if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Sets the length of the content.
    ///
    /// Growing keeps every byte below the old length and may reallocate;
    /// the newly exposed bytes hold no particular value. Shrinking never
    /// releases memory. The position is clamped to the new length.
    pub fn set_length(&mut self, length: usize) {
        if self.length == length {
            return;
        }
        if length > self.length {
            self.ensure_capacity(length);
        }
        self.length = length;
        if self.position > self.length {
            self.position = self.length;
        }
    }

    /// Returns the read/write cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the read/write cursor.
    ///
    /// The value is not checked against the length.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns the size of the underlying allocation.
    pub fn capacity(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of bytes between the position and the length.
    pub fn bytes_available(&self) -> usize {
        self.length.saturating_sub(self.position)
    }

    /// Resets position and length to 0, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.position = 0;
        self.length = 0;
    }

    /// Returns the meaningful content, `[0, length)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.raw[..self.length]
    }

    /// Returns a copy of the meaningful content.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Consumes the byte array and returns its meaningful content.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.raw.truncate(self.length);
        self.raw
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Reads one byte; zero is `false`, anything else is `true`.
    pub fn read_boolean(&mut self) -> Result<bool> {
        let [b] = self.read_array::<1>()?;
        Ok(b != 0)
    }

    /// Reads a signed byte.
    pub fn read_byte(&mut self) -> Result<i8> {
        let [b] = self.read_array::<1>()?;
        Ok(b as i8)
    }

    /// Reads an unsigned byte.
    pub fn read_unsigned_byte(&mut self) -> Result<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Reads a signed 16-bit integer.
    pub fn read_short(&mut self) -> Result<i16> {
        let b = self.read_array()?;
        Ok(match self.endian {
            Endian::Big => i16::from_be_bytes(b),
            Endian::Little => i16::from_le_bytes(b),
        })
    }

    /// Reads an unsigned 16-bit integer.
    pub fn read_unsigned_short(&mut self) -> Result<u16> {
        let b = self.read_array()?;
        Ok(match self.endian {
            Endian::Big => u16::from_be_bytes(b),
            Endian::Little => u16::from_le_bytes(b),
        })
    }

    /// Reads a signed 32-bit integer.
    pub fn read_int(&mut self) -> Result<i32> {
        let b = self.read_array()?;
        Ok(match self.endian {
            Endian::Big => i32::from_be_bytes(b),
            Endian::Little => i32::from_le_bytes(b),
        })
    }

    /// Reads an unsigned 32-bit integer.
    pub fn read_unsigned_int(&mut self) -> Result<u32> {
        let b = self.read_array()?;
        Ok(match self.endian {
            Endian::Big => u32::from_be_bytes(b),
            Endian::Little => u32::from_le_bytes(b),
        })
    }

    /// Reads an IEEE-754 single precision float.
    pub fn read_float(&mut self) -> Result<f32> {
        let b = self.read_array()?;
        Ok(match self.endian {
            Endian::Big => f32::from_be_bytes(b),
            Endian::Little => f32::from_le_bytes(b),
        })
    }

    /// Reads an IEEE-754 double precision float.
    pub fn read_double(&mut self) -> Result<f64> {
        let b = self.read_array()?;
        Ok(match self.endian {
            Endian::Big => f64::from_be_bytes(b),
            Endian::Little => f64::from_le_bytes(b),
        })
    }

    /// Reads a UTF-8 string prefixed by its byte length as an unsigned short.
    ///
    /// If the string body is incomplete the cursor is restored to where the
    /// prefix started, so the call can be retried once more data arrives.
    pub fn read_utf(&mut self) -> Result<String> {
        let start = self.position;
        let len = self.read_unsigned_short()?;
        self.read_utf_bytes(len as usize).inspect_err(|_| {
            self.position = start;
        })
    }

    /// Reads `length` bytes and decodes them as UTF-8.
    ///
    /// Invalid sequences are replaced with U+FFFD.
    pub fn read_utf_bytes(&mut self, length: usize) -> Result<String> {
        self.check_available(length)?;
        if length == 0 {
            return Ok(String::new());
        }

        let bytes = &self.raw[self.position..self.position + length];
        let s = match std::str::from_utf8(bytes) {
            Ok(s) => s.to_owned(),
            Err(e) => {
                warn!(
                    position = self.position,
                    valid_up_to = e.valid_up_to(),
                    "bytearray: invalid UTF-8, substituting replacement characters"
                );
                String::from_utf8_lossy(bytes).into_owned()
            }
        };
        self.position += length;
        Ok(s)
    }

    /// Reads `length` raw bytes.
    pub fn read_slice(&mut self, length: usize) -> Result<Vec<u8>> {
        self.check_available(length)?;
        if length == 0 {
            return Ok(Vec::new());
        }
        let out = self.raw[self.position..self.position + length].to_vec();
        self.position += length;
        Ok(out)
    }

    /// Copies bytes from this array's cursor into `dst` starting at `offset`.
    ///
    /// A `length` of 0 copies everything that is available; if nothing is
    /// available the call does nothing. `dst` grows to fit and its length is
    /// extended when the copy ends past it; its position is left alone.
    ///
    /// Fails with `Eof` when fewer than `length` bytes are available and with
    /// `Range` when `offset + length` does not fit in a `u32`.
    pub fn read_bytes(&mut self, dst: &mut ByteArray, offset: usize, length: usize) -> Result<()> {
        let length = if length == 0 {
            let available = self.bytes_available();
            if available == 0 {
                return Ok(());
            }
            available
        } else {
            self.check_available(length)?;
            length
        };

        let end = offset
            .checked_add(length)
            .filter(|&end| end <= u32::MAX as usize)
            .ok_or(ByteArrayError::Range)?;

        dst.ensure_capacity(end);
        dst.raw[offset..end].copy_from_slice(&self.raw[self.position..self.position + length]);
        if end > dst.length {
            dst.length = end;
        }

        self.position += length;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Writes a boolean as a single 0 or 1 byte.
    pub fn write_boolean(&mut self, value: bool) {
        self.write_slice(&[u8::from(value)]);
    }

    /// Writes a signed byte.
    pub fn write_byte(&mut self, value: i8) {
        self.write_slice(&[value as u8]);
    }

    /// Writes an unsigned byte.
    pub fn write_unsigned_byte(&mut self, value: u8) {
        self.write_slice(&[value]);
    }

    /// Writes a signed 16-bit integer.
    pub fn write_short(&mut self, value: i16) {
        let b = match self.endian {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        };
        self.write_slice(&b);
    }

    /// Writes an unsigned 16-bit integer.
    pub fn write_unsigned_short(&mut self, value: u16) {
        let b = match self.endian {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        };
        self.write_slice(&b);
    }

    /// Writes a signed 32-bit integer.
    pub fn write_int(&mut self, value: i32) {
        let b = match self.endian {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        };
        self.write_slice(&b);
    }

    /// Writes an unsigned 32-bit integer.
    pub fn write_unsigned_int(&mut self, value: u32) {
        let b = match self.endian {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        };
        self.write_slice(&b);
    }

    /// Writes an IEEE-754 single precision float.
    pub fn write_float(&mut self, value: f32) {
        let b = match self.endian {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        };
        self.write_slice(&b);
    }

    /// Writes an IEEE-754 double precision float.
    pub fn write_double(&mut self, value: f64) {
        let b = match self.endian {
            Endian::Big => value.to_be_bytes(),
            Endian::Little => value.to_le_bytes(),
        };
        self.write_slice(&b);
    }

    /// Writes a UTF-8 string prefixed by its byte length as an unsigned short.
    ///
    /// Fails with `Range`, writing nothing, if the encoded string is longer
    /// than `u16::MAX` bytes.
    pub fn write_utf(&mut self, value: &str) -> Result<()> {
        let len = u16::try_from(value.len()).map_err(|_| ByteArrayError::Range)?;
        self.write_unsigned_short(len);
        self.write_slice(value.as_bytes());
        Ok(())
    }

    /// Writes a UTF-8 string without a length prefix.
    pub fn write_utf_bytes(&mut self, value: &str) {
        self.write_slice(value.as_bytes());
    }

    /// Copies `src[offset..offset + length]` to this array's cursor.
    ///
    /// An `offset` past the end of `src` is treated as 0. A `length` of 0, or
    /// one that runs past the end of `src`, copies through to the end of `src`.
    pub fn write_bytes(&mut self, src: &ByteArray, offset: usize, length: usize) {
        let offset = if offset > src.length { 0 } else { offset };
        let length = if length == 0 || offset.saturating_add(length) > src.length {
            src.length - offset
        } else {
            length
        };
        self.write_slice(&src.raw[offset..offset + length]);
    }

    /// Writes raw bytes at the cursor.
    pub fn write_slice(&mut self, bytes: &[u8]) {
        // Saturates so an absurd cursor surfaces as an allocation failure.
        let end = self.position.saturating_add(bytes.len());
        self.ensure_capacity(end);
        self.raw[self.position..end].copy_from_slice(bytes);
        self.position = end;
        if self.length < end {
            self.length = end;
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn check_available(&self, width: usize) -> Result<()> {
        if self.bytes_available() < width {
            return Err(ByteArrayError::Eof);
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check_available(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.raw[self.position..self.position + N]);
        self.position += N;
        Ok(out)
    }

    /// Grows the allocation to hold at least `want` bytes.
    ///
    /// An empty allocation grows to exactly `want`; otherwise the capacity
    /// doubles until it fits. Only `[0, length)` is carried over.
    fn ensure_capacity(&mut self, want: usize) {
        let old = self.raw.len();
        if want <= old {
            return;
        }

        let mut cap = if old == 0 { want } else { old };
        while cap < want {
            cap = cap.saturating_mul(2);
        }

        let mut raw = vec![0u8; cap];
        raw[..self.length].copy_from_slice(&self.raw[..self.length]);
        trace!(
            old_capacity = old,
            new_capacity = cap,
            copied = self.length,
            "bytearray: grow"
        );
        self.raw = raw;
    }
}

impl fmt::Debug for ByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteArray")
            .field("position", &self.position)
            .field("length", &self.length)
            .field("capacity", &self.raw.len())
            .field("endian", &self.endian)
            .finish()
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(raw: Vec<u8>) -> Self {
        ByteArray {
            length: raw.len(),
            raw,
            ..Self::default()
        }
    }
}

impl From<&[u8]> for ByteArray {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<ByteArray> for Vec<u8> {
    fn from(ba: ByteArray) -> Self {
        ba.into_vec()
    }
}

impl AsRef<[u8]> for ByteArray {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
