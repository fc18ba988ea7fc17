//! Growable binary buffer with cursor-based reads and writes.
//!
//! [`ByteArray`] is a sequential byte store for hand-rolled binary formats.
//! It reads and writes booleans, 8/16/32-bit integers, IEEE-754 floats and
//! doubles, raw or length-prefixed UTF-8 text, and byte ranges copied between
//! two arrays.
//!
//! # Extents
//!
//! - **position**: the cursor; every read or write of `n` bytes advances it by `n`
//! - **length**: how much of the storage is meaningful content
//! - **capacity**: the allocated size, grown by doubling and never shrunk
//!
//! Reads fail with [`ByteArrayError::Eof`] when fewer bytes than needed remain
//! between position and length. Writes always succeed and grow the content.
//!
//! ```
//! use flash_bytearray::{ByteArray, ByteArrayError, Endian};
//!
//! let mut ba = ByteArray::new();
//! ba.set_endian(Endian::Little);
//! ba.write_unsigned_int(0x01020304);
//! assert_eq!(ba.as_slice(), &[0x04, 0x03, 0x02, 0x01]);
//!
//! ba.set_position(0);
//! assert_eq!(ba.read_unsigned_int(), Ok(0x01020304));
//! assert_eq!(ba.read_byte(), Err(ByteArrayError::Eof));
//! ```
//!
//! # Byte Order
//!
//! [`Endian`] selects big-endian (the default) or little-endian encoding for
//! 2, 4 and 8 byte numbers. Single bytes and UTF-8 text are unaffected.
//!
//! # Text
//!
//! [`ByteArray::write_utf`] frames a string with an unsigned 16-bit byte
//! length. Invalid UTF-8 met while reading is replaced with U+FFFD and a
//! warning is logged through `tracing`.
//!
//! # Thread Safety
//!
//! `ByteArray` is a plain owned value with no locking. Wrap it in a `Mutex`
//! to share it between threads.

mod byte_array;
mod endian;
mod error;
mod io;
mod options;

pub use byte_array::ByteArray;
pub use endian::{Endian, ParseEndianError};
pub use error::{ByteArrayError, Result};
pub use options::Options;
