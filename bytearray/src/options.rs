//! Construction options for [`ByteArray`](crate::ByteArray).

use serde::{Deserialize, Serialize};

use crate::Endian;

/// Options used to construct a [`ByteArray`](crate::ByteArray).
///
/// Missing fields fall back to their defaults when deserialized, so an
/// embedding application can keep buffer settings in its own config file.
///
/// ```
/// use flash_bytearray::{ByteArray, Endian, Options};
///
/// let opts = Options { endian: Endian::Little, capacity: 64 };
/// let ba = ByteArray::with_options(opts);
/// assert_eq!(ba.endian(), Endian::Little);
/// assert_eq!(ba.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Byte order for multi-byte numbers. Default: big-endian.
    pub endian: Endian,

    /// Bytes to preallocate. Default: 0.
    pub capacity: usize,
}
