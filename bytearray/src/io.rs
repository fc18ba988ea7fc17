//! `std::io` adapters for [`ByteArray`].
//!
//! These let a `ByteArray` sit behind any API that takes a reader, writer
//! or seekable stream. They follow the same cursor rules as the native
//! methods: writes grow the content, reads stop at the length.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::ByteArray;

impl Write for ByteArray {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for ByteArray {
    /// Reads up to `buf.len()` bytes; returns `Ok(0)` once nothing is available.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.bytes_available());
        if n == 0 {
            return Ok(0);
        }
        let start = self.position();
        buf[..n].copy_from_slice(&self.as_slice()[start..start + n]);
        self.set_position(start + n);
        Ok(n)
    }
}

impl Seek for ByteArray {
    /// Moves the cursor. Seeking past the end is allowed, as with
    /// [`ByteArray::set_position`]; seeking before 0 is an error.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, delta) = match pos {
            SeekFrom::Start(n) => {
                let n = usize::try_from(n)
                    .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek out of range"))?;
                self.set_position(n);
                return Ok(n as u64);
            }
            SeekFrom::End(d) => (self.length(), d),
            SeekFrom::Current(d) => (self.position(), d),
        };

        let target = isize::try_from(delta)
            .ok()
            .and_then(|delta| base.checked_add_signed(delta))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "invalid seek to a negative or overflowing position",
                )
            })?;
        self.set_position(target);
        Ok(target as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_write_then_read() {
        let mut ba = ByteArray::new();
        ba.write_all(b"hello world").unwrap();
        ba.flush().unwrap();
        assert_eq!(ba.length(), 11);

        ba.set_position(0);
        let mut out = String::new();
        ba.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello world");
        assert_eq!(ba.bytes_available(), 0);
    }

    #[test]
    fn test_io_read_partial() {
        let mut ba = ByteArray::from_bytes(&[1, 2, 3]);
        let mut buf = [0u8; 2];
        assert_eq!(ba.read(&mut buf).unwrap(), 2);
        assert_eq!(buf, [1, 2]);
        assert_eq!(ba.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], 3);
        assert_eq!(ba.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_io_read_exact_eof() {
        let mut ba = ByteArray::from_bytes(&[1, 2, 3]);
        let mut buf = [0u8; 4];
        let err = ba.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_io_seek() {
        let mut ba = ByteArray::from_bytes(&[0, 1, 2, 3, 4]);

        assert_eq!(ba.seek(SeekFrom::End(-2)).unwrap(), 3);
        assert_eq!(ba.read_unsigned_byte().unwrap(), 3);

        assert_eq!(ba.seek(SeekFrom::Current(-3)).unwrap(), 1);
        assert_eq!(ba.read_unsigned_byte().unwrap(), 1);

        assert_eq!(ba.seek(SeekFrom::Start(0)).unwrap(), 0);
        assert_eq!(ba.position(), 0);

        // Past the end is allowed
        assert_eq!(ba.seek(SeekFrom::End(3)).unwrap(), 8);
        assert_eq!(ba.bytes_available(), 0);

        let err = ba.seek(SeekFrom::Current(-100)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(ba.position(), 8);
    }

    #[test]
    fn test_io_seek_extreme_offsets() {
        let mut ba = ByteArray::from_bytes(&[0, 1, 2, 3]);
        ba.set_position(2);

        for delta in [i64::MIN, i64::MIN + 1, -3] {
            let err = ba.seek(SeekFrom::Current(delta)).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
            assert_eq!(ba.position(), 2);
        }

        let err = ba.seek(SeekFrom::End(i64::MIN)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(ba.position(), 2);
    }

    #[test]
    fn test_io_read_from_middle() {
        let mut ba = ByteArray::from_bytes(&[1, 2, 3, 4, 5]);
        ba.set_position(1);
        let mut buf = [0u8; 8];
        assert_eq!(ba.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf[..4], &[2, 3, 4, 5]);
        assert_eq!(ba.position(), 5);
        assert_eq!(ba.length(), 5);

        ba.set_position(9);
        assert_eq!(ba.read(&mut buf).unwrap(), 0);
        assert_eq!(ba.position(), 9);
    }
}
