//! # Primitive Codec
//!
//! The byte-level alphabet of every `.ocb` entry. All values are big-endian:
//!
//! | Type    | Encoding                                                    |
//! |---------|-------------------------------------------------------------|
//! | int32   | 4 bytes, big-endian                                         |
//! | int64   | 8 bytes, big-endian (dates: milliseconds since the epoch)   |
//! | float32 | 4 bytes, IEEE 754, big-endian                               |
//! | float64 | 8 bytes, IEEE 754, big-endian                               |
//! | boolean | 1 byte, 0 or 1                                              |
//! | string  | int32 count of UTF-16 code units, then the units big-endian |
//!
//! The stream carries no type tags. Every reader must know the exact field
//! order of the version it decodes.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use chrono::{DateTime, Utc};

use crate::model::ModelError;
use crate::reader::ReaderError;

#[cfg(test)]
mod tests;

/// Encoding side of the primitive codec
pub trait WriteFormatExt: Write {
    /// Write an int32
    fn write_int(&mut self, value: i32) -> io::Result<()> {
        self.write_i32::<BigEndian>(value)
    }

    /// Write an int64
    fn write_long(&mut self, value: i64) -> io::Result<()> {
        self.write_i64::<BigEndian>(value)
    }

    /// Write a float32
    fn write_float(&mut self, value: f32) -> io::Result<()> {
        self.write_f32::<BigEndian>(value)
    }

    /// Write a float64
    fn write_double(&mut self, value: f64) -> io::Result<()> {
        self.write_f64::<BigEndian>(value)
    }

    /// Write a boolean as a single 0/1 byte
    fn write_boolean(&mut self, value: bool) -> io::Result<()> {
        self.write_u8(u8::from(value))
    }

    /// Write a date as milliseconds since the Unix epoch
    fn write_date(&mut self, value: &DateTime<Utc>) -> io::Result<()> {
        self.write_long(value.timestamp_millis())
    }

    /// Write an element count
    fn write_count(&mut self, count: usize) -> io::Result<()> {
        let count = i32::try_from(count).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("count {count} does not fit into an int32"),
            )
        })?;
        WriteFormatExt::write_int(self, count)
    }

    /// Write a length-prefixed UTF-16 string
    fn write_string(&mut self, value: &str) -> io::Result<()> {
        let units: Vec<u16> = value.encode_utf16().collect();
        self.write_count(units.len())?;
        for unit in units {
            self.write_u16::<BigEndian>(unit)?;
        }
        Ok(())
    }

    /// Write a count followed by every item
    fn write_list<T, F>(&mut self, items: &[T], mut write_item: F) -> io::Result<()>
    where
        Self: Sized,
        F: FnMut(&mut Self, &T) -> io::Result<()>,
    {
        self.write_count(items.len())?;
        for item in items {
            write_item(self, item)?;
        }
        Ok(())
    }
}

impl<W: Write + ?Sized> WriteFormatExt for W {}

/// Decoding side of the primitive codec
///
/// Truncated fields surface as [`ReaderError::MalformedStream`].
pub trait ReadFormatExt: Read {
    /// Read an int32
    fn read_int(&mut self) -> Result<i32, ReaderError> {
        self.read_i32::<BigEndian>().map_err(ReaderError::from_stream)
    }

    /// Read an int64
    fn read_long(&mut self) -> Result<i64, ReaderError> {
        self.read_i64::<BigEndian>().map_err(ReaderError::from_stream)
    }

    /// Read a float32
    fn read_float(&mut self) -> Result<f32, ReaderError> {
        self.read_f32::<BigEndian>().map_err(ReaderError::from_stream)
    }

    /// Read a float64
    fn read_double(&mut self) -> Result<f64, ReaderError> {
        self.read_f64::<BigEndian>().map_err(ReaderError::from_stream)
    }

    /// Read a boolean; any non-zero byte is true
    fn read_boolean(&mut self) -> Result<bool, ReaderError> {
        Ok(self.read_u8().map_err(ReaderError::from_stream)? != 0)
    }

    /// Read an epoch-milliseconds timestamp
    ///
    /// Only a truncated field fails the outer result. A timestamp outside the
    /// representable range is returned as the inner error, so the caller can
    /// decide whether the record carrying it is skipped.
    fn read_date(&mut self) -> Result<Result<DateTime<Utc>, ModelError>, ReaderError> {
        let millis = self.read_long()?;
        Ok(DateTime::from_timestamp_millis(millis).ok_or(ModelError::InvalidTimestamp(millis)))
    }

    /// Read an element count; negative counts break the framing
    fn read_count(&mut self) -> Result<usize, ReaderError> {
        let count = ReadFormatExt::read_int(self)?;
        usize::try_from(count)
            .map_err(|_| ReaderError::MalformedStream(format!("negative count {count}")))
    }

    /// Read a length-prefixed UTF-16 string
    ///
    /// Unpaired surrogates are replaced rather than rejected so that the
    /// stream stays positioned at the next field.
    fn read_string(&mut self) -> Result<String, ReaderError>
    where
        Self: Sized,
    {
        let length = self.read_count()?;
        let byte_length = (length as u64) * 2;
        let mut bytes = Vec::new();
        self.by_ref()
            .take(byte_length)
            .read_to_end(&mut bytes)
            .map_err(ReaderError::from_stream)?;
        if (bytes.len() as u64) < byte_length {
            return Err(ReaderError::MalformedStream(format!(
                "string of {length} code units truncated after {} bytes",
                bytes.len()
            )));
        }

        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        match String::from_utf16(&units) {
            Ok(value) => Ok(value),
            Err(_) => {
                log::warn!("String of {length} code units contains unpaired surrogates");
                Ok(String::from_utf16_lossy(&units))
            }
        }
    }

    /// Read a count followed by that many items
    fn read_list<T, F>(&mut self, mut read_item: F) -> Result<Vec<T>, ReaderError>
    where
        Self: Sized,
        F: FnMut(&mut Self) -> Result<T, ReaderError>,
    {
        let count = self.read_count()?;
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOCATION));
        for _ in 0..count {
            items.push(read_item(self)?);
        }
        Ok(items)
    }
}

impl<R: Read + ?Sized> ReadFormatExt for R {}

/// Upper bound for capacity reserved from an untrusted count
pub(crate) const MAX_PREALLOCATION: usize = 4096;
