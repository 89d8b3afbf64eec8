//! File and buffer boundary: read and write whole traces, or patch only the
//! header of an existing file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::binary::{self, HEADER_SIZE};
use crate::header::{SacHeader, const_slot};
use crate::trace::SacTrace;
use crate::types::ByteOrder;
use crate::{Result, SacError, ascii};

/// Float headers that describe the sample block.
const SAMPLE_FLOAT_SLOTS: [usize; 4] = [
    const_slot("depmin"),
    const_slot("depmax"),
    const_slot("depmen"),
    const_slot("e"),
];
const NPTS_SLOT: usize = const_slot("npts");

/// Options for [`read`] and [`read_bytes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Expected byte order; `None` detects it from the header version.
    pub byte_order: Option<ByteOrder>,
    /// Decode the header only; the trace has no samples.
    pub headonly: bool,
    /// Decode the alphanumeric layout.
    pub ascii: bool,
    /// Reject binary input longer than the header and `npts` samples.
    pub checksize: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }

    pub fn with_headonly(mut self, headonly: bool) -> Self {
        self.headonly = headonly;
        self
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    pub fn with_checksize(mut self, checksize: bool) -> Self {
        self.checksize = checksize;
        self
    }
}

/// Options for [`write`] and [`write_bytes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Output byte order; `None` uses the trace's own.
    pub byte_order: Option<ByteOrder>,
    /// Write the header only. For files, the header of an existing file is
    /// overwritten in place and its samples are left untouched, along with
    /// the headers describing them and the file's byte order.
    pub headonly: bool,
    /// Encode the alphanumeric layout.
    pub ascii: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }

    pub fn with_headonly(mut self, headonly: bool) -> Self {
        self.headonly = headonly;
        self
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }
}

fn open_error(path: &Path, e: io::Error) -> SacError {
    if e.kind() == io::ErrorKind::NotFound {
        SacError::FileNotFound(path.to_path_buf())
    } else {
        SacError::Io(e)
    }
}

/// Decode a trace from an in-memory buffer.
///
/// Headers are kept exactly as stored, so `npts`, `depmin`, `depmax` and
/// `depmen` hold their stored values whether or not samples are decoded.
pub fn read_bytes(data: &[u8], options: &ReadOptions) -> Result<SacTrace> {
    if options.ascii {
        let (header, samples) = ascii::decode(data, options.headonly)?;
        let byte_order = options.byte_order.unwrap_or_default();
        return Ok(SacTrace::from_arrays(header, samples, byte_order));
    }

    let (header, byte_order) = binary::decode_header(data, options.byte_order)?;
    if options.headonly {
        return Ok(SacTrace::from_arrays(header, None, byte_order));
    }

    let npts = header.sample_count()?;
    let expected = HEADER_SIZE + npts * 4;
    if data.len() < expected {
        return Err(SacError::DataTooShort {
            expected,
            actual: data.len(),
        });
    }
    if data.len() > expected {
        if options.checksize {
            return Err(SacError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        log::warn!(
            "{} trailing bytes after {npts} samples",
            data.len() - expected
        );
    }

    let samples = binary::decode_samples(&data[HEADER_SIZE..], npts, byte_order)?;
    Ok(SacTrace::from_arrays(header, Some(samples), byte_order))
}

/// Read a trace from a file.
///
/// A binary header-only read consumes just the header record.
pub fn read(path: impl AsRef<Path>, options: &ReadOptions) -> Result<SacTrace> {
    let path = path.as_ref();
    let data = if options.headonly && !options.ascii {
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        file.take(HEADER_SIZE as u64).read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(path).map_err(|e| open_error(path, e))?
    };
    log::debug!("read {} bytes from {}", data.len(), path.display());
    read_bytes(&data, options)
}

/// Encode a trace into a buffer.
///
/// Distances are recomputed first when `lcalda` is set, which is why the
/// trace is borrowed mutably. A trace without samples encodes to the header
/// alone, unless its `npts` promises samples: a full write of a trace read
/// with `headonly` fails with [`SacError::MissingSamples`].
pub fn write_bytes(trace: &mut SacTrace, options: &WriteOptions) -> Result<Vec<u8>> {
    if options.ascii && options.headonly {
        return Err(SacError::HeadonlyAscii);
    }
    if !options.headonly && trace.data().is_none() {
        if let Some(npts) = trace.npts().filter(|&n| n != 0) {
            return Err(SacError::MissingSamples(npts));
        }
    }
    trace.set_distances(false)?;

    let samples = if options.headonly { None } else { trace.data() };
    if options.ascii {
        return Ok(ascii::encode(trace.header(), samples));
    }

    let byte_order = options.byte_order.unwrap_or(trace.byte_order());
    let mut out = binary::encode_header(trace.header(), byte_order);
    if let Some(samples) = samples {
        out.extend_from_slice(&binary::encode_samples(samples, byte_order));
    }
    Ok(out)
}

/// Write a trace to a file.
///
/// With `headonly`, the file must already exist; only its first
/// [`HEADER_SIZE`] bytes are replaced, in a single write at offset 0,
/// and the file is never truncated. The stored header decides the byte
/// order and keeps its `npts`, `depmin`, `depmax`, `depmen` and `e`, so
/// the patched header still describes the samples on disk. An explicit
/// [`WriteOptions::byte_order`] that the file does not use is rejected.
pub fn write(trace: &mut SacTrace, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    if options.headonly && !options.ascii {
        return patch_header(trace, path, options.byte_order);
    }

    let bytes = write_bytes(trace, options)?;
    fs::write(path, &bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn patch_header(trace: &mut SacTrace, path: &Path, byte_order: Option<ByteOrder>) -> Result<()> {
    trace.set_distances(false)?;

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| open_error(path, e))?;
    let mut stored = Vec::with_capacity(HEADER_SIZE);
    (&file).take(HEADER_SIZE as u64).read_to_end(&mut stored)?;
    let (on_disk, byte_order) = binary::decode_header(&stored, byte_order)?;

    let header = keep_sample_headers(trace.header(), &on_disk);
    if header != *trace.header() {
        log::debug!(
            "keeping sample headers of {} (npts {})",
            path.display(),
            on_disk.ints[NPTS_SLOT]
        );
    }

    file.seek(SeekFrom::Start(0))?;
    file.write_all(&binary::encode_header(&header, byte_order))?;
    file.flush()?;
    log::debug!("patched header of {}", path.display());
    Ok(())
}

/// `header` with the sample-describing headers taken from `on_disk`.
fn keep_sample_headers(header: &SacHeader, on_disk: &SacHeader) -> SacHeader {
    let mut out = header.clone();
    out.ints[NPTS_SLOT] = on_disk.ints[NPTS_SLOT];
    for slot in SAMPLE_FLOAT_SLOTS {
        out.floats[slot] = on_disk.floats[slot];
    }
    out
}

impl SacTrace {
    /// Read a trace from a file; see [`read`].
    pub fn read(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self> {
        read(path, options)
    }

    /// Decode a trace from a buffer; see [`read_bytes`].
    pub fn from_bytes(data: &[u8], options: &ReadOptions) -> Result<Self> {
        read_bytes(data, options)
    }

    /// Write this trace to a file; see [`write`].
    pub fn write(&mut self, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
        write(self, path, options)
    }

    /// Encode this trace into a buffer; see [`write_bytes`].
    pub fn to_bytes(&mut self, options: &WriteOptions) -> Result<Vec<u8>> {
        write_bytes(self, options)
    }
}
