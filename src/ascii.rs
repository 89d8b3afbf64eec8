//! Alphanumeric SAC layout.
//!
//! The same header arrays as the binary layout, written as text:
//!
//! - 14 lines of 5 floats, each right-aligned in 15 columns
//! - 8 lines of 5 integers, each right-aligned in 10 columns
//! - 8 lines of 3 string slots, each 8 columns wide
//! - the samples, 5 floats per line in 15 columns
//!
//! Numeric lines are read as whitespace-separated tokens, so files written
//! with other column widths still decode. String lines are read by column.

use crate::header::{
    NUM_FLOATS, NUM_INTS, NUM_STRING_SLOTS, STRING_SLOT_WIDTH, SacHeader, const_slot,
};
use crate::{Result, SacError};

const FLOAT_LINES: usize = NUM_FLOATS / 5;
const INT_LINES: usize = NUM_INTS / 5;
const SLOTS_PER_LINE: usize = 3;
const STRING_LINES: usize = NUM_STRING_SLOTS / SLOTS_PER_LINE;
const STRING_LINE_WIDTH: usize = SLOTS_PER_LINE * STRING_SLOT_WIDTH;
const NPTS_SLOT: usize = const_slot("npts");

/// Format a float like C's `%#15.7g`, right-aligned in 15 columns.
pub fn format_float(value: f32) -> String {
    format!("{:>15}", format_g(value as f64, 7))
}

/// C-style `%#.<precision>g`: `precision` significant digits, trailing
/// zeros kept, scientific notation outside `1e-4 <= |v| < 10^precision`.
pub fn format_g(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    // Rust writes `1.234560e4`; the exponent reflects rounding already.
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{value:.decimals$}");
        if decimals == 0 { format!("{fixed}.") } else { fixed }
    }
}

fn malformed(msg: impl Into<String>) -> SacError {
    SacError::MalformedAscii(msg.into())
}

fn line_str<'a>(line: &'a [u8], what: &str) -> Result<&'a str> {
    std::str::from_utf8(line).map_err(|_| malformed(format!("non-UTF-8 {what} line")))
}

fn parse_tokens<T: std::str::FromStr>(lines: &[&[u8]], expected: usize, what: &str) -> Result<Vec<T>> {
    let mut values = Vec::with_capacity(expected);
    for line in lines {
        for token in line_str(line, what)?.split_whitespace() {
            let v = token
                .parse::<T>()
                .map_err(|_| malformed(format!("invalid {what} token {token:?}")))?;
            values.push(v);
        }
    }
    if values.len() != expected {
        return Err(malformed(format!(
            "expected {expected} {what} values, found {}",
            values.len()
        )));
    }
    Ok(values)
}

fn split_lines(text: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = text
        .split(|&b| b == b'\n')
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
        .collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Decode an alphanumeric file. With `headonly`, the sample lines are not
/// parsed and `None` is returned in their place.
pub fn decode(text: &[u8], headonly: bool) -> Result<(SacHeader, Option<Vec<f32>>)> {
    let lines = split_lines(text);
    let header_lines = FLOAT_LINES + INT_LINES + STRING_LINES;
    if lines.len() < header_lines {
        return Err(malformed(format!(
            "expected at least {header_lines} header lines, found {}",
            lines.len()
        )));
    }

    let mut header = SacHeader::null();

    let floats: Vec<f32> = parse_tokens(&lines[..FLOAT_LINES], NUM_FLOATS, "float")?;
    header.floats.copy_from_slice(&floats);

    let int_end = FLOAT_LINES + INT_LINES;
    let ints: Vec<i32> = parse_tokens(&lines[FLOAT_LINES..int_end], NUM_INTS, "integer")?;
    header.ints.copy_from_slice(&ints);

    for (i, line) in lines[int_end..header_lines].iter().enumerate() {
        if line.len() > STRING_LINE_WIDTH {
            return Err(malformed(format!(
                "string line {} is {} columns wide, expected {STRING_LINE_WIDTH}",
                i + 1,
                line.len()
            )));
        }
        for j in 0..SLOTS_PER_LINE {
            let slot = &mut header.strings[i * SLOTS_PER_LINE + j];
            for (k, byte) in slot.iter_mut().enumerate() {
                *byte = line.get(j * STRING_SLOT_WIDTH + k).copied().unwrap_or(b' ');
            }
        }
    }

    if headonly {
        return Ok((header, None));
    }

    let npts = header
        .sample_count()
        .map_err(|e| SacError::MalformedAscii(e.to_string()))?;
    let samples = parse_tokens(&lines[header_lines..], npts, "sample")?;
    Ok((header, Some(samples)))
}

/// Encode a header and optional samples as alphanumeric text.
pub fn encode(header: &SacHeader, samples: Option<&[f32]>) -> Vec<u8> {
    let mut out = Vec::new();
    for row in header.floats.chunks(5) {
        for &v in row {
            out.extend_from_slice(format_float(v).as_bytes());
        }
        out.push(b'\n');
    }
    for row in header.ints.chunks(5) {
        for &v in row {
            out.extend_from_slice(format!("{v:>10}").as_bytes());
        }
        out.push(b'\n');
    }
    for row in header.strings.chunks(SLOTS_PER_LINE) {
        for slot in row {
            out.extend_from_slice(slot);
        }
        out.push(b'\n');
    }
    if let Some(samples) = samples {
        for row in samples.chunks(5) {
            for &v in row {
                out.extend_from_slice(format_float(v).as_bytes());
            }
            out.push(b'\n');
        }
    }
    out
}
