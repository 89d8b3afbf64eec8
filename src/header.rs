//! SAC header schema and raw header storage.
//!
//! The schema is a static table with one [`HeaderField`] per named header,
//! giving its [`HeaderKind`], its slot in the float, integer or string array,
//! the accepted symbols of enumerated headers, and a one-line description.
//!
//! [`SacHeader`] holds the three fixed-length arrays exactly as they appear on
//! disk. Unset values are stored as the null sentinels [`FNULL`], [`INULL`]
//! and [`SNULL`].

use crate::types::{HeaderKind, HeaderValue};
use crate::{Result, SacError};

/// Null sentinel of float headers.
pub const FNULL: f32 = -12345.0;
/// Null sentinel of integer, logical and enumerated headers.
pub const INULL: i32 = -12345;
/// Null sentinel of string headers, before blank padding.
pub const SNULL: &str = "-12345";

/// Number of float header words.
pub const NUM_FLOATS: usize = 70;
/// Number of integer header words.
pub const NUM_INTS: usize = 40;
/// Number of 8-byte string slots (`kevnm` spans two of them).
pub const NUM_STRING_SLOTS: usize = 24;
/// Width in bytes of one string slot.
pub const STRING_SLOT_WIDTH: usize = 8;

/// Header versions accepted on read.
pub const VALID_NVHDR: &[i32] = &[6];
/// Header version written by default.
pub const DEFAULT_NVHDR: i32 = 6;

/// Static description of one header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField {
    pub name: &'static str,
    pub kind: HeaderKind,
    /// Index into the float, integer or string-slot array, depending on `kind`.
    pub slot: usize,
    /// Width in bytes; 4 for numeric headers, 8 or 16 for strings.
    pub width: usize,
    /// Accepted symbols, for enumerated headers only.
    pub accepted: &'static [&'static str],
    pub doc: &'static str,
}

const fn float(name: &'static str, slot: usize, doc: &'static str) -> HeaderField {
    HeaderField { name, kind: HeaderKind::Float, slot, width: 4, accepted: &[], doc }
}

const fn reltime(name: &'static str, slot: usize, doc: &'static str) -> HeaderField {
    HeaderField { name, kind: HeaderKind::RelativeTime, slot, width: 4, accepted: &[], doc }
}

const fn int(name: &'static str, slot: usize, doc: &'static str) -> HeaderField {
    HeaderField { name, kind: HeaderKind::Int, slot, width: 4, accepted: &[], doc }
}

const fn logical(name: &'static str, slot: usize, doc: &'static str) -> HeaderField {
    HeaderField { name, kind: HeaderKind::Bool, slot, width: 4, accepted: &[], doc }
}

const fn enumerated(
    name: &'static str,
    slot: usize,
    accepted: &'static [&'static str],
    doc: &'static str,
) -> HeaderField {
    HeaderField { name, kind: HeaderKind::Enum, slot, width: 4, accepted, doc }
}

const fn string(name: &'static str, slot: usize, width: usize, doc: &'static str) -> HeaderField {
    HeaderField { name, kind: HeaderKind::Str, slot, width, accepted: &[], doc }
}

const IFTYPE_VALS: &[&str] = &["itime", "irlim", "iamph", "ixy", "ixyz"];
const IDEP_VALS: &[&str] = &["iunkn", "idisp", "ivel", "ivolts", "iacc"];
const IZTYPE_VALS: &[&str] = &[
    "iunkn", "ib", "iday", "io", "ia", "it0", "it1", "it2", "it3", "it4", "it5", "it6", "it7",
    "it8", "it9",
];
const IEVTYP_VALS: &[&str] = &[
    "iunkn", "inucl", "ipren", "ipostn", "iquake", "ipreq", "ipostq", "ichem", "iqb", "iqb1",
    "iqb2", "iqbx", "iqmt", "ieq", "ieq1", "ieq2", "ime", "iex", "inu", "inc", "io_", "il", "ir",
    "it", "iu", "iother",
];
const ISYNTH_VALS: &[&str] = &["irldta"];
const IMAGTYP_VALS: &[&str] = &["imb", "ims", "iml", "imw", "imd", "imx"];
const IMAGSRC_VALS: &[&str] = &[
    "ineic", "ipdeq", "ipdew", "ipde", "iisc", "ireb", "iusgs", "ibrk", "icaltech", "illnl",
    "ievloc", "ijsop", "iuser", "iunknown",
];

/// Every named header, floats first, then integers, then strings.
pub const FIELDS: &[HeaderField] = &[
    float("delta", 0, "Increment between evenly spaced samples (nominal value)."),
    float("depmin", 1, "Minimum value of dependent variable."),
    float("depmax", 2, "Maximum value of dependent variable."),
    float("scale", 3, "Multiplying scale factor for dependent variable."),
    float("odelta", 4, "Observed increment if different from nominal value."),
    reltime("b", 5, "Beginning value of the independent variable."),
    reltime("e", 6, "Ending value of the independent variable."),
    reltime("o", 7, "Event origin time (seconds relative to reference time)."),
    reltime("a", 8, "First arrival time (seconds relative to reference time)."),
    float("internal0", 9, "Internal."),
    reltime("t0", 10, "User defined time pick or marker 0."),
    reltime("t1", 11, "User defined time pick or marker 1."),
    reltime("t2", 12, "User defined time pick or marker 2."),
    reltime("t3", 13, "User defined time pick or marker 3."),
    reltime("t4", 14, "User defined time pick or marker 4."),
    reltime("t5", 15, "User defined time pick or marker 5."),
    reltime("t6", 16, "User defined time pick or marker 6."),
    reltime("t7", 17, "User defined time pick or marker 7."),
    reltime("t8", 18, "User defined time pick or marker 8."),
    reltime("t9", 19, "User defined time pick or marker 9."),
    reltime("f", 20, "Fini or end of event time (seconds relative to reference time)."),
    float("resp0", 21, "Instrument response parameter 0."),
    float("resp1", 22, "Instrument response parameter 1."),
    float("resp2", 23, "Instrument response parameter 2."),
    float("resp3", 24, "Instrument response parameter 3."),
    float("resp4", 25, "Instrument response parameter 4."),
    float("resp5", 26, "Instrument response parameter 5."),
    float("resp6", 27, "Instrument response parameter 6."),
    float("resp7", 28, "Instrument response parameter 7."),
    float("resp8", 29, "Instrument response parameter 8."),
    float("resp9", 30, "Instrument response parameter 9."),
    float("stla", 31, "Station latitude (degrees, north positive)."),
    float("stlo", 32, "Station longitude (degrees, east positive)."),
    float("stel", 33, "Station elevation above sea level (meters)."),
    float("stdp", 34, "Station depth below surface (meters)."),
    float("evla", 35, "Event latitude (degrees, north positive)."),
    float("evlo", 36, "Event longitude (degrees, east positive)."),
    float("evel", 37, "Event elevation (meters)."),
    float("evdp", 38, "Event depth below surface (kilometers)."),
    float("mag", 39, "Event magnitude."),
    float("user0", 40, "User defined variable storage area 0."),
    float("user1", 41, "User defined variable storage area 1."),
    float("user2", 42, "User defined variable storage area 2."),
    float("user3", 43, "User defined variable storage area 3."),
    float("user4", 44, "User defined variable storage area 4."),
    float("user5", 45, "User defined variable storage area 5."),
    float("user6", 46, "User defined variable storage area 6."),
    float("user7", 47, "User defined variable storage area 7."),
    float("user8", 48, "User defined variable storage area 8."),
    float("user9", 49, "User defined variable storage area 9."),
    float("dist", 50, "Station to event distance (km)."),
    float("az", 51, "Event to station azimuth (degrees)."),
    float("baz", 52, "Station to event azimuth (degrees)."),
    float("gcarc", 53, "Station to event great circle arc length (degrees)."),
    float("internal1", 54, "Internal."),
    float("internal2", 55, "Internal."),
    float("depmen", 56, "Mean value of dependent variable."),
    float("cmpaz", 57, "Component azimuth (degrees clockwise from north)."),
    float("cmpinc", 58, "Component incident angle (degrees from upward vertical)."),
    float("xminimum", 59, "Minimum value of X (spectral files only)."),
    float("xmaximum", 60, "Maximum value of X (spectral files only)."),
    float("yminimum", 61, "Minimum value of Y (spectral files only)."),
    float("ymaximum", 62, "Maximum value of Y (spectral files only)."),
    float("unused6", 63, "Unused."),
    float("unused7", 64, "Unused."),
    float("unused8", 65, "Unused."),
    float("unused9", 66, "Unused."),
    float("unused10", 67, "Unused."),
    float("unused11", 68, "Unused."),
    float("unused12", 69, "Unused."),
    int("nzyear", 0, "GMT year corresponding to reference (zero) time in file."),
    int("nzjday", 1, "GMT julian day."),
    int("nzhour", 2, "GMT hour."),
    int("nzmin", 3, "GMT minute."),
    int("nzsec", 4, "GMT second."),
    int("nzmsec", 5, "GMT millisecond."),
    int("nvhdr", 6, "Header version number."),
    int("norid", 7, "Origin ID (CSS 3.0)."),
    int("nevid", 8, "Event ID (CSS 3.0)."),
    int("npts", 9, "Number of points per data component."),
    int("internal3", 10, "Internal."),
    int("nwfid", 11, "Waveform ID (CSS 3.0)."),
    int("nxsize", 12, "Spectral length (spectral files only)."),
    int("nysize", 13, "Spectral width (spectral files only)."),
    int("unused15", 14, "Unused."),
    enumerated("iftype", 15, IFTYPE_VALS, "Type of file."),
    enumerated("idep", 16, IDEP_VALS, "Type of dependent variable."),
    enumerated("iztype", 17, IZTYPE_VALS, "Reference time equivalence."),
    int("unused16", 18, "Unused."),
    int("iinst", 19, "Type of recording instrument."),
    int("istreg", 20, "Station geographic region."),
    int("ievreg", 21, "Event geographic region."),
    enumerated("ievtyp", 22, IEVTYP_VALS, "Type of event."),
    int("iqual", 23, "Quality of data."),
    enumerated("isynth", 24, ISYNTH_VALS, "Synthetic data flag."),
    enumerated("imagtyp", 25, IMAGTYP_VALS, "Magnitude type."),
    enumerated("imagsrc", 26, IMAGSRC_VALS, "Source of magnitude information."),
    int("unused19", 27, "Unused."),
    int("unused20", 28, "Unused."),
    int("unused21", 29, "Unused."),
    int("unused22", 30, "Unused."),
    int("unused23", 31, "Unused."),
    int("unused24", 32, "Unused."),
    int("unused25", 33, "Unused."),
    int("unused26", 34, "Unused."),
    logical("leven", 35, "TRUE if data is evenly spaced."),
    logical("lpspol", 36, "TRUE if station components have a positive polarity."),
    logical("lovrok", 37, "TRUE if it is okay to overwrite this file on disk."),
    logical("lcalda", 38, "TRUE if dist, az, baz and gcarc are calculated from coordinates."),
    int("unused27", 39, "Unused."),
    string("kstnm", 0, 8, "Station name."),
    string("kevnm", 1, 16, "Event name."),
    string("khole", 3, 8, "Nuclear hole identifier or location identifier."),
    string("ko", 4, 8, "Event origin time identification."),
    string("ka", 5, 8, "First arrival time identification."),
    string("kt0", 6, 8, "User defined time pick identification 0."),
    string("kt1", 7, 8, "User defined time pick identification 1."),
    string("kt2", 8, 8, "User defined time pick identification 2."),
    string("kt3", 9, 8, "User defined time pick identification 3."),
    string("kt4", 10, 8, "User defined time pick identification 4."),
    string("kt5", 11, 8, "User defined time pick identification 5."),
    string("kt6", 12, 8, "User defined time pick identification 6."),
    string("kt7", 13, 8, "User defined time pick identification 7."),
    string("kt8", 14, 8, "User defined time pick identification 8."),
    string("kt9", 15, 8, "User defined time pick identification 9."),
    string("kf", 16, 8, "Fini identification."),
    string("kuser0", 17, 8, "User defined variable storage area 0."),
    string("kuser1", 18, 8, "User defined variable storage area 1."),
    string("kuser2", 19, 8, "User defined variable storage area 2."),
    string("kcmpnm", 20, 8, "Component name."),
    string("knetwk", 21, 8, "Name of seismic network."),
    string("kdatrd", 22, 8, "Date data was read onto computer."),
    string("kinst", 23, 8, "Generic name of recording instrument."),
];

/// Symbol to code mapping shared by every enumerated header.
pub const ENUM_CODES: &[(&str, i32)] = &[
    ("itime", 1),
    ("irlim", 2),
    ("iamph", 3),
    ("ixy", 4),
    ("iunkn", 5),
    ("idisp", 6),
    ("ivel", 7),
    ("iacc", 8),
    ("ib", 9),
    ("iday", 10),
    ("io", 11),
    ("ia", 12),
    ("it0", 13),
    ("it1", 14),
    ("it2", 15),
    ("it3", 16),
    ("it4", 17),
    ("it5", 18),
    ("it6", 19),
    ("it7", 20),
    ("it8", 21),
    ("it9", 22),
    ("iradnv", 23),
    ("itannv", 24),
    ("iradev", 25),
    ("itanev", 26),
    ("inorth", 27),
    ("ieast", 28),
    ("ihorza", 29),
    ("idown", 30),
    ("iup", 31),
    ("illlbb", 32),
    ("iwwsn1", 33),
    ("iwwsn2", 34),
    ("ihglp", 35),
    ("isro", 36),
    ("inucl", 37),
    ("ipren", 38),
    ("ipostn", 39),
    ("iquake", 40),
    ("ipreq", 41),
    ("ipostq", 42),
    ("ichem", 43),
    ("iother", 44),
    ("igood", 45),
    ("iglch", 46),
    ("idrop", 47),
    ("ilowsn", 48),
    ("irldta", 49),
    ("ivolts", 50),
    ("ixyz", 51),
    ("imb", 52),
    ("ims", 53),
    ("iml", 54),
    ("imw", 55),
    ("imd", 56),
    ("imx", 57),
    ("ineic", 58),
    ("ipdeq", 59),
    ("ipdew", 60),
    ("ipde", 61),
    ("iisc", 62),
    ("ireb", 63),
    ("iusgs", 64),
    ("ibrk", 65),
    ("icaltech", 66),
    ("illnl", 67),
    ("ievloc", 68),
    ("ijsop", 69),
    ("iuser", 70),
    ("iunknown", 71),
    ("iqb", 72),
    ("iqb1", 73),
    ("iqb2", 74),
    ("iqbx", 75),
    ("iqmt", 76),
    ("ieq", 77),
    ("ieq1", 78),
    ("ieq2", 79),
    ("ime", 80),
    ("iex", 81),
    ("inu", 82),
    ("inc", 83),
    ("io_", 84),
    ("il", 85),
    ("ir", 86),
    ("it", 87),
    ("iu", 88),
    ("ieq3", 89),
    ("ieq0", 90),
    ("iex0", 91),
    ("iqc", 92),
    ("iqb0", 93),
    ("igey", 94),
    ("ilit", 95),
    ("imet", 96),
    ("iodor", 97),
    ("ios", 103),
];

/// The six integer headers that compose the reference time.
pub const REFTIME_FIELDS: [&str; 6] = ["nzyear", "nzjday", "nzhour", "nzmin", "nzsec", "nzmsec"];

/// Look up a header by name.
pub fn field(name: &str) -> Result<&'static HeaderField> {
    FIELDS
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| SacError::UnknownField(name.to_string()))
}

/// Kind and array slot of a header.
pub fn slot_of(name: &str) -> Result<(HeaderKind, usize)> {
    field(name).map(|f| (f.kind, f.slot))
}

/// Compile-time field lookup used by the named accessors. Panics during
/// constant evaluation when `name` is not in [`FIELDS`].
pub(crate) const fn const_field(name: &str) -> &'static HeaderField {
    let mut i = 0;
    while i < FIELDS.len() {
        if str_eq(FIELDS[i].name, name) {
            return &FIELDS[i];
        }
        i += 1;
    }
    panic!("unknown SAC header name");
}

pub(crate) const fn const_slot(name: &str) -> usize {
    const_field(name).slot
}

/// Compile-time counterpart of [`enum_code`].
pub(crate) const fn const_enum_code(symbol: &str) -> i32 {
    let mut i = 0;
    while i < ENUM_CODES.len() {
        if str_eq(ENUM_CODES[i].0, symbol) {
            return ENUM_CODES[i].1;
        }
        i += 1;
    }
    panic!("unknown SAC enumeration symbol");
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Accepted symbols of an enumerated header, paired with their codes.
pub fn accepted_values(name: &str) -> Result<Vec<(&'static str, i32)>> {
    let f = field(name)?;
    Ok(f.accepted
        .iter()
        .filter_map(|sym| enum_code(sym).map(|code| (*sym, code)))
        .collect())
}

/// Integer code of an enumeration symbol.
pub fn enum_code(symbol: &str) -> Option<i32> {
    ENUM_CODES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|&(_, code)| code)
}

/// Enumeration symbol of an integer code.
pub fn enum_symbol(code: i32) -> Option<&'static str> {
    ENUM_CODES
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(s, _)| s)
}

/// Null sentinel of a header kind.
pub fn null_sentinel(kind: HeaderKind) -> HeaderValue {
    match kind {
        HeaderKind::Float | HeaderKind::RelativeTime => HeaderValue::Float(FNULL),
        HeaderKind::Int | HeaderKind::Bool | HeaderKind::Enum => HeaderValue::Int(INULL),
        HeaderKind::Str => HeaderValue::Text(SNULL.to_string()),
    }
}

/// True when `raw` is the null sentinel for `kind`.
pub fn is_null(kind: HeaderKind, raw: &HeaderValue) -> bool {
    match (kind, raw) {
        (HeaderKind::Float | HeaderKind::RelativeTime, HeaderValue::Float(v)) => *v == FNULL,
        (HeaderKind::Int | HeaderKind::Bool | HeaderKind::Enum, HeaderValue::Int(v)) => {
            *v == INULL
        }
        (HeaderKind::Str, HeaderValue::Text(s)) => is_null_str(s),
        _ => false,
    }
}

/// A string is null when it holds only the sentinel, once per slot it spans.
fn is_null_str(s: &str) -> bool {
    let t = s.trim_end_matches([' ', '\0']);
    !t.is_empty() && t.split_whitespace().all(|part| part == SNULL)
}

/// The raw float, integer and string arrays of a SAC header.
#[derive(Debug, Clone, PartialEq)]
pub struct SacHeader {
    pub floats: [f32; NUM_FLOATS],
    pub ints: [i32; NUM_INTS],
    pub strings: [[u8; STRING_SLOT_WIDTH]; NUM_STRING_SLOTS],
}

impl SacHeader {
    /// A header with every slot set to its null sentinel.
    pub fn null() -> Self {
        let mut header = Self {
            floats: [FNULL; NUM_FLOATS],
            ints: [INULL; NUM_INTS],
            strings: [[b' '; STRING_SLOT_WIDTH]; NUM_STRING_SLOTS],
        };
        for f in FIELDS.iter().filter(|f| f.kind == HeaderKind::Str) {
            header.set_str_at(f.slot, f.width, None);
        }
        header
    }

    pub fn float_at(&self, slot: usize) -> Option<f32> {
        let v = self.floats[slot];
        (v != FNULL).then_some(v)
    }

    pub fn set_float_at(&mut self, slot: usize, value: Option<f32>) {
        self.floats[slot] = value.unwrap_or(FNULL);
    }

    /// Number of samples `npts` describes. A null `npts` counts as none.
    pub fn sample_count(&self) -> Result<usize> {
        match self.int_at(const_slot("npts")) {
            None => Ok(0),
            Some(n) => usize::try_from(n).map_err(|_| SacError::InvalidSampleCount(n)),
        }
    }

    pub fn int_at(&self, slot: usize) -> Option<i32> {
        let v = self.ints[slot];
        (v != INULL).then_some(v)
    }

    pub fn set_int_at(&mut self, slot: usize, value: Option<i32>) {
        self.ints[slot] = value.unwrap_or(INULL);
    }

    /// Raw text of a string field spanning `width` bytes from `slot`,
    /// including padding.
    pub fn raw_str_at(&self, slot: usize, width: usize) -> String {
        let slots = width / STRING_SLOT_WIDTH;
        let bytes: Vec<u8> = self.strings[slot..slot + slots]
            .iter()
            .flatten()
            .copied()
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Trimmed text of a string field, `None` when it holds the sentinel.
    pub fn str_at(&self, slot: usize, width: usize) -> Option<String> {
        let raw = self.raw_str_at(slot, width);
        if is_null_str(&raw) {
            return None;
        }
        Some(raw.trim_end_matches([' ', '\0']).to_string())
    }

    /// Store `value` blank-padded to `width` bytes, truncating longer text
    /// at the last character boundary that fits. `None` stores the sentinel.
    pub fn set_str_at(&mut self, slot: usize, width: usize, value: Option<&str>) {
        let mut text = value.unwrap_or(SNULL);
        if text.len() > width {
            log::warn!("truncating string header value {text:?} to {width} bytes");
            let end = (0..=width).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0);
            text = &text[..end];
        }
        let text = text.as_bytes();
        let slots = width / STRING_SLOT_WIDTH;
        for (i, byte) in self.strings[slot..slot + slots]
            .iter_mut()
            .flatten()
            .enumerate()
        {
            *byte = text.get(i).copied().unwrap_or(b' ');
        }
    }
}

impl Default for SacHeader {
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_slot() {
        let mut floats = [false; NUM_FLOATS];
        let mut ints = [false; NUM_INTS];
        let mut strings = [false; NUM_STRING_SLOTS];
        for f in FIELDS {
            match f.kind {
                HeaderKind::Float | HeaderKind::RelativeTime => {
                    assert!(!floats[f.slot], "{}: float slot reused", f.name);
                    floats[f.slot] = true;
                }
                HeaderKind::Int | HeaderKind::Bool | HeaderKind::Enum => {
                    assert!(!ints[f.slot], "{}: int slot reused", f.name);
                    ints[f.slot] = true;
                }
                HeaderKind::Str => {
                    for s in f.slot..f.slot + f.width / STRING_SLOT_WIDTH {
                        assert!(!strings[s], "{}: string slot reused", f.name);
                        strings[s] = true;
                    }
                }
            }
        }
        assert!(floats.iter().all(|&x| x));
        assert!(ints.iter().all(|&x| x));
        assert!(strings.iter().all(|&x| x));
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in FIELDS.iter().enumerate() {
            for b in &FIELDS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_accepted_symbols_have_codes() {
        for f in FIELDS.iter().filter(|f| f.kind == HeaderKind::Enum) {
            assert!(!f.accepted.is_empty(), "{}", f.name);
            for sym in f.accepted {
                assert!(enum_code(sym).is_some(), "{}: {sym} has no code", f.name);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(slot_of("delta").unwrap(), (HeaderKind::Float, 0));
        assert_eq!(slot_of("npts").unwrap(), (HeaderKind::Int, 9));
        assert_eq!(slot_of("kcmpnm").unwrap(), (HeaderKind::Str, 20));
        assert_eq!(slot_of("lcalda").unwrap(), (HeaderKind::Bool, 38));
        assert_eq!(const_slot("t9"), 19);
        assert_eq!(const_field("kevnm").width, 16);
        assert_eq!(const_enum_code("ib"), 9);
        assert!(matches!(
            field("nosuchheader"),
            Err(SacError::UnknownField(name)) if name == "nosuchheader"
        ));
    }

    #[test]
    fn test_enum_tables() {
        assert_eq!(enum_code("itime"), Some(1));
        assert_eq!(enum_code("ios"), Some(103));
        assert_eq!(enum_symbol(9), Some("ib"));
        assert_eq!(enum_symbol(98), None);
        let vals = accepted_values("iftype").unwrap();
        assert_eq!(vals[0], ("itime", 1));
        assert_eq!(vals.len(), 5);
        assert!(accepted_values("delta").unwrap().is_empty());
    }

    #[test]
    fn test_null_sentinels() {
        assert_eq!(null_sentinel(HeaderKind::Float), HeaderValue::Float(FNULL));
        assert_eq!(null_sentinel(HeaderKind::Enum), HeaderValue::Int(INULL));
        assert!(is_null(HeaderKind::Bool, &HeaderValue::Int(-12345)));
        assert!(!is_null(HeaderKind::Int, &HeaderValue::Int(0)));
        assert!(is_null(HeaderKind::Str, &HeaderValue::Text("-12345  ".into())));
        assert!(is_null(
            HeaderKind::Str,
            &HeaderValue::Text("-12345  -12345  ".into())
        ));
        assert!(!is_null(HeaderKind::Str, &HeaderValue::Text("        ".into())));
    }

    #[test]
    fn test_null_header_strings() {
        let h = SacHeader::null();
        assert_eq!(&h.strings[0], b"-12345  ");
        assert_eq!(h.raw_str_at(1, 16), "-12345          ");
        assert_eq!(h.str_at(1, 16), None);
        assert_eq!(h.str_at(20, 8), None);
    }

    #[test]
    fn test_string_padding_and_truncation() {
        let mut h = SacHeader::null();
        h.set_str_at(0, 8, Some("STA"));
        assert_eq!(&h.strings[0], b"STA     ");
        assert_eq!(h.str_at(0, 8).as_deref(), Some("STA"));

        h.set_str_at(0, 8, Some("LONGSTATION"));
        assert_eq!(h.str_at(0, 8).as_deref(), Some("LONGSTAT"));

        h.set_str_at(1, 16, Some("Loma Prieta 1989"));
        assert_eq!(&h.strings[1], b"Loma Pri");
        assert_eq!(&h.strings[2], b"eta 1989");
        assert_eq!(h.str_at(1, 16).as_deref(), Some("Loma Prieta 1989"));
    }

    #[test]
    fn test_truncation_keeps_whole_characters() {
        let mut h = SacHeader::null();
        // 'é' would take bytes 7 and 8 of an 8-byte slot
        h.set_str_at(0, 8, Some("STATIONé"));
        assert_eq!(&h.strings[0], b"STATION ");
        assert_eq!(h.str_at(0, 8).as_deref(), Some("STATION"));

        h.set_str_at(1, 16, Some("Zürich-Kloten ü"));
        assert_eq!(h.str_at(1, 16).as_deref(), Some("Zürich-Kloten"));
        assert!(!h.raw_str_at(1, 16).contains('\u{fffd}'));
    }

    #[test]
    fn test_sample_count() {
        let mut h = SacHeader::null();
        assert_eq!(h.sample_count().unwrap(), 0);
        h.set_int_at(const_slot("npts"), Some(100));
        assert_eq!(h.sample_count().unwrap(), 100);
        h.set_int_at(const_slot("npts"), Some(-3));
        assert!(matches!(h.sample_count(), Err(SacError::InvalidSampleCount(-3))));
    }
}
