//! [`SacTrace`]: one SAC header plus an optional sample array.
//!
//! Headers are reachable three ways:
//!
//! - named accessors such as [`SacTrace::delta`] and [`SacTrace::set_kstnm`]
//! - typed access by name, e.g. [`SacTrace::float`] or [`SacTrace::set_enum`]
//! - dynamic access through [`SacTrace::get`] and [`SacTrace::set`]
//!
//! All three dispatch on the static schema in [`crate::header`], translating
//! null sentinels to `None` at the boundary.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::geodetics;
use crate::header::{
    self, DEFAULT_NVHDR, FIELDS, HeaderField, INULL, REFTIME_FIELDS, SacHeader, const_enum_code,
    const_field, const_slot,
};
use crate::time;
use crate::types::{ByteOrder, HeaderKind, HeaderValue};
use crate::{Result, SacError};

macro_rules! slot {
    ($name:ident) => {
        const { const_slot(stringify!($name)) }
    };
}

macro_rules! field {
    ($name:ident) => {
        const { const_field(stringify!($name)) }
    };
}

const REFTIME_SLOTS: [usize; 6] = {
    let mut slots = [0; 6];
    let mut i = 0;
    while i < slots.len() {
        slots[i] = const_slot(REFTIME_FIELDS[i]);
        i += 1;
    }
    slots
};

/// Coordinates consumed by the distance setter, in `stla, stlo, evla, evlo` order.
const GEO_FIELDS: [&str; 4] = ["stla", "stlo", "evla", "evlo"];

const GEO_SLOTS: [usize; 4] = {
    let mut slots = [0; 4];
    let mut i = 0;
    while i < slots.len() {
        slots[i] = const_slot(GEO_FIELDS[i]);
        i += 1;
    }
    slots
};

/// A SAC trace: header arrays, optional samples, and the byte order they
/// were read with or will be written with.
///
/// A trace read with `headonly` has no samples, but keeps `npts` and the
/// data statistics headers as found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SacTrace {
    header: SacHeader,
    data: Option<Vec<f32>>,
    byte_order: ByteOrder,
}

impl SacTrace {
    /// Create an empty trace with default headers.
    ///
    /// Defaults: `nvhdr = 6`, `b = 0`, `delta = 1`, `npts = 0`,
    /// `iftype = itime`, `iztype = ib`, `leven`, `lovrok`, `lcalda = false`,
    /// reference time 1970-001 00:00:00.000, little-endian.
    pub fn new() -> Self {
        let mut h = SacHeader::null();
        h.set_int_at(slot!(nvhdr), Some(DEFAULT_NVHDR));
        h.set_float_at(slot!(b), Some(0.0));
        h.set_float_at(slot!(delta), Some(1.0));
        h.set_int_at(slot!(npts), Some(0));
        h.set_int_at(slot!(iftype), Some(const_enum_code("itime")));
        h.set_int_at(slot!(iztype), Some(const_enum_code("ib")));
        h.set_int_at(slot!(leven), Some(1));
        h.set_int_at(slot!(lovrok), Some(1));
        h.set_int_at(slot!(lcalda), Some(0));
        for (slot, v) in REFTIME_SLOTS.iter().zip([1970, 1, 0, 0, 0, 0]) {
            h.set_int_at(*slot, Some(v));
        }
        Self {
            header: h,
            data: None,
            byte_order: ByteOrder::Little,
        }
    }

    /// Create a trace from header values on top of the defaults of
    /// [`SacTrace::new`], then attach `data` and compute distances.
    ///
    /// Absolute times given for relative-time headers are applied after all
    /// other values, so they are measured from the final reference time.
    pub fn from_headers<I, K, V>(headers: I, data: Option<Vec<f32>>) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValue>,
    {
        let mut trace = Self::new();
        let mut absolute = Vec::new();
        for (name, value) in headers {
            let f = header::field(name.as_ref())?;
            match value.into() {
                HeaderValue::Time(t) => absolute.push((f, t)),
                v => trace.store(f, v)?,
            }
        }
        for (f, t) in absolute {
            trace.store(f, HeaderValue::Time(t))?;
        }
        if data.is_some() {
            trace.set_data(data);
        }
        trace.set_distances(false)?;
        Ok(trace)
    }

    /// Wrap raw header arrays and samples as they are, without defaults
    /// or derived headers.
    pub fn from_arrays(header: SacHeader, data: Option<Vec<f32>>, byte_order: ByteOrder) -> Self {
        Self {
            header,
            data,
            byte_order,
        }
    }

    /// Attach samples, updating the data-derived headers.
    pub fn with_data(mut self, data: Vec<f32>) -> Self {
        self.set_data(Some(data));
        self
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn header(&self) -> &SacHeader {
        &self.header
    }

    /// Raw header arrays. Writes here bypass every consistency rule.
    pub fn header_mut(&mut self) -> &mut SacHeader {
        &mut self.header
    }

    pub fn into_parts(self) -> (SacHeader, Option<Vec<f32>>, ByteOrder) {
        (self.header, self.data, self.byte_order)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    // --- Samples ---

    pub fn data(&self) -> Option<&[f32]> {
        self.data.as_deref()
    }

    /// Replace the samples.
    ///
    /// With `Some`, `npts`, `depmin`, `depmax` and `depmen` are recomputed,
    /// and `e` is moved to the last sample when the trace is evenly spaced.
    /// With `None`, headers are left as they are.
    pub fn set_data(&mut self, data: Option<Vec<f32>>) {
        self.data = data;
        self.flush_data_headers();
    }

    pub fn take_data(&mut self) -> Option<Vec<f32>> {
        self.data.take()
    }

    fn flush_data_headers(&mut self) {
        let Some(data) = &self.data else {
            return;
        };
        let npts = i32::try_from(data.len()).unwrap_or(i32::MAX);
        let h = &mut self.header;
        h.set_int_at(slot!(npts), Some(npts));
        if data.is_empty() {
            h.set_float_at(slot!(depmin), None);
            h.set_float_at(slot!(depmax), None);
            h.set_float_at(slot!(depmen), None);
            return;
        }

        let min = data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = data.iter().map(|&v| f64::from(v)).sum::<f64>() / data.len() as f64;
        h.set_float_at(slot!(depmin), Some(min));
        h.set_float_at(slot!(depmax), Some(max));
        h.set_float_at(slot!(depmen), Some(mean as f32));

        let uneven = h.int_at(slot!(leven)) == Some(0);
        if let (false, Some(b), Some(delta)) =
            (uneven, h.float_at(slot!(b)), h.float_at(slot!(delta)))
        {
            let e = f64::from(b) + f64::from(npts - 1) * f64::from(delta);
            h.set_float_at(slot!(e), Some(e as f32));
        }
    }

    // --- Typed access by name ---

    fn expect_kind(
        name: &str,
        kinds: &[HeaderKind],
        expected: &'static str,
    ) -> Result<&'static HeaderField> {
        let f = header::field(name)?;
        if kinds.contains(&f.kind) {
            Ok(f)
        } else {
            Err(SacError::TypeMismatch {
                field: f.name,
                expected,
                actual: f.kind.name(),
            })
        }
    }

    /// Value of a float or relative-time header.
    pub fn float(&self, name: &str) -> Result<Option<f32>> {
        let f = Self::expect_kind(name, &[HeaderKind::Float, HeaderKind::RelativeTime], "float")?;
        Ok(self.header.float_at(f.slot))
    }

    pub fn set_float(&mut self, name: &str, value: Option<f32>) -> Result<()> {
        let f = Self::expect_kind(name, &[HeaderKind::Float, HeaderKind::RelativeTime], "float")?;
        self.header.set_float_at(f.slot, value);
        self.after_set(f)
    }

    pub fn int(&self, name: &str) -> Result<Option<i32>> {
        let f = Self::expect_kind(name, &[HeaderKind::Int], "integer")?;
        Ok(self.header.int_at(f.slot))
    }

    pub fn set_int(&mut self, name: &str, value: Option<i32>) -> Result<()> {
        let f = Self::expect_kind(name, &[HeaderKind::Int], "integer")?;
        self.header.set_int_at(f.slot, value);
        Ok(())
    }

    /// Value of a logical header. Stored values other than 0, 1 and the
    /// null sentinel are rejected.
    pub fn boolean(&self, name: &str) -> Result<Option<bool>> {
        let f = Self::expect_kind(name, &[HeaderKind::Bool], "logical")?;
        self.decode_bool(f)
    }

    pub fn set_bool(&mut self, name: &str, value: Option<bool>) -> Result<()> {
        let f = Self::expect_kind(name, &[HeaderKind::Bool], "logical")?;
        self.header.set_int_at(f.slot, value.map(i32::from));
        self.after_set(f)
    }

    /// Symbolic value of an enumerated header.
    pub fn enumerated(&self, name: &str) -> Result<Option<&'static str>> {
        let f = Self::expect_kind(name, &[HeaderKind::Enum], "enumerated")?;
        self.decode_enum(f)
    }

    /// Set an enumerated header by symbol. Symbols outside the header's
    /// accepted set fail with [`SacError::InvalidEnumValue`].
    pub fn set_enum(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let f = Self::expect_kind(name, &[HeaderKind::Enum], "enumerated")?;
        self.store_enum(f, value)
    }

    pub fn string(&self, name: &str) -> Result<Option<String>> {
        let f = Self::expect_kind(name, &[HeaderKind::Str], "string")?;
        Ok(self.header.str_at(f.slot, f.width))
    }

    pub fn set_string(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let f = Self::expect_kind(name, &[HeaderKind::Str], "string")?;
        self.header.set_str_at(f.slot, f.width, value);
        Ok(())
    }

    fn decode_bool(&self, f: &'static HeaderField) -> Result<Option<bool>> {
        match self.header.ints[f.slot] {
            INULL => Ok(None),
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            value => Err(SacError::InvalidBoolValue {
                field: f.name,
                value,
            }),
        }
    }

    fn decode_enum(&self, f: &'static HeaderField) -> Result<Option<&'static str>> {
        let code = self.header.ints[f.slot];
        if code == INULL {
            return Ok(None);
        }
        header::enum_symbol(code)
            .filter(|sym| f.accepted.contains(sym))
            .map(Some)
            .ok_or(SacError::InvalidEnumCode {
                field: f.name,
                code,
            })
    }

    fn store_enum(&mut self, f: &'static HeaderField, value: Option<&str>) -> Result<()> {
        let code = match value {
            None => None,
            Some(sym) => {
                let code = f
                    .accepted
                    .contains(&sym)
                    .then(|| header::enum_code(sym))
                    .flatten()
                    .ok_or_else(|| SacError::InvalidEnumValue {
                        field: f.name,
                        value: sym.to_string(),
                    })?;
                Some(code)
            }
        };
        self.header.set_int_at(f.slot, code);
        Ok(())
    }

    // --- Dynamic access ---

    /// Value of any header, `None` when null.
    pub fn get(&self, name: &str) -> Result<Option<HeaderValue>> {
        let f = header::field(name)?;
        Ok(match f.kind {
            HeaderKind::Float | HeaderKind::RelativeTime => {
                self.header.float_at(f.slot).map(HeaderValue::Float)
            }
            HeaderKind::Int => self.header.int_at(f.slot).map(HeaderValue::Int),
            HeaderKind::Bool => self.decode_bool(f)?.map(HeaderValue::Bool),
            HeaderKind::Enum => self
                .decode_enum(f)?
                .map(|sym| HeaderValue::Text(sym.to_string())),
            HeaderKind::Str => self.header.str_at(f.slot, f.width).map(HeaderValue::Text),
        })
    }

    /// Set any header.
    ///
    /// Float headers accept floats and integers. Logical headers accept
    /// booleans, and integers or floats coerced by truthiness. Enumerated
    /// headers take their symbol as text. Relative-time headers also accept
    /// an absolute time, stored as its offset from the reference time.
    pub fn set(&mut self, name: &str, value: impl Into<HeaderValue>) -> Result<()> {
        let f = header::field(name)?;
        self.store(f, value.into())?;
        self.after_set(f)
    }

    /// Set a header to its null sentinel.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let f = header::field(name)?;
        match f.kind {
            HeaderKind::Float | HeaderKind::RelativeTime => self.header.set_float_at(f.slot, None),
            HeaderKind::Int | HeaderKind::Bool | HeaderKind::Enum => {
                self.header.set_int_at(f.slot, None)
            }
            HeaderKind::Str => self.header.set_str_at(f.slot, f.width, None),
        }
        self.after_set(f)
    }

    fn store(&mut self, f: &'static HeaderField, value: HeaderValue) -> Result<()> {
        use HeaderKind as K;
        use HeaderValue as V;

        match (f.kind, value) {
            (K::Float | K::RelativeTime, V::Float(v)) => self.header.set_float_at(f.slot, Some(v)),
            (K::Float | K::RelativeTime, V::Int(v)) => {
                self.header.set_float_at(f.slot, Some(v as f32))
            }
            (K::RelativeTime, V::Time(t)) => {
                let offset = time::seconds_between(t, self.reftime()?);
                self.header.set_float_at(f.slot, Some(offset as f32));
            }
            (K::Int, V::Int(v)) => self.header.set_int_at(f.slot, Some(v)),
            (K::Bool, V::Bool(v)) => self.header.set_int_at(f.slot, Some(i32::from(v))),
            (K::Bool, V::Int(v)) => self.header.set_int_at(f.slot, Some(i32::from(v != 0))),
            (K::Bool, V::Float(v)) => self.header.set_int_at(f.slot, Some(i32::from(v != 0.0))),
            (K::Enum, V::Text(sym)) => self.store_enum(f, Some(&sym))?,
            (K::Str, V::Text(s)) => self.header.set_str_at(f.slot, f.width, Some(&s)),
            (kind, other) => {
                return Err(SacError::TypeMismatch {
                    field: f.name,
                    expected: kind.name(),
                    actual: other.shape(),
                });
            }
        }
        Ok(())
    }

    fn after_set(&mut self, f: &HeaderField) -> Result<()> {
        if f.name == "lcalda" || GEO_FIELDS.contains(&f.name) {
            self.set_distances(false)?;
        }
        Ok(())
    }

    /// Every non-null header in schema order.
    pub fn headers(&self) -> Result<Vec<(&'static str, HeaderValue)>> {
        let mut out = Vec::new();
        for f in FIELDS {
            if let Some(v) = self.get(f.name)? {
                out.push((f.name, v));
            }
        }
        Ok(out)
    }

    // --- Reference time ---

    /// The absolute reference time composed from `nzyear` through `nzmsec`.
    pub fn reftime(&self) -> Result<DateTime<Utc>> {
        let mut fields = [0; 6];
        for ((v, slot), name) in fields.iter_mut().zip(REFTIME_SLOTS).zip(REFTIME_FIELDS) {
            *v = self
                .header
                .int_at(slot)
                .ok_or(SacError::IncompleteReferenceTime(name))?;
        }
        time::compose(fields)
    }

    /// Move the reference time, keeping the absolute instant of every
    /// relative-time header.
    ///
    /// `reftime` is rounded to the nearest millisecond before it is stored;
    /// each non-null relative-time header is shifted by the distance from the
    /// old to the rounded new reference time. When the old reference time is
    /// incomplete, only the six time headers are written.
    pub fn set_reftime(&mut self, reftime: DateTime<Utc>) -> Result<()> {
        let new = time::round_to_millisecond(reftime)?;
        match self.reftime() {
            Ok(old) => {
                let shift = time::seconds_between(old, new);
                log::debug!("reference time {old} -> {new}, relative times shift by {shift} s");
                for f in FIELDS.iter().filter(|f| f.kind == HeaderKind::RelativeTime) {
                    if let Some(v) = self.header.float_at(f.slot) {
                        self.header
                            .set_float_at(f.slot, Some((f64::from(v) + shift) as f32));
                    }
                }
            }
            Err(e) => log::debug!("reference time set without shifting relative times: {e}"),
        }
        for (slot, v) in REFTIME_SLOTS.iter().zip(time::decompose(new)) {
            self.header.set_int_at(*slot, Some(v));
        }
        Ok(())
    }

    /// Absolute instant of a relative-time header.
    pub fn time_at(&self, name: &str) -> Result<Option<DateTime<Utc>>> {
        let f = Self::expect_kind(name, &[HeaderKind::RelativeTime], "relative time")?;
        match self.header.float_at(f.slot) {
            Some(offset) => Ok(Some(time::shift(self.reftime()?, f64::from(offset))?)),
            None => Ok(None),
        }
    }

    /// Set a relative-time header from an absolute instant.
    pub fn set_time_at(&mut self, name: &str, instant: DateTime<Utc>) -> Result<()> {
        let f = Self::expect_kind(name, &[HeaderKind::RelativeTime], "relative time")?;
        self.store(f, HeaderValue::Time(instant))
    }

    // --- Distances ---

    /// Compute `dist`, `az`, `baz` and `gcarc` from the station and event
    /// coordinates.
    ///
    /// Without `force`, nothing happens unless `lcalda` is true and all four
    /// coordinates are set. With `force`, a missing coordinate fails with
    /// [`SacError::IncompleteGeodeticInput`].
    pub fn set_distances(&mut self, force: bool) -> Result<()> {
        if !force && self.lcalda()? != Some(true) {
            return Ok(());
        }
        let mut coords = [0.0f64; 4];
        for ((c, slot), name) in coords.iter_mut().zip(GEO_SLOTS).zip(GEO_FIELDS) {
            match self.header.float_at(slot) {
                Some(v) => *c = f64::from(v),
                None if force => return Err(SacError::IncompleteGeodeticInput(name)),
                None => return Ok(()),
            }
        }
        let [stla, stlo, evla, evlo] = coords;
        let (meters, az, baz) = geodetics::distance_azimuth(evla, evlo, stla, stlo)?;
        let km = meters / 1000.0;
        let h = &mut self.header;
        h.set_float_at(slot!(dist), Some(km as f32));
        h.set_float_at(slot!(az), Some(az as f32));
        h.set_float_at(slot!(baz), Some(baz as f32));
        h.set_float_at(slot!(gcarc), Some(geodetics::km_to_degrees(km) as f32));
        Ok(())
    }
}

impl Default for SacTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SacTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in FIELDS {
            match self.get(field.name) {
                Ok(Some(v)) => writeln!(f, "{:>10} = {v}", field.name)?,
                Ok(None) => {}
                Err(_) => writeln!(
                    f,
                    "{:>10} = <invalid {}>",
                    field.name, self.header.ints[field.slot]
                )?,
            }
        }
        Ok(())
    }
}

macro_rules! float_headers {
    ($($get:ident, $set:ident;)*) => {
        impl SacTrace {
            $(
                #[doc = concat!("`", stringify!($get), "` header, `None` when null.")]
                pub fn $get(&self) -> Option<f32> {
                    self.header.float_at(slot!($get))
                }

                #[doc = concat!("Set `", stringify!($get), "`; `None` stores the null sentinel.")]
                pub fn $set(&mut self, value: Option<f32>) {
                    self.header.set_float_at(slot!($get), value);
                }
            )*
        }
    };
}

/// Coordinate headers: setting one re-runs the distance computation.
macro_rules! geo_headers {
    ($($get:ident, $set:ident;)*) => {
        impl SacTrace {
            $(
                #[doc = concat!("`", stringify!($get), "` header, `None` when null.")]
                pub fn $get(&self) -> Option<f32> {
                    self.header.float_at(slot!($get))
                }

                #[doc = concat!("Set `", stringify!($get), "` and recompute distances when `lcalda` is true.")]
                pub fn $set(&mut self, value: Option<f32>) -> Result<()> {
                    self.header.set_float_at(slot!($get), value);
                    self.set_distances(false)
                }
            )*
        }
    };
}

macro_rules! int_headers {
    ($($get:ident, $set:ident;)*) => {
        impl SacTrace {
            $(
                #[doc = concat!("`", stringify!($get), "` header, `None` when null.")]
                pub fn $get(&self) -> Option<i32> {
                    self.header.int_at(slot!($get))
                }

                #[doc = concat!("Set `", stringify!($get), "`; `None` stores the null sentinel.")]
                pub fn $set(&mut self, value: Option<i32>) {
                    self.header.set_int_at(slot!($get), value);
                }
            )*
        }
    };
}

macro_rules! bool_headers {
    ($($get:ident, $set:ident;)*) => {
        impl SacTrace {
            $(
                #[doc = concat!("`", stringify!($get), "` header, `None` when null.")]
                pub fn $get(&self) -> Result<Option<bool>> {
                    self.decode_bool(field!($get))
                }

                #[doc = concat!("Set `", stringify!($get), "`; `None` stores the null sentinel.")]
                pub fn $set(&mut self, value: Option<bool>) {
                    self.header.set_int_at(slot!($get), value.map(i32::from));
                }
            )*
        }
    };
}

macro_rules! enum_headers {
    ($($get:ident, $set:ident;)*) => {
        impl SacTrace {
            $(
                #[doc = concat!("Symbolic `", stringify!($get), "` header, `None` when null.")]
                pub fn $get(&self) -> Result<Option<&'static str>> {
                    self.decode_enum(field!($get))
                }

                #[doc = concat!("Set `", stringify!($get), "` by symbol; `None` stores the null sentinel.")]
                pub fn $set(&mut self, value: Option<&str>) -> Result<()> {
                    self.store_enum(field!($get), value)
                }
            )*
        }
    };
}

macro_rules! string_headers {
    ($($get:ident, $set:ident;)*) => {
        impl SacTrace {
            $(
                #[doc = concat!("`", stringify!($get), "` header, trimmed, `None` when null.")]
                pub fn $get(&self) -> Option<String> {
                    let f = field!($get);
                    self.header.str_at(f.slot, f.width)
                }

                #[doc = concat!("Set `", stringify!($get), "`, blank-padded and truncated to width.")]
                pub fn $set(&mut self, value: Option<&str>) {
                    let f = field!($get);
                    self.header.set_str_at(f.slot, f.width, value);
                }
            )*
        }
    };
}

float_headers! {
    delta, set_delta;
    depmin, set_depmin;
    depmax, set_depmax;
    scale, set_scale;
    odelta, set_odelta;
    b, set_b;
    e, set_e;
    o, set_o;
    a, set_a;
    t0, set_t0;
    t1, set_t1;
    t2, set_t2;
    t3, set_t3;
    t4, set_t4;
    t5, set_t5;
    t6, set_t6;
    t7, set_t7;
    t8, set_t8;
    t9, set_t9;
    f, set_f;
    resp0, set_resp0;
    resp1, set_resp1;
    resp2, set_resp2;
    resp3, set_resp3;
    resp4, set_resp4;
    resp5, set_resp5;
    resp6, set_resp6;
    resp7, set_resp7;
    resp8, set_resp8;
    resp9, set_resp9;
    stel, set_stel;
    stdp, set_stdp;
    evel, set_evel;
    evdp, set_evdp;
    mag, set_mag;
    user0, set_user0;
    user1, set_user1;
    user2, set_user2;
    user3, set_user3;
    user4, set_user4;
    user5, set_user5;
    user6, set_user6;
    user7, set_user7;
    user8, set_user8;
    user9, set_user9;
    dist, set_dist;
    az, set_az;
    baz, set_baz;
    gcarc, set_gcarc;
    depmen, set_depmen;
    cmpaz, set_cmpaz;
    cmpinc, set_cmpinc;
    xminimum, set_xminimum;
    xmaximum, set_xmaximum;
    yminimum, set_yminimum;
    ymaximum, set_ymaximum;
}

geo_headers! {
    stla, set_stla;
    stlo, set_stlo;
    evla, set_evla;
    evlo, set_evlo;
}

int_headers! {
    nzyear, set_nzyear;
    nzjday, set_nzjday;
    nzhour, set_nzhour;
    nzmin, set_nzmin;
    nzsec, set_nzsec;
    nzmsec, set_nzmsec;
    nvhdr, set_nvhdr;
    norid, set_norid;
    nevid, set_nevid;
    npts, set_npts;
    nwfid, set_nwfid;
    nxsize, set_nxsize;
    nysize, set_nysize;
    iinst, set_iinst;
    istreg, set_istreg;
    ievreg, set_ievreg;
    iqual, set_iqual;
}

bool_headers! {
    leven, set_leven;
    lpspol, set_lpspol;
    lovrok, set_lovrok;
}

impl SacTrace {
    /// `lcalda` header, `None` when null.
    pub fn lcalda(&self) -> Result<Option<bool>> {
        self.decode_bool(field!(lcalda))
    }

    /// Set `lcalda`; turning it on computes distances when coordinates are set.
    pub fn set_lcalda(&mut self, value: Option<bool>) -> Result<()> {
        self.header.set_int_at(slot!(lcalda), value.map(i32::from));
        self.set_distances(false)
    }
}

enum_headers! {
    iftype, set_iftype;
    idep, set_idep;
    iztype, set_iztype;
    ievtyp, set_ievtyp;
    isynth, set_isynth;
    imagtyp, set_imagtyp;
    imagsrc, set_imagsrc;
}

string_headers! {
    kstnm, set_kstnm;
    kevnm, set_kevnm;
    khole, set_khole;
    ko, set_ko;
    ka, set_ka;
    kt0, set_kt0;
    kt1, set_kt1;
    kt2, set_kt2;
    kt3, set_kt3;
    kt4, set_kt4;
    kt5, set_kt5;
    kt6, set_kt6;
    kt7, set_kt7;
    kt8, set_kt8;
    kt9, set_kt9;
    kf, set_kf;
    kuser0, set_kuser0;
    kuser1, set_kuser1;
    kuser2, set_kuser2;
    kcmpnm, set_kcmpnm;
    knetwk, set_knetwk;
    kdatrd, set_kdatrd;
    kinst, set_kinst;
}
