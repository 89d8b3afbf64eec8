//! Pure Rust reader and writer for SAC (Seismic Analysis Code) trace files.
//!
//! Zero `unsafe`. Supports little- and big-endian binary files with byte
//! order detection, the alphanumeric layout, header-only reads and in-place
//! header updates, null-aware typed header access, reference-time shifts
//! that keep relative times anchored, and WGS84 distance computation.
//!
//! # Building and encoding a trace
//!
//! ```
//! use sac_rs::{ReadOptions, SacTrace, WriteOptions};
//!
//! let mut sac = SacTrace::new().with_data(vec![0.0, 1.0, 0.0, -1.0]);
//! sac.set_kstnm(Some("ANMO"));
//! sac.set_delta(Some(0.05));
//!
//! let bytes = sac.to_bytes(&WriteOptions::new()).unwrap();
//! let back = SacTrace::from_bytes(&bytes, &ReadOptions::new()).unwrap();
//!
//! assert_eq!(back.kstnm().as_deref(), Some("ANMO"));
//! assert_eq!(back.npts(), Some(4));
//! assert_eq!(back.depmax(), Some(1.0));
//! ```
//!
//! # Null headers
//!
//! Unset headers hold the SAC sentinels (`-12345`) on disk and read as `None`.
//!
//! ```
//! use sac_rs::{HeaderValue, SacTrace};
//!
//! let mut sac = SacTrace::new();
//! assert_eq!(sac.stla(), None);
//! assert_eq!(sac.header().floats[31], -12345.0);
//!
//! sac.set("kevnm", "Tohoku").unwrap();
//! assert_eq!(sac.get("kevnm").unwrap(), Some(HeaderValue::from("Tohoku")));
//! sac.clear("kevnm").unwrap();
//! assert_eq!(sac.kevnm(), None);
//! ```
//!
//! # Moving the reference time
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use sac_rs::SacTrace;
//!
//! let mut sac = SacTrace::new();
//! sac.set_a(Some(20.0));
//! let reftime = sac.reftime().unwrap();
//!
//! // relative times are shifted so their absolute instants stay put
//! sac.set_reftime(reftime + TimeDelta::seconds(5)).unwrap();
//! assert_eq!(sac.a(), Some(15.0));
//! assert_eq!(sac.nzsec(), Some(5));
//! assert_eq!(
//!     sac.time_at("a").unwrap(),
//!     Some(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 20).unwrap()),
//! );
//! ```
//!
//! # Distances
//!
//! ```
//! use sac_rs::SacTrace;
//!
//! let mut sac = SacTrace::new();
//! sac.set_stla(Some(34.95)).unwrap();
//! sac.set_stlo(Some(-106.46)).unwrap();
//! sac.set_evla(Some(38.3)).unwrap();
//! sac.set_evlo(Some(142.4)).unwrap();
//! assert_eq!(sac.gcarc(), None);
//!
//! sac.set_lcalda(Some(true)).unwrap();
//! let gcarc = sac.gcarc().unwrap();
//! assert!(gcarc > 80.0 && gcarc < 86.0);
//! ```

pub mod ascii;
pub mod binary;
pub mod convert;
pub mod error;
pub mod geodetics;
pub mod header;
pub mod io;
pub mod time;
pub mod trace;
pub mod types;

pub use error::{Result, SacError};
pub use header::{FNULL, HeaderField, INULL, SNULL, SacHeader};
pub use trace::SacTrace;
pub use types::{ByteOrder, HeaderKind, HeaderValue};

pub use binary::HEADER_SIZE;
pub use convert::{Stats, Trace};
pub use io::{ReadOptions, WriteOptions, read, read_bytes, write, write_bytes};
