//! Conversion between [`SacTrace`] and the format-neutral [`Trace`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::header::REFTIME_FIELDS;
use crate::time;
use crate::trace::SacTrace;
use crate::types::HeaderValue;
use crate::Result;

/// Metadata of a format-neutral trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
    /// Time of the first sample.
    pub starttime: DateTime<Utc>,
    /// Sample interval in seconds.
    pub delta: f64,
    pub npts: usize,
    /// Every non-null SAC header, when the trace came from or is bound for SAC.
    pub sac: Option<BTreeMap<String, HeaderValue>>,
}

/// A format-neutral trace: metadata plus samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub stats: Stats,
    pub data: Vec<f32>,
}

impl Trace {
    pub fn new(data: Vec<f32>) -> Self {
        let stats = Stats {
            delta: 1.0,
            npts: data.len(),
            ..Stats::default()
        };
        Self { stats, data }
    }

    pub fn with_nslc(mut self, network: &str, station: &str, location: &str, channel: &str) -> Self {
        self.stats.network = network.to_string();
        self.stats.station = station.to_string();
        self.stats.location = location.to_string();
        self.stats.channel = channel.to_string();
        self
    }

    pub fn with_starttime(mut self, starttime: DateTime<Utc>) -> Self {
        self.stats.starttime = starttime;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.stats.delta = delta;
        self
    }

    pub fn with_sac_headers(mut self, sac: BTreeMap<String, HeaderValue>) -> Self {
        self.stats.sac = Some(sac);
        self
    }

    /// Identifier in `NET.STA.LOC.CHA` form.
    pub fn id(&self) -> String {
        let s = &self.stats;
        format!("{}.{}.{}.{}", s.network, s.station, s.location, s.channel)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

impl SacTrace {
    /// Build a SAC trace from a format-neutral one.
    ///
    /// Headers in `stats.sac` are applied first. The identifier strings,
    /// `delta` and the samples of `trace` then override them. The reference
    /// time comes from `stats.sac` when all six of its fields are present;
    /// otherwise it is `starttime` and `iztype` becomes `ib`. `b` is always
    /// the offset of `starttime` from the reference time.
    pub fn from_trace(trace: &Trace) -> Result<Self> {
        let stats = &trace.stats;
        let mut sac = match &stats.sac {
            Some(map) => SacTrace::from_headers(map.iter().map(|(k, v)| (k, v.clone())), None)?,
            None => SacTrace::new(),
        };

        sac.set_knetwk(non_empty(&stats.network));
        sac.set_kstnm(non_empty(&stats.station));
        sac.set_khole(non_empty(&stats.location));
        sac.set_kcmpnm(non_empty(&stats.channel));
        sac.set_delta(Some(stats.delta as f32));

        let has_reftime = stats.sac.as_ref().is_some_and(|map| {
            REFTIME_FIELDS
                .iter()
                .all(|name| matches!(map.get(*name), Some(HeaderValue::Int(_))))
        });
        if !has_reftime {
            let reftime = time::round_to_millisecond(stats.starttime)?;
            for (name, v) in REFTIME_FIELDS.into_iter().zip(time::decompose(reftime)) {
                sac.set_int(name, Some(v))?;
            }
            sac.set_iztype(Some("ib"))?;
        }
        let b = time::seconds_between(stats.starttime, sac.reftime()?);
        sac.set_b(Some(b as f32));

        sac.set_data(Some(trace.data.clone()));
        sac.set_distances(false)?;
        Ok(sac)
    }

    /// Convert to a format-neutral trace.
    ///
    /// `starttime` is the reference time plus `b`; an incomplete reference
    /// time counts as 1970-01-01 and a null `b` as zero. A trace read
    /// header-only converts with no samples but keeps its stored `npts`.
    pub fn to_trace(&self) -> Result<Trace> {
        let reftime = match self.reftime() {
            Ok(t) => t,
            Err(e) => {
                log::debug!("start time measured from the epoch: {e}");
                DateTime::<Utc>::UNIX_EPOCH
            }
        };
        let b = self.b().map_or(0.0, f64::from);
        let data = self.data().map(<[f32]>::to_vec).unwrap_or_default();
        let npts = match self.data() {
            Some(d) => d.len(),
            None => self.npts().and_then(|n| usize::try_from(n).ok()).unwrap_or(0),
        };

        let sac = self
            .headers()?
            .into_iter()
            .map(|(name, v)| (name.to_string(), v))
            .collect();

        let stats = Stats {
            network: self.knetwk().unwrap_or_default(),
            station: self.kstnm().unwrap_or_default(),
            location: self.khole().unwrap_or_default(),
            channel: self.kcmpnm().unwrap_or_default(),
            starttime: time::shift(reftime, b)?,
            delta: self.delta().map_or(1.0, f64::from),
            npts,
            sac: Some(sac),
        };
        Ok(Trace { stats, data })
    }
}

impl TryFrom<&Trace> for SacTrace {
    type Error = crate::SacError;

    fn try_from(trace: &Trace) -> Result<Self> {
        SacTrace::from_trace(trace)
    }
}

impl TryFrom<&SacTrace> for Trace {
    type Error = crate::SacError;

    fn try_from(sac: &SacTrace) -> Result<Self> {
        sac.to_trace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn starttime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2004, 12, 26, 0, 58, 53).unwrap() + TimeDelta::milliseconds(450)
    }

    #[test]
    fn test_from_plain_trace() {
        let trace = Trace::new(vec![1.0, 2.0, 3.0])
            .with_nslc("IU", "ANMO", "00", "BHZ")
            .with_starttime(starttime())
            .with_delta(0.05);
        let sac = SacTrace::from_trace(&trace).unwrap();

        assert_eq!(sac.knetwk().as_deref(), Some("IU"));
        assert_eq!(sac.kstnm().as_deref(), Some("ANMO"));
        assert_eq!(sac.khole().as_deref(), Some("00"));
        assert_eq!(sac.kcmpnm().as_deref(), Some("BHZ"));
        assert_eq!(sac.delta(), Some(0.05));
        assert_eq!(sac.npts(), Some(3));
        assert_eq!(sac.reftime().unwrap(), starttime());
        assert_eq!(sac.b(), Some(0.0));
        assert_eq!(sac.iztype().unwrap(), Some("ib"));
        assert_eq!(sac.data(), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_empty_location_is_null() {
        let trace = Trace::new(vec![]).with_nslc("IU", "ANMO", "", "BHZ");
        let sac = SacTrace::from_trace(&trace).unwrap();
        assert_eq!(sac.khole(), None);
        assert_eq!(sac.npts(), Some(0));
    }

    #[test]
    fn test_stats_strings_take_precedence() {
        let mut map = BTreeMap::new();
        map.insert("kstnm".to_string(), HeaderValue::from("OLD"));
        map.insert("kevnm".to_string(), HeaderValue::from("Sumatra"));
        let trace = Trace::new(vec![0.0; 4])
            .with_nslc("IU", "NEW", "", "BHZ")
            .with_sac_headers(map);
        let sac = SacTrace::from_trace(&trace).unwrap();
        assert_eq!(sac.kstnm().as_deref(), Some("NEW"));
        assert_eq!(sac.kevnm().as_deref(), Some("Sumatra"));
    }

    #[test]
    fn test_sac_reftime_is_kept() {
        let mut map = BTreeMap::new();
        for (name, v) in REFTIME_FIELDS.into_iter().zip([2004, 361, 0, 58, 50, 0]) {
            map.insert(name.to_string(), HeaderValue::Int(v));
        }
        map.insert("o".to_string(), HeaderValue::Float(0.0));
        let trace = Trace::new(vec![0.0; 4]).with_starttime(starttime());
        let trace = trace.with_sac_headers(map);

        let sac = SacTrace::from_trace(&trace).unwrap();
        assert_eq!(sac.nzsec(), Some(50));
        assert!((sac.b().unwrap() - 3.45).abs() < 1e-6);
        assert_eq!(sac.o(), Some(0.0));
    }

    #[test]
    fn test_to_trace() {
        let mut sac = SacTrace::from_headers([("b", 2.5f32), ("delta", 0.01)], None).unwrap();
        sac.set_kstnm(Some("ANMO"));
        sac.set_knetwk(Some("IU"));
        sac.set_kcmpnm(Some("BHZ"));
        sac.set_data(Some(vec![1.0; 10]));

        let trace = sac.to_trace().unwrap();
        assert_eq!(trace.id(), "IU.ANMO..BHZ");
        assert_eq!(trace.stats.npts, 10);
        assert!((trace.stats.delta - 0.01).abs() < 1e-9);
        assert_eq!(
            trace.stats.starttime,
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 2).unwrap() + TimeDelta::milliseconds(500)
        );
        let map = trace.stats.sac.as_ref().unwrap();
        assert_eq!(map.get("kstnm"), Some(&HeaderValue::Text("ANMO".into())));
        assert!(!map.contains_key("kevnm"));
    }

    #[test]
    fn test_conversion_round_trip() {
        let mut sac = SacTrace::from_headers(
            [
                ("nzyear", HeaderValue::Int(2011)),
                ("nzjday", HeaderValue::Int(70)),
                ("nzhour", HeaderValue::Int(5)),
                ("b", HeaderValue::Float(-5.0)),
                ("a", HeaderValue::Float(12.25)),
                ("kstnm", HeaderValue::from("MAJO")),
                ("knetwk", HeaderValue::from("IU")),
                ("kcmpnm", HeaderValue::from("BHZ")),
            ],
            None,
        )
        .unwrap();
        sac.set_data(Some(vec![3.0, 1.0, 2.0]));

        let trace = Trace::try_from(&sac).unwrap();
        let back = SacTrace::try_from(&trace).unwrap();
        assert_eq!(back.header(), sac.header());
        assert_eq!(back.data(), sac.data());
    }
}
