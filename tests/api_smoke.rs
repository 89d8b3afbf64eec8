//! Compile-time smoke test: verify top-level re-exports work.

use sac_rs::{
    ByteOrder, FNULL, HEADER_SIZE, HeaderField, HeaderKind, HeaderValue, INULL, ReadOptions,
    Result, SNULL, SacError, SacHeader, SacTrace, Stats, Trace, WriteOptions, read, read_bytes,
    write, write_bytes,
};

#[test]
fn top_level_imports_compile() {
    // Just verify the items are usable from the crate root
    let _: fn(&[u8], &ReadOptions) -> Result<SacTrace> = read_bytes;
    let _: fn(&mut SacTrace, &WriteOptions) -> Result<Vec<u8>> = write_bytes;
    let _read = |path: &str| read(path, &ReadOptions::new());
    let _write = |sac: &mut SacTrace, path: &str| write(sac, path, &WriteOptions::new());

    let _bo = ByteOrder::Big;
    let _kind = HeaderKind::RelativeTime;
    let _v = HeaderValue::from(1.5f32);
    let _h = SacHeader::null();
    let _f: Option<&HeaderField> = sac_rs::header::field("delta").ok();
    let _t = Trace::new(vec![]);
    let _s = Stats::default();
    assert_eq!(HEADER_SIZE, 632);
    assert_eq!((FNULL, INULL, SNULL), (-12345.0, -12345, "-12345"));

    // SacError is accessible
    let _e: Option<SacError> = None;
}
