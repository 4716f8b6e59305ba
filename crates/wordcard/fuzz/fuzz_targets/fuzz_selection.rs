//! Fuzz target for selection overrides.
//!
//! Applying any selection path to a curated record either succeeds and is
//! visible through `include_at`, or fails and leaves the record unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcard::{CuratedRecord, SelectionPath};

fuzz_target!(|data: &[u8]| {
    let Ok((mut record, path, include)) =
        serde_json::from_slice::<(CuratedRecord, SelectionPath, bool)>(data)
    else {
        return;
    };

    let before = record.clone();
    match record.set_include(&path, include) {
        Ok(()) => assert_eq!(record.include_at(&path), Some(include)),
        Err(_) => assert_eq!(record, before),
    }
});
