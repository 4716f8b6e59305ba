//! Fuzz target for record parsing and curation.
//!
//! Any JSON that parses as a raw record must curate without panicking, and
//! the curated document must serialize and parse back.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcard::{CuratedRecord, Curator, RawRecord};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(raw) = serde_json::from_slice::<RawRecord>(data) else {
        return;
    };

    let curated = Curator::new().curate(&raw);
    assert!(curated.types.iter().all(|t| !t.definitions.is_empty()));

    let text = serde_json::to_string(&curated).expect("curated record serializes");
    let reread: CuratedRecord = serde_json::from_str(&text).expect("curated record parses");
    assert_eq!(reread.types.len(), curated.types.len());
});
