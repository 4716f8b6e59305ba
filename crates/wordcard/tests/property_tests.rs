//! Property-based tests for the Curator.
//!
//! These tests use proptest to generate random raw records and verify that
//! curation maintains its invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p wordcard --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p wordcard --test property_tests
//! ```

use proptest::prelude::*;

use wordcard::{Curator, RawDefinition, RawRecord, RawWordType};

// =============================================================================
// Test Strategies
// =============================================================================

/// Definition texts, some of them marked as outdated.
fn definition_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,\\.]{0,40}",
        "\\(archaic\\) [a-z ]{0,20}",
        "[a-z ]{0,10}dated[a-z ]{0,10}",
        "\\(Archaic\\) [a-z ]{0,20}",
    ]
}

fn quotations() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[a-zé😀 ]{0,30}", 0..5))
}

fn raw_definition() -> impl Strategy<Value = RawDefinition> {
    (definition_text(), quotations()).prop_map(|(text, quotations)| {
        let mut definition = RawDefinition::new(text);
        definition.quotations = quotations;
        definition
    })
}

fn raw_word_type() -> impl Strategy<Value = RawWordType> {
    ("[A-Z][a-z]{2,10}", prop::collection::vec(raw_definition(), 0..6)).prop_map(
        |(kind, definitions)| {
            let mut word_type = RawWordType::new(kind);
            word_type.definitions = definitions;
            word_type
        },
    )
}

fn words() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[a-z]{1,12}", 0..15))
}

fn raw_record() -> impl Strategy<Value = RawRecord> {
    (
        "[a-z]{1,12}",
        prop::option::of("[a-z\\-]{1,12}\\.ogg"),
        prop::collection::vec(raw_word_type(), 0..7),
        words(),
        words(),
    )
        .prop_map(|(title, audio, types, synonyms, translations)| {
            let mut record = RawRecord::new(title);
            if let Some(audio) = audio {
                let url = format!("http://example.org/{}", audio);
                record = record.with_audio(audio, url);
            }
            record.types = types;
            record.synonyms = synonyms;
            record.translations = translations;
            record
        })
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn curated_types_are_never_empty(raw in raw_record()) {
        let curated = Curator::new().curate(&raw);

        let expected = raw.types.iter().filter(|t| !t.definitions.is_empty()).count();
        prop_assert_eq!(curated.types.len(), expected);
        for word_type in &curated.types {
            prop_assert!(!word_type.definitions.is_empty());
            prop_assert!(word_type.include);
        }
    }

    #[test]
    fn retained_types_keep_raw_order(raw in raw_record()) {
        let curated = Curator::new().curate(&raw);

        let raw_texts: Vec<Vec<&str>> = raw
            .types
            .iter()
            .filter(|t| !t.definitions.is_empty())
            .map(|t| t.definitions.iter().map(|d| d.text.as_str()).collect())
            .collect();
        let curated_texts: Vec<Vec<&str>> = curated
            .types
            .iter()
            .map(|t| t.definitions.iter().map(|d| d.text.as_str()).collect())
            .collect();

        prop_assert_eq!(raw_texts, curated_texts);
    }

    #[test]
    fn included_definitions_follow_rules(raw in raw_record()) {
        let curated = Curator::new().curate(&raw);

        // Pair each curated type with its original position
        let original_indices = raw
            .types
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.definitions.is_empty())
            .map(|(i, _)| i);

        for (type_index, word_type) in original_indices.zip(&curated.types) {
            for (definition_index, definition) in word_type.definitions.iter().enumerate() {
                let outdated = definition.text.contains("archaic") || definition.text.contains("dated");
                let expected = !outdated && type_index < 3 && definition_index < 3;
                prop_assert_eq!(definition.include, expected);
            }
        }
    }

    #[test]
    fn one_shortest_quotation_per_included_definition(raw in raw_record()) {
        let curated = Curator::new().curate(&raw);

        for definition in curated.definitions() {
            let Some(quotations) = definition.quotations.as_ref() else {
                continue;
            };
            prop_assert!(!quotations.is_empty());
            prop_assert!(quotations.iter().all(|q| !q.card_sample));

            let included: Vec<usize> = quotations
                .iter()
                .enumerate()
                .filter(|(_, q)| q.include)
                .map(|(i, _)| i)
                .collect();

            if definition.include {
                let min_len = quotations.iter().map(|q| q.text.encode_utf16().count()).min().unwrap();
                let first_shortest = quotations
                    .iter()
                    .position(|q| q.text.encode_utf16().count() == min_len)
                    .unwrap();
                prop_assert_eq!(included, vec![first_shortest]);
            } else {
                prop_assert!(included.is_empty());
            }
        }
    }

    #[test]
    fn quotations_key_absent_without_quotations(raw in raw_record()) {
        let curated = Curator::new().curate(&raw);

        for (raw_type, word_type) in raw
            .types
            .iter()
            .filter(|t| !t.definitions.is_empty())
            .zip(&curated.types)
        {
            for (raw_def, def) in raw_type.definitions.iter().zip(&word_type.definitions) {
                let has_quotations = raw_def.quotations.as_ref().is_some_and(|q| !q.is_empty());
                prop_assert_eq!(def.quotations.is_some(), has_quotations);
            }
        }
    }

    #[test]
    fn synonyms_and_translations_limits(raw in raw_record()) {
        let curated = Curator::new().curate(&raw);

        prop_assert_eq!(curated.synonyms.is_some(), raw.synonyms.is_some());
        for (i, synonym) in curated.synonyms.iter().flatten().enumerate() {
            prop_assert_eq!(synonym.include, i < 10);
        }

        prop_assert_eq!(curated.translations.is_some(), raw.translations.is_some());
        for (i, translation) in curated.translations.iter().flatten().enumerate() {
            prop_assert_eq!(translation.include, i < 6);
        }

        let has_translations = raw.translations.as_ref().is_some_and(|t| !t.is_empty());
        prop_assert_eq!(curated.card_translate == Some(true), has_translations);
        prop_assert_eq!(curated.card_translate.is_some(), has_translations);
    }

    #[test]
    fn images_are_always_an_array(raw in raw_record()) {
        let doc = serde_json::to_value(Curator::new().curate(&raw)).unwrap();

        prop_assert!(doc["images"].is_array());
        prop_assert_eq!(&doc["card_image"], &serde_json::json!(false));
        prop_assert_eq!(&doc["copyByValue"], &serde_json::json!(true));
    }

    #[test]
    fn curation_is_deterministic(raw in raw_record()) {
        let curator = Curator::new();
        prop_assert_eq!(curator.curate(&raw), curator.curate(&raw));
    }

    #[test]
    fn raw_json_curates_like_raw_struct(raw in raw_record()) {
        // Curating a record read back from its JSON gives the same result
        let text = serde_json::to_string(&raw).unwrap();
        let reread: RawRecord = serde_json::from_str(&text).unwrap();

        let curator = Curator::new();
        prop_assert_eq!(curator.curate(&reread), curator.curate(&raw));
    }
}
