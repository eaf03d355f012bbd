// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the word service.
//! Loads word lists through the public API and checks that readers see a
//! consistent vocabulary while it is being replaced.

use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use kupu_lib::config::KupuConfig;
use kupu_lib::data_structures::PrefixIndex;
use kupu_lib::error::load::LoadError;
use kupu_lib::service::{IndexHandle, LookupService, VocabularyLoader};

fn services() -> (VocabularyLoader, LookupService) {
    let config = KupuConfig::default();
    let handle = IndexHandle::new();
    (
        VocabularyLoader::new(config.vocabulary.clone(), handle.clone()),
        LookupService::new(config.vocabulary, config.lookup, handle),
    )
}

#[test]
fn test_cat_car_cart_dog() {
    let (loader, lookup) = services();
    let report = loader.load_text("cat\ncar\ncart\ndog\n");
    assert_eq!(report.word_count, 4);

    let suggestions: HashSet<String> = lookup.suggest("ca").unwrap().suggestions.into_iter().collect();
    let expected: HashSet<String> = ["cat", "car", "cart"].iter().map(|s| s.to_string()).collect();
    assert_eq!(suggestions, expected);

    assert!(lookup.search("car").unwrap().exists);
    assert_eq!(lookup.rank("car").unwrap().rank, 1);
    assert!(!lookup.search("ca").unwrap().exists);

    assert!(lookup.rank("dog").is_err());
    lookup.search("dog").unwrap();
    assert_eq!(lookup.rank("dog").unwrap().rank, 1);
}

#[test]
fn test_nothing_loaded() {
    let index = PrefixIndex::new();
    assert!(index.prefix_query("a").is_empty());
    assert!(!index.search("a"));
    assert_eq!(index.rank("a"), 0);

    let (_, lookup) = services();
    assert!(lookup.suggest("a").unwrap().suggestions.is_empty());
    assert!(!lookup.search("ab").unwrap().exists);
}

#[tokio::test]
async fn test_load_path_with_mixed_line_endings() {
    let (loader, lookup) = services();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Alpha\r\nbeta\rgamma\n\n  delta  \nepsilon1\n").unwrap();

    let report = loader.load_path(file.path()).await.unwrap();
    assert_eq!(report.valid_count, 4);
    assert_eq!(report.invalid_count, 1);

    for word in ["alpha", "beta", "gamma", "delta"] {
        assert!(lookup.search(word).unwrap().exists, "{word} should be stored");
    }
}

#[tokio::test]
async fn test_missing_file_keeps_previous_vocabulary() {
    let (loader, lookup) = services();
    loader.load_text("keep\nthese");

    let err = loader.load_path("/nonexistent/kupu/words.txt").await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(lookup.search("keep").unwrap().exists);
}

/// Readers running while vocabularies are swapped must always see one whole
/// vocabulary, never a mix or a partially built tree.
#[test]
fn test_readers_never_observe_partial_loads() {
    const READER_COUNT: usize = 4;
    const RELOADS: usize = 50;

    let first: Vec<String> = (0..200).map(|i| format!("first{}", to_letters(i))).collect();
    let second: Vec<String> = (0..200).map(|i| format!("second{}", to_letters(i))).collect();

    let handle = IndexHandle::with_index(first.iter().collect());
    let done = Arc::new(AtomicBool::new(false));
    let barrier = Arc::new(Barrier::new(READER_COUNT + 1));

    let readers: Vec<_> = (0..READER_COUNT)
        .map(|_| {
            let handle = handle.clone();
            let done = Arc::clone(&done);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                while !done.load(Ordering::Acquire) {
                    let snapshot = handle.current();
                    let words = snapshot.prefix_query("");
                    assert_eq!(words.len(), 200);
                    let firsts = words.iter().filter(|w| w.starts_with("first")).count();
                    assert!(firsts == 0 || firsts == 200, "mixed vocabulary: {firsts}");
                }
            })
        })
        .collect();

    barrier.wait();
    for round in 0..RELOADS {
        let words = if round % 2 == 0 { &second } else { &first };
        handle.replace(words.iter().collect());
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
}

/// Concurrent searches through the lookup service never lose hits.
#[test]
fn test_concurrent_lookups_count_every_hit() {
    const THREAD_COUNT: usize = 8;
    const SEARCHES_PER_THREAD: u64 = 250;

    let (loader, lookup) = services();
    loader.load_text("popular\nquiet");

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|_| {
            let lookup = lookup.clone();
            thread::spawn(move || {
                for _ in 0..SEARCHES_PER_THREAD {
                    assert!(lookup.search("popular").unwrap().exists);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("search thread panicked");
    }

    assert_eq!(
        lookup.rank("popular").unwrap().rank,
        THREAD_COUNT as u64 * SEARCHES_PER_THREAD
    );
    assert!(lookup.rank("quiet").is_err());
}

#[test]
fn test_version_matches_package() {
    assert_eq!(kupu_lib::VERSION, env!("CARGO_PKG_VERSION"));
}

/// Spells `n` with letters so generated words stay within the accepted alphabet.
fn to_letters(mut n: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    String::from_utf8(letters).unwrap()
}
