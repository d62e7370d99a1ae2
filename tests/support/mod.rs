//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use fblthp_archive::{RawCard, RawCardFace};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// A valid single-faced printing.
pub fn printing(name: &str, finishes: &[&str]) -> RawCard {
    RawCard {
        id: Some(format!("{}-id", name.to_lowercase().replace(' ', "-"))),
        name: Some(name.into()),
        layout: Some("normal".into()),
        type_line: Some("Creature — Elf Druid".into()),
        cmc: Some(1.0),
        colors: strings(&["G"]),
        color_identity: strings(&["G"]),
        keywords: strings(&[]),
        set: Some("dom".into()),
        collector_number: Some("168".into()),
        artist_ids: strings(&["artist-1"]),
        finishes: strings(finishes),
        ..RawCard::default()
    }
}

pub fn face(name: &str, type_line: &str) -> RawCardFace {
    RawCardFace {
        name: Some(name.into()),
        type_line: Some(type_line.into()),
        oracle_text: Some(format!("{} text", name)),
        ..RawCardFace::default()
    }
}
