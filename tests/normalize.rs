//! Integration tests for raw decoding and normalization.

mod support;

use fblthp_archive::{load_raw_cards, normalize_all, normalize_each, Card, CardError};
use support::{face, fixture, printing};

#[test]
fn bulk_fixture_expands_per_finish() {
    let raws = load_raw_cards(fixture("default-cards.json")).unwrap();
    assert_eq!(raws.len(), 3);

    let cards = normalize_all(&raws).unwrap();
    // 2 finishes + 1 finish + 3 finishes
    assert_eq!(cards.len(), 6);

    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Fury Sliver",
            "Fury Sliver",
            "Delver of Secrets // Insectile Aberration",
            "Fire // Ice",
            "Fire // Ice",
            "Fire // Ice",
        ]
    );
}

#[test]
fn transform_card_keeps_both_faces() {
    let raws = load_raw_cards(fixture("default-cards.json")).unwrap();
    let cards = raws[1].to_cards().unwrap();
    assert_eq!(cards.len(), 1);

    let delver = &cards[0];
    assert_eq!(delver.types, vec!["Creature", "Creature"]);
    assert_eq!(delver.subtypes, vec!["Human", "Wizard", "Human", "Insect"]);
    assert_eq!(delver.subcards.len(), 2);

    let back = &delver.subcards[1];
    assert_eq!(back.name, "Insectile Aberration");
    assert_eq!(back.finish, "nonfoil");
    assert_eq!(back.subtypes, vec!["Human", "Insect"]);
    assert_eq!(back.color_identity, vec!["U"]);
    assert_eq!(back.artist_ids, vec!["8ab3fa1d-8b4d-4e1b-aa1d-5d4d3e0e7f7f"]);
}

#[test]
fn split_card_subcards_are_per_finish_values() {
    let raws = load_raw_cards(fixture("default-cards.json")).unwrap();
    let cards = raws[2].to_cards().unwrap();

    let finishes: Vec<&str> = cards.iter().map(|c| c.finish.as_str()).collect();
    assert_eq!(finishes, vec!["nonfoil", "foil", "etched"]);

    for card in &cards {
        assert_eq!(card.types, vec!["Instant", "Instant"]);
        assert!(card.subtypes.is_empty());
        let sub_finishes: Vec<&str> = card.subcards.iter().map(|s| s.finish.as_str()).collect();
        assert_eq!(sub_finishes, vec![card.finish.as_str(); 2]);
    }
}

#[test]
fn two_finishes_differ_only_in_finish() {
    let cards = printing("Llanowar Elves", &["nonfoil", "foil"]).to_cards().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(
        Card { finish: String::new(), ..cards[0].clone() },
        Card { finish: String::new(), ..cards[1].clone() }
    );
    assert!(cards.iter().all(|c| c.subcards.is_empty()));
}

#[test]
fn one_face_one_finish() {
    let raw = fblthp_archive::RawCard {
        card_faces: Some(vec![face("Brazen Borrower", "Creature — Faerie Rogue")]),
        ..printing("Brazen Borrower // Petty Theft", &["foil"])
    };

    let cards = raw.to_cards().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].subcards.len(), 1);
    assert_eq!(cards[0].subcards[0].finish, cards[0].finish);
}

#[test]
fn broken_record_aborts_fail_fast_batch() {
    let raws = load_raw_cards(fixture("broken-cards.json")).unwrap();
    assert_eq!(normalize_all(&raws).unwrap_err(), CardError::MissingSetCode);
}

#[test]
fn broken_record_is_reported_per_record() {
    let raws = load_raw_cards(fixture("broken-cards.json")).unwrap();
    let report = normalize_each(&raws);

    let names: Vec<&str> = report.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Llanowar Elves", "Birds of Paradise"]);

    assert_eq!(report.rejected.len(), 1);
    let rejected = &report.rejected[0];
    assert_eq!(rejected.index, 1);
    assert_eq!(rejected.external_id.as_deref(), Some("no-set"));
    assert_eq!(rejected.name.as_deref(), Some("Lost Card"));
    assert_eq!(rejected.error.code(), "CA003");
}

#[test]
fn card_json_round_trip() {
    let raws = load_raw_cards(fixture("default-cards.json")).unwrap();
    for card in normalize_all(&raws).unwrap() {
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
