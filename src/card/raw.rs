//! Raw printing schema, mirroring the Scryfall card object.
//!
//! Decoding is lenient: every field may be absent or `null`, and unknown
//! fields are ignored. Nothing is validated here; see [`crate::card::normalize`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::FeedError;
use crate::feed::read_json;

/// One printing as it appears in the bulk feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCard {
    // Core fields
    pub id: Option<String>,
    pub arena_id: Option<u64>,
    pub mtgo_id: Option<u64>,
    pub mtgo_foil_id: Option<u64>,
    pub multiverse_ids: Option<Vec<u64>>,
    pub tcgplayer_id: Option<u64>,
    pub tcgplayer_etched_id: Option<u64>,
    pub cardmarket_id: Option<u64>,
    pub object: Option<String>,
    pub lang: Option<String>,
    pub layout: Option<String>,
    pub oracle_id: Option<String>,
    pub prints_search_uri: Option<String>,
    pub rulings_uri: Option<String>,
    pub scryfall_uri: Option<String>,
    pub uri: Option<String>,

    // Gameplay fields
    pub all_parts: Option<Vec<RelatedCard>>,
    pub card_faces: Option<Vec<RawCardFace>>,
    pub cmc: Option<f64>,
    pub color_identity: Option<Vec<String>>,
    pub color_indicator: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub defense: Option<String>,
    pub edhrec_rank: Option<u64>,
    pub hand_modifier: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub legalities: Option<BTreeMap<String, String>>,
    pub life_modifier: Option<String>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: Option<String>,
    pub oracle_text: Option<String>,
    pub penny_rank: Option<u64>,
    pub power: Option<String>,
    pub produced_mana: Option<Vec<String>>,
    pub reserved: Option<bool>,
    pub toughness: Option<String>,
    pub type_line: Option<String>,

    // Print fields
    pub artist: Option<String>,
    pub artist_ids: Option<Vec<String>>,
    pub attraction_lights: Option<Vec<u32>>,
    pub booster: Option<bool>,
    pub border_color: Option<String>,
    pub card_back_id: Option<String>,
    pub collector_number: Option<String>,
    pub content_warning: Option<bool>,
    pub digital: Option<bool>,
    pub finishes: Option<Vec<String>>,
    pub flavor_name: Option<String>,
    pub flavor_text: Option<String>,
    pub frame_effects: Option<Vec<String>>,
    pub frame: Option<String>,
    pub full_art: Option<bool>,
    pub games: Option<Vec<String>>,
    pub highres_image: Option<bool>,
    pub illustration_id: Option<String>,
    pub image_status: Option<String>,
    pub image_uris: Option<BTreeMap<String, String>>,
    pub oversized: Option<bool>,
    pub prices: Option<BTreeMap<String, Option<String>>>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub promo: Option<bool>,
    pub promo_types: Option<Vec<String>>,
    pub purchase_uris: Option<BTreeMap<String, String>>,
    pub rarity: Option<String>,
    pub related_uris: Option<BTreeMap<String, String>>,
    pub released_at: Option<String>,
    pub reprint: Option<bool>,
    pub scryfall_set_uri: Option<String>,
    pub set_name: Option<String>,
    pub set_search_uri: Option<String>,
    pub set_type: Option<String>,
    pub set_uri: Option<String>,
    pub set: Option<String>,
    pub set_id: Option<String>,
    pub story_spotlight: Option<bool>,
    pub textless: Option<bool>,
    pub variation: Option<bool>,
    pub variation_of: Option<String>,
    pub watermark: Option<String>,
}

/// One face of a multi-faced printing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCardFace {
    pub artist: Option<String>,
    pub artist_id: Option<String>,
    pub cmc: Option<f64>,
    pub color_indicator: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub defense: Option<String>,
    pub flavor_text: Option<String>,
    pub illustration_id: Option<String>,
    pub image_uris: Option<BTreeMap<String, String>>,
    pub layout: Option<String>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: Option<String>,
    pub object: Option<String>,
    pub oracle_id: Option<String>,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub toughness: Option<String>,
    pub type_line: Option<String>,
    pub watermark: Option<String>,
}

/// Reference to another card this printing is related to (tokens, meld parts, combo pieces).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelatedCard {
    pub id: Option<String>,
    pub object: Option<String>,
    pub component: Option<String>,
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub uri: Option<String>,
}

impl RawCard {
    /// Declared finishes, in feed order.
    pub fn finishes(&self) -> &[String] {
        self.finishes.as_deref().unwrap_or_default()
    }

    /// Declared faces, in feed order.
    pub fn faces(&self) -> &[RawCardFace] {
        self.card_faces.as_deref().unwrap_or_default()
    }
}

/// Load every raw printing from a bulk payload file.
pub fn load_raw_cards(path: impl AsRef<Path>) -> Result<Vec<RawCard>, FeedError> {
    let path = path.as_ref();
    info!(path = %path.display(), "decoding raw cards");
    let cards: Vec<RawCard> = read_json(path)?;
    info!(count = cards.len(), "decoded raw cards");
    Ok(cards)
}
