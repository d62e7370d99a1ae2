//! Expansion of raw printings into canonical cards.
//!
//! A printing with N finishes becomes N cards. Faces become `subcards`,
//! re-derived for each finish.

use tracing::{debug, warn};

use super::canonical::Card;
use super::raw::{RawCard, RawCardFace};
use super::type_line::parse_type_line;
use crate::error::CardError;

fn required(value: &Option<String>, missing: CardError) -> Result<&str, CardError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing),
    }
}

fn list(value: &Option<Vec<String>>) -> Vec<String> {
    value.clone().unwrap_or_default()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl RawCard {
    /// Expand into one card per declared finish.
    ///
    /// Name, set code and collector number are checked in that order before
    /// any face is looked at. Any face failure fails the whole printing.
    pub fn to_cards(&self) -> Result<Vec<Card>, CardError> {
        let mut cards = Vec::with_capacity(self.finishes().len());

        for finish in self.finishes() {
            let name = required(&self.name, CardError::MissingName)?;
            let set_code = required(&self.set, CardError::MissingSetCode)?;
            let collector_number =
                required(&self.collector_number, CardError::MissingCollectorNumber)?;

            let type_line = parse_type_line(self.type_line.as_deref().unwrap_or_default())?;

            let mut card = Card {
                id: 0,
                name: name.to_string(),
                layout: text(&self.layout),
                finish: finish.clone(),
                subcards: Vec::with_capacity(self.faces().len()),
                cmc: self.cmc.unwrap_or_default(),
                colors: list(&self.colors),
                color_identity: list(&self.color_identity),
                types: type_line.types,
                subtypes: type_line.subtypes,
                set_code: set_code.to_string(),
                oracle_text: text(&self.oracle_text),
                keywords: list(&self.keywords),
                collector_number: collector_number.to_string(),
                artist_ids: list(&self.artist_ids),
            };

            for face in self.faces() {
                card.subcards.push(face.to_card(&card)?);
            }

            cards.push(card);
        }

        Ok(cards)
    }
}

impl RawCardFace {
    /// Build the subcard for this face. Set code, collector number and
    /// finish come from `parent`.
    pub fn to_card(&self, parent: &Card) -> Result<Card, CardError> {
        let name = required(&self.name, CardError::MissingName)?;
        let type_line = parse_type_line(self.type_line.as_deref().unwrap_or_default())?;

        Ok(Card {
            id: 0,
            name: name.to_string(),
            layout: text(&self.layout),
            finish: parent.finish.clone(),
            subcards: Vec::new(),
            cmc: self.cmc.unwrap_or_default(),
            colors: list(&self.colors),
            color_identity: list(&self.color_indicator),
            types: type_line.types,
            subtypes: type_line.subtypes,
            set_code: parent.set_code.clone(),
            oracle_text: text(&self.oracle_text),
            keywords: Vec::new(),
            collector_number: parent.collector_number.clone(),
            artist_ids: self.artist_id.iter().filter(|id| !id.is_empty()).cloned().collect(),
        })
    }
}

/// Normalize a batch, stopping at the first printing that fails.
pub fn normalize_all(raws: &[RawCard]) -> Result<Vec<Card>, CardError> {
    let mut cards = Vec::with_capacity(raws.len());
    for raw in raws {
        cards.extend(raw.to_cards()?);
    }
    debug!(raw = raws.len(), cards = cards.len(), "normalized batch");
    Ok(cards)
}

/// A printing that failed normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position in the input batch.
    pub index: usize,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub error: CardError,
}

/// Outcome of [`normalize_each`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub cards: Vec<Card>,
    pub rejected: Vec<RejectedRecord>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Normalize a batch, keeping every printing that succeeds and recording
/// the ones that fail.
pub fn normalize_each(raws: &[RawCard]) -> BatchReport {
    let mut report = BatchReport::default();
    for (index, raw) in raws.iter().enumerate() {
        match raw.to_cards() {
            Ok(cards) => report.cards.extend(cards),
            Err(error) => {
                warn!(
                    index,
                    id = raw.id.as_deref().unwrap_or("-"),
                    code = error.code(),
                    "rejected printing: {}",
                    error
                );
                report.rejected.push(RejectedRecord {
                    index,
                    external_id: raw.id.clone(),
                    name: raw.name.clone(),
                    error,
                });
            }
        }
    }
    report
}
