use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CardId;

/// One printing in one finish.
///
/// Faces of multi-faced printings are nested in `subcards`, each carrying the
/// same finish as the card that holds them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Assigned by a store; zero until then.
    pub id: CardId,
    pub name: String,
    pub layout: String,
    pub finish: String,
    pub subcards: Vec<Card>,
    pub cmc: f64,
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
    pub set_code: String,
    pub oracle_text: String,
    pub keywords: Vec<String>,
    pub collector_number: String,
    pub artist_ids: Vec<String>,
}

impl Card {
    /// Output file name, unique per set, collector number and finish.
    ///
    /// Each part is reduced to ASCII alphanumerics, `-` and `_`, so the name
    /// never carries a path separator or `..` out of the output directory.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.json",
            file_name_part(&self.set_code),
            file_name_part(&self.collector_number),
            file_name_part(&self.finish)
        )
    }
}

fn file_name_part(part: &str) -> String {
    part.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Card: id={}, name={}, set={}, number={}, finish={}>",
            self.id, self.name, self.set_code, self.collector_number, self.finish
        )
    }
}
