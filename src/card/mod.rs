//! Card model: the raw feed schema, the canonical card, and the
//! normalization between them.

mod canonical;
mod normalize;
mod raw;
mod type_line;

pub use canonical::Card;
pub use normalize::{normalize_all, normalize_each, BatchReport, RejectedRecord};
pub use raw::{load_raw_cards, RawCard, RawCardFace, RelatedCard};
pub use type_line::{parse_type_line, TypeLine, FACE_SEPARATOR, SUBTYPE_SEPARATOR};
