//! Type line parsing.
//!
//! A type line reads `Types — Subtypes`. Multi-faced cards join the type line
//! of each face with ` // `, e.g. `Instant // Instant` or
//! `Creature — Human // Creature — Werewolf`.

use crate::error::CardError;

/// Separator between the faces of a multi-faced card.
pub const FACE_SEPARATOR: &str = " // ";

/// Separator between types and subtypes (an em dash, not a hyphen).
pub const SUBTYPE_SEPARATOR: &str = " — ";

/// Types and subtypes of a type line, in printed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeLine {
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
}

/// Split a type line into ordered types and subtypes.
///
/// Faces are parsed independently and concatenated in face order. Tokens are
/// split on single spaces with no de-duplication or case folding, so an empty
/// input yields a single empty type.
pub fn parse_type_line(type_line: &str) -> Result<TypeLine, CardError> {
    let faces: Vec<&str> = type_line.split(FACE_SEPARATOR).collect();
    if faces.len() > 1 {
        let mut parsed = TypeLine::default();
        for face in faces {
            let part = parse_type_line(face)
                .map_err(|e| CardError::type_line(type_line, e.to_string()))?;
            parsed.types.extend(part.types);
            parsed.subtypes.extend(part.subtypes);
        }
        return Ok(parsed);
    }

    let parts: Vec<&str> = type_line.split(SUBTYPE_SEPARATOR).collect();
    if parts.len() > 2 {
        return Err(CardError::type_line(type_line, "too many separators"));
    }

    let types = split_tokens(parts[0]);
    let subtypes = match parts.get(1) {
        Some(part) if !part.is_empty() => split_tokens(part),
        _ => Vec::new(),
    };

    Ok(TypeLine { types, subtypes })
}

fn split_tokens(part: &str) -> Vec<String> {
    part.split(' ').map(str::to_string).collect()
}
