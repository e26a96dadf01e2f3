//! Wire types for the card API. Responses wrap their payload in a
//! `data` envelope; unknown fields are ignored.

use cardex_core::{Ability, CardDetail, CardSummary, CoreError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Default, Deserialize)]
struct ImagesDto {
    #[serde(default)]
    small: Option<String>,
    #[serde(default)]
    large: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryDto {
    id: String,
    name: String,
    #[serde(default)]
    images: ImagesDto,
}

#[derive(Debug, Deserialize)]
struct AbilityDto {
    name: String,
    #[serde(default)]
    text: String,
}

// Cards without abilities, types, or hp appear on the wire with those
// fields missing entirely.
#[derive(Debug, Deserialize)]
struct DetailDto {
    id: String,
    name: String,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    hp: String,
    #[serde(default)]
    abilities: Vec<AbilityDto>,
    #[serde(default)]
    images: ImagesDto,
}

impl From<SummaryDto> for CardSummary {
    fn from(d: SummaryDto) -> Self {
        Self {
            id: d.id,
            name: d.name,
            thumbnail_url: d.images.small.or(d.images.large).unwrap_or_default(),
        }
    }
}

impl From<DetailDto> for CardDetail {
    fn from(d: DetailDto) -> Self {
        Self {
            id: d.id,
            name: d.name,
            types: d.types,
            hp: d.hp,
            abilities: d
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.name,
                    text: a.text,
                })
                .collect(),
            image_url: d.images.large.or(d.images.small).unwrap_or_default(),
        }
    }
}

/// Decodes a `GET /cards` page body.
pub fn decode_page(body: &[u8]) -> Result<Vec<CardSummary>, CoreError> {
    let env: Envelope<Vec<SummaryDto>> =
        serde_json::from_slice(body).map_err(|e| CoreError::Parse(e.to_string()))?;
    Ok(env.data.into_iter().map(Into::into).collect())
}

/// Decodes a `GET /cards/{id}` detail body.
pub fn decode_detail(body: &[u8]) -> Result<CardDetail, CoreError> {
    let env: Envelope<DetailDto> =
        serde_json::from_slice(body).map_err(|e| CoreError::Parse(e.to_string()))?;
    Ok(env.data.into())
}
