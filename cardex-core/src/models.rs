use serde::{Deserialize, Serialize};

/// Minimal listing data for one card. Immutable once fetched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub text: String,
}

/// Full card record, fetched fresh per detail view and never cached
/// across views. Fields the service omits decode to empty values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetail {
    pub id: String,
    pub name: String,
    pub types: Vec<String>,
    pub hp: String,
    pub abilities: Vec<Ability>,
    pub image_url: String,
}
