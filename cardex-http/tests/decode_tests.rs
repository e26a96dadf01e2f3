use cardex_core::CoreError;
use cardex_http::dto::{decode_detail, decode_page};

// Trimmed captures of the live API; extra fields must be ignored.
const PAGE_BODY: &str = r#"{
  "data": [
    {
      "id": "base1-4",
      "name": "Charizard",
      "supertype": "Pokémon",
      "images": {
        "small": "https://images.pokemontcg.io/base1/4.png",
        "large": "https://images.pokemontcg.io/base1/4_hires.png"
      }
    },
    {
      "id": "base1-58",
      "name": "Pikachu",
      "supertype": "Pokémon",
      "images": {
        "small": "https://images.pokemontcg.io/base1/58.png",
        "large": "https://images.pokemontcg.io/base1/58_hires.png"
      }
    }
  ],
  "page": 1,
  "pageSize": 10,
  "count": 2,
  "totalCount": 13456
}"#;

const DETAIL_BODY: &str = r#"{
  "data": {
    "id": "xy7-54",
    "name": "Gardevoir",
    "supertype": "Pokémon",
    "types": ["Fairy"],
    "hp": "130",
    "abilities": [
      {
        "name": "Bright Heal",
        "text": "Once during your turn, you may heal 20 damage from each of your Pokémon.",
        "type": "Ability"
      }
    ],
    "images": {
      "small": "https://images.pokemontcg.io/xy7/54.png",
      "large": "https://images.pokemontcg.io/xy7/54_hires.png"
    }
  }
}"#;

#[test]
fn page_body_decodes_to_summaries() {
    let cards = decode_page(PAGE_BODY.as_bytes()).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, "base1-4");
    assert_eq!(cards[0].name, "Charizard");
    assert_eq!(
        cards[0].thumbnail_url,
        "https://images.pokemontcg.io/base1/4.png"
    );
    assert_eq!(cards[1].id, "base1-58");
}

#[test]
fn detail_body_decodes_with_abilities() {
    let card = decode_detail(DETAIL_BODY.as_bytes()).unwrap();
    assert_eq!(card.id, "xy7-54");
    assert_eq!(card.name, "Gardevoir");
    assert_eq!(card.types, ["Fairy"]);
    assert_eq!(card.hp, "130");
    assert_eq!(card.abilities.len(), 1);
    assert_eq!(card.abilities[0].name, "Bright Heal");
    assert_eq!(
        card.image_url,
        "https://images.pokemontcg.io/xy7/54_hires.png"
    );
}

#[test]
fn sparse_detail_decodes_to_defaults() {
    let body = r#"{"data": {"id": "base5-45", "name": "Magikarp", "images": {}}}"#;
    let card = decode_detail(body.as_bytes()).unwrap();
    assert!(card.types.is_empty());
    assert!(card.hp.is_empty());
    assert!(card.abilities.is_empty());
    assert!(card.image_url.is_empty());
}

#[test]
fn garbage_is_a_parse_error() {
    let err = decode_page(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));

    let err = decode_detail(b"{\"data\": []}").unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));
}
