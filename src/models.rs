//! Output model for fetched quotes.
//!
//! The flattened record the binary writes as its final line of output.

use crate::api::Quote;
use serde::{Deserialize, Serialize};

/// Flattened quote record: `{"quote": ..., "anime": ..., "character": ...}`
///
/// Field declaration order is the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub quote: String,
    pub anime: String,
    pub character: String,
}

impl From<Quote> for ResultRecord {
    fn from(quote: Quote) -> Self {
        Self {
            quote: quote.content,
            anime: quote.anime.name,
            character: quote.character.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NamedEntity;

    fn sample_quote() -> Quote {
        Quote {
            content: "Don't start a fight that you can't finish.".to_string(),
            anime: NamedEntity {
                id: 229,
                name: "One Piece".to_string(),
            },
            character: NamedEntity {
                id: 1113,
                name: "Sanji".to_string(),
            },
        }
    }

    #[test]
    fn test_record_from_quote() {
        let record = ResultRecord::from(sample_quote());
        assert_eq!(record.quote, "Don't start a fight that you can't finish.");
        assert_eq!(record.anime, "One Piece");
        assert_eq!(record.character, "Sanji");
    }

    #[test]
    fn test_record_serializes_to_expected_line() {
        let record = ResultRecord::from(sample_quote());
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"quote":"Don't start a fight that you can't finish.","anime":"One Piece","character":"Sanji"}"#
        );
    }

    #[test]
    fn test_record_round_trip() {
        let record = ResultRecord::from(sample_quote());
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: ResultRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_decodes_regardless_of_field_order() {
        let reordered = r#"{"character":"Sanji","quote":"q","anime":"One Piece"}"#;
        let decoded: ResultRecord = serde_json::from_str(reordered).unwrap();
        assert_eq!(
            decoded,
            ResultRecord {
                quote: "q".to_string(),
                anime: "One Piece".to_string(),
                character: "Sanji".to_string(),
            }
        );
    }
}
