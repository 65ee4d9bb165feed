//! Movie record shapes: stored row, create payload, partial update payload.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A movie row as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub release_year: i32,
    pub rating: BigDecimal,
    pub genres: Vec<String>,
    pub director: String,
}

/// Body of `POST /movies`. The id is assigned by the store; absent fields take their default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMovie {
    pub name: String,
    pub release_year: i32,
    #[serde(deserialize_with = "decimal")]
    pub rating: BigDecimal,
    pub genres: Vec<String>,
    pub director: String,
}

/// Body of `PUT /movies/{id}`. `None` (absent or `null`) leaves the column untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoviePatch {
    pub name: Option<String>,
    pub release_year: Option<i32>,
    #[serde(deserialize_with = "optional_decimal")]
    pub rating: Option<BigDecimal>,
    pub genres: Option<Vec<String>>,
    pub director: Option<String>,
}

/// Decimal as sent on the wire: a string or the literal text of a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalText {
    Text(String),
    Number(serde_json::Number),
}

impl DecimalText {
    fn parse<E: serde::de::Error>(self) -> Result<BigDecimal, E> {
        let text = match self {
            DecimalText::Text(s) => s,
            DecimalText::Number(n) => n.to_string(),
        };
        BigDecimal::from_str(text.trim()).map_err(|e| E::custom(format!("invalid decimal '{}': {}", text, e)))
    }
}

/// Parse from the number's shortest text form rather than its binary `f64` value, so `8.7` stays `8.7`.
fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    DecimalText::deserialize(deserializer)?.parse()
}

fn optional_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BigDecimal>, D::Error> {
    Option::<DecimalText>::deserialize(deserializer)?
        .map(DecimalText::parse)
        .transpose()
}

impl MoviePatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.release_year.is_none()
            && self.rating.is_none()
            && self.genres.is_none()
            && self.director.is_none()
    }
}

impl Movie {
    pub fn from_new(id: Uuid, new: NewMovie) -> Self {
        Movie {
            id,
            name: new.name,
            release_year: new.release_year,
            rating: new.rating,
            genres: new.genres,
            director: new.director,
        }
    }

    /// Overwrite the columns the patch supplies.
    pub fn apply(&mut self, patch: &MoviePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(year) = patch.release_year {
            self.release_year = year;
        }
        if let Some(rating) = &patch.rating {
            self.rating = rating.clone();
        }
        if let Some(genres) = &patch.genres {
            self.genres = genres.clone();
        }
        if let Some(director) = &patch.director {
            self.director = director.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_empty_value_from_absent() {
        let patch: MoviePatch = serde_json::from_str(r#"{"name": "", "genres": []}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some(""));
        assert_eq!(patch.genres, Some(vec![]));
        assert!(patch.release_year.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn null_fields_are_not_supplied() {
        let patch: MoviePatch = serde_json::from_str(r#"{"name": null, "rating": null}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn numeric_rating_keeps_its_text() {
        let new: NewMovie = serde_json::from_str(r#"{"rating": 8.7}"#).unwrap();
        assert_eq!(new.rating, BigDecimal::from_str("8.7").unwrap());
        assert_eq!(new.rating.to_string(), "8.7");

        let patch: MoviePatch = serde_json::from_str(r#"{"rating": "7.25"}"#).unwrap();
        assert_eq!(patch.rating, Some(BigDecimal::from_str("7.25").unwrap()));

        let patch: MoviePatch = serde_json::from_str(r#"{"rating": 9}"#).unwrap();
        assert_eq!(patch.rating, Some(BigDecimal::from(9)));
    }

    #[test]
    fn rating_must_be_a_decimal() {
        assert!(serde_json::from_str::<NewMovie>(r#"{"rating": "high"}"#).is_err());
        assert!(serde_json::from_str::<MoviePatch>(r#"{"rating": [1]}"#).is_err());
    }

    #[test]
    fn new_movie_defaults_missing_fields() {
        let new: NewMovie = serde_json::from_str(r#"{"name": "Alien"}"#).unwrap();
        assert_eq!(new.name, "Alien");
        assert_eq!(new.release_year, 0);
        assert!(new.genres.is_empty());
    }

    #[test]
    fn apply_touches_only_supplied_columns() {
        let id = Uuid::new_v4();
        let mut movie = Movie::from_new(
            id,
            NewMovie {
                name: "Heat".into(),
                release_year: 1995,
                rating: BigDecimal::from(8),
                genres: vec!["crime".into()],
                director: "Michael Mann".into(),
            },
        );
        movie.apply(&MoviePatch {
            release_year: Some(1996),
            ..MoviePatch::default()
        });
        assert_eq!(movie.release_year, 1996);
        assert_eq!(movie.name, "Heat");
        assert_eq!(movie.director, "Michael Mann");
        assert_eq!(movie.id, id);
    }
}
