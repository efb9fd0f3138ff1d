//! Movie output schemas. Each flow names a [`MovieList`] envelope type for
//! where its list lives, and a [`MovieShape`] for whether `year` is mandatory
//! and which key the prompt asks for the streaming platform under.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::models::Movie;
use crate::schema::{check_range, decode, require_text, Schema, ValidationError};

pub const IMDB_RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// A model response that carries a list of movies.
pub trait MovieList: DeserializeOwned {
    /// Key the list sits under; `None` when the response is the array itself.
    const WRAPPER: Option<&'static str>;

    fn into_movies(self) -> Vec<Movie>;
}

impl MovieList for Vec<Movie> {
    const WRAPPER: Option<&'static str> = None;

    fn into_movies(self) -> Vec<Movie> {
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct MoviesEnvelope {
    pub movies: Vec<Movie>,
}

impl MovieList for MoviesEnvelope {
    const WRAPPER: Option<&'static str> = Some("movies");

    fn into_movies(self) -> Vec<Movie> {
        self.movies
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsEnvelope {
    pub recommendations: Vec<Movie>,
}

impl MovieList for RecommendationsEnvelope {
    const WRAPPER: Option<&'static str> = Some("recommendations");

    fn into_movies(self) -> Vec<Movie> {
        self.recommendations
    }
}

#[derive(Debug, Deserialize)]
pub struct WatchlistEnvelope {
    pub watchlist: Vec<Movie>,
}

impl MovieList for WatchlistEnvelope {
    const WRAPPER: Option<&'static str> = Some("watchlist");

    fn into_movies(self) -> Vec<Movie> {
        self.watchlist
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieShape {
    pub year_required: bool,
    /// Only affects the prompt; `Movie` accepts every platform key.
    pub platform_key: &'static str,
}

impl MovieShape {
    /// Renders the output contract appended to every flow prompt.
    pub fn describe<L: MovieList>(&self) -> String {
        let year = if self.year_required {
            "\"year\": number (required, e.g. 2024)"
        } else {
            "\"year\": number (optional)"
        };
        let item = format!(
            "{{\n    \"title\": string (required),\n    {year},\n    \"imdbRating\": number 0-10 (optional),\n    \"{}\": string (optional),\n    \"description\": string (required)\n  }}",
            self.platform_key
        );
        match L::WRAPPER {
            None => format!("[\n  {item}\n]"),
            Some(key) => format!("{{\n  \"{key}\": [\n  {item}\n  ]\n}}"),
        }
    }

    /// Validates a whole model response and returns the movies in order.
    /// Any invalid entry fails the whole response.
    pub fn parse<L: MovieList>(&self, value: &Value) -> Result<Vec<Movie>, ValidationError> {
        let movies = decode::<L>(value)?.into_movies();
        let base = L::WRAPPER.unwrap_or("");

        for (i, movie) in movies.iter().enumerate() {
            self.validate_movie(movie)
                .map_err(|e| e.under(&format!("{base}[{i}]")))?;
        }
        Ok(movies)
    }

    fn validate_movie(&self, movie: &Movie) -> Result<(), ValidationError> {
        movie.validate()?;
        if self.year_required && movie.year.is_none() {
            return Err(ValidationError::new("year", "is required"));
        }
        Ok(())
    }
}

/// Field rules shared by every producer of movies: generated, curated, or
/// submitted by a client ("add to watchlist").
impl Schema for Movie {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        check_range("imdbRating", self.imdb_rating, IMDB_RATING_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STRICT: MovieShape = MovieShape {
        year_required: true,
        platform_key: "streamingPlatform",
    };

    const LOOSE: MovieShape = MovieShape {
        year_required: false,
        platform_key: "platform",
    };

    #[test]
    fn test_parse_bare_list() {
        let value = json!([
            {"title": "Heat", "year": 1995, "description": "Cops and robbers.", "platform": "Max"},
            {"title": "Ronin", "description": "Car chases."}
        ]);
        let movies = LOOSE.parse::<Vec<Movie>>(&value).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].platform.as_deref(), Some("Max"));
        assert!(movies[1].year.is_none());
    }

    #[test]
    fn test_platform_aliases_are_normalized() {
        let value = json!({"movies": [
            {"title": "Amelie", "year": 2001, "description": "Paris.", "streamingPlatform": "Hulu"},
            {"title": "Heat", "year": 1995, "description": "LA.", "streamingAvailability": "Max"}
        ]});
        let movies = STRICT.parse::<MoviesEnvelope>(&value).unwrap();
        assert_eq!(movies[0].platform.as_deref(), Some("Hulu"));
        assert_eq!(movies[1].platform.as_deref(), Some("Max"));
    }

    #[test]
    fn test_missing_description_fails_whole_response() {
        let value = json!({"movies": [
            {"title": "Amelie", "year": 2001, "description": "Paris."},
            {"title": "Heat", "year": 1995}
        ]});
        let err = STRICT.parse::<MoviesEnvelope>(&value).unwrap_err();
        assert_eq!(err.field, "movies[1].description");
    }

    #[test]
    fn test_year_required_in_strict_shape() {
        let value = json!({"movies": [{"title": "Amelie", "description": "Paris."}]});
        let err = STRICT.parse::<MoviesEnvelope>(&value).unwrap_err();
        assert_eq!(err.field, "movies[0].year");
    }

    #[test]
    fn test_rating_out_of_range() {
        let value = json!([{"title": "X", "description": "Y", "imdbRating": 12.5}]);
        let err = LOOSE.parse::<Vec<Movie>>(&value).unwrap_err();
        assert_eq!(err.field, "[0].imdbRating");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let value = json!({"watchlist": [{"title": "  ", "year": 2000, "description": "Y"}]});
        let err = STRICT.parse::<WatchlistEnvelope>(&value).unwrap_err();
        assert_eq!(err.field, "watchlist[0].title");
    }

    #[test]
    fn test_wrong_envelope_is_rejected() {
        let err = STRICT.parse::<MoviesEnvelope>(&json!([])).unwrap_err();
        assert_eq!(err.field, "$");
        assert!(LOOSE.parse::<Vec<Movie>>(&json!({"movies": []})).is_err());
    }

    #[test]
    fn test_missing_wrapper_key() {
        let err = STRICT
            .parse::<RecommendationsEnvelope>(&json!({"films": []}))
            .unwrap_err();
        assert_eq!(err.field, "recommendations");
    }

    #[test]
    fn test_describe_mentions_platform_key_and_wrapper() {
        let text = STRICT.describe::<MoviesEnvelope>();
        assert!(text.contains("\"movies\""));
        assert!(text.contains("streamingPlatform"));
        assert!(LOOSE.describe::<Vec<Movie>>().starts_with('['));
    }

    #[test]
    fn test_client_movie_schema() {
        let movie = Movie::from_value(
            &json!({"title": "Inception", "year": 2010, "description": "Dreams."}),
        )
        .unwrap();
        assert_eq!(movie.year, Some(2010));
        assert!(Movie::from_value(&json!({"title": "", "description": "x"})).is_err());
    }
}
