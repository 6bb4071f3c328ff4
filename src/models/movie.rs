use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Server-assigned movie identifier
pub type MovieId = i64;

/// A catalog movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique identifier, assigned by the store and never changed
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    /// Free-text genre label, matched by exact string equality
    pub genre: String,
    pub language: String,
    /// Running time in minutes
    pub duration: i32,
    /// Viewer rating, 0.0–10.0 with one decimal place
    pub rating: f64,
    /// Stored poster asset reference, if one was uploaded
    pub poster_path: Option<String>,
}

/// A submitted movie, before the store assigns an id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub overview: String,
    pub genre: String,
    pub language: String,
    pub duration: i32,
    pub rating: f64,
    pub poster_path: Option<String>,
}

impl NewMovie {
    /// Validates the submitted fields
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("title", &self.title),
            ("overview", &self.overview),
            ("genre", &self.genre),
            ("language", &self.language),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} must not be empty")));
            }
        }

        if self.duration <= 0 {
            return Err(AppError::Validation(
                "duration must be a positive number of minutes".to_string(),
            ));
        }

        if !(0.0..=10.0).contains(&self.rating) {
            return Err(AppError::Validation(
                "rating must be between 0.0 and 10.0".to_string(),
            ));
        }

        // One decimal place, e.g. 7.5 but not 7.55
        if ((self.rating * 10.0) - (self.rating * 10.0).round()).abs() > 1e-6 {
            return Err(AppError::Validation(
                "rating must have at most one decimal place".to_string(),
            ));
        }

        Ok(())
    }

    /// Attaches a store-assigned id
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            overview: self.overview,
            genre: self.genre,
            language: self.language,
            duration: self.duration,
            rating: self.rating,
            poster_path: self.poster_path,
        }
    }
}
