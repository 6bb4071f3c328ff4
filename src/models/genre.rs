use serde::{Deserialize, Serialize};

/// A genre catalog entry
///
/// Kept independent of `Movie.genre`, which is free text matched by string
/// equality rather than a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    /// Unique genre name
    pub name: String,
}
