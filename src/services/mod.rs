pub mod movies;
pub mod posters;
pub mod token;
pub mod users;
pub mod watchlist;

pub use movies::MovieDirectory;
pub use posters::{FsPosterStore, PosterStore};
pub use token::TokenIssuer;
pub use users::UserDirectory;
pub use watchlist::WatchlistManager;
