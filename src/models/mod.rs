mod genre;
mod movie;
mod user;
mod watchlist;

pub use genre::Genre;
pub use movie::{Movie, MovieId, NewMovie};
pub use user::{Identity, NewUser, User, UserId, UserRecord};
pub use watchlist::{Watchlist, WatchlistItem};
