pub mod movie;
pub mod watchlist;

pub use movie::Movie;
pub use watchlist::NamedWatchlist;
