//! HTTP API handlers for catalog-api

pub mod artists;
pub mod genres;
pub mod health;
pub mod songs;

pub use artists::artist_routes;
pub use genres::genre_routes;
pub use health::health_routes;
pub use songs::song_routes;
