//! Repository layer: one zero-sized struct per table with async CRUD methods.
//!
//! Methods take a `&mut MySqlConnection` so callers decide the session scope.

mod hero_repo;

pub use hero_repo::HeroRepo;
