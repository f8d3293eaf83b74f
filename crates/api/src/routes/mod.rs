pub mod health;
pub mod hero;
pub mod root;
