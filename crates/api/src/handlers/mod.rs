pub mod hero;
pub mod root;
