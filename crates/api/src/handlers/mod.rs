pub mod health;
pub mod placement;
pub mod root;
