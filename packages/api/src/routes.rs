pub mod classes;
pub mod health;
pub mod predict;
pub mod root;
