pub mod metadata;
pub mod readme;
pub mod shelf;
mod shelf_test;
