pub mod artifact;
pub mod contribution;
pub mod layout;
