pub mod bezier;
pub mod sampling;
