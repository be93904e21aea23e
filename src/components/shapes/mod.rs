pub mod bezier;
