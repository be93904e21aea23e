pub mod integrate_springs;
pub mod target_policy;
