pub mod control;
pub mod shapes;
pub mod spring;
