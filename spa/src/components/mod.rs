pub mod atoms;
pub mod composite;
