pub mod actions;
pub mod desk;
