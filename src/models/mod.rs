pub mod history;
pub mod luminaria;
pub mod role;
pub mod status;
pub mod waypoint;
