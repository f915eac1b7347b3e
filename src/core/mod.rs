pub mod access;
pub mod backup;
pub mod downtime;
pub mod import;
pub mod log;
pub mod workflow;
