pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod fix;
pub mod history;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod user;
pub mod verify;
