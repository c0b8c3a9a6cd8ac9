pub mod browse;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod shifts;
