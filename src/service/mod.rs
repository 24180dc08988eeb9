pub mod config;
pub mod data_manager;
pub mod gameapi;
