pub mod config;
pub mod data;
pub mod habit;
pub mod quote;
pub mod stats;
