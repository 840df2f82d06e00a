pub mod app;
pub mod arbtt;
pub mod config;
pub mod models;
pub mod view;
