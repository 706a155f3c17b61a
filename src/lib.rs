pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod message;
pub mod model;
pub mod utils;
pub mod views;
