pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
