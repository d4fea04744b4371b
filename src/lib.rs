pub mod common;
pub mod config;
pub mod fetch;
pub mod frontend;
pub mod gate;
pub mod manager;
pub mod models;
pub mod navigation;
pub mod services;
pub mod store;
pub mod telemetry;

#[cfg(not(target_arch = "wasm32"))]
pub mod web;
