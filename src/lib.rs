pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod recommenders;
pub mod services;
pub mod web;
