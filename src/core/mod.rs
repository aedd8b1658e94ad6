//! Configuration and domain types shared by the handler and the Telegram client

pub mod coercion;
pub mod config;
pub mod models;
