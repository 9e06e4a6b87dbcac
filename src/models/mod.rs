//! Runtime models shared across the server.

pub mod config;
