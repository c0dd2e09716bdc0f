//! Application service layer - config, repository wiring, trip queries

pub mod app;
pub mod config;
pub mod repository;
