//! trainlog core - Domain models, validation, and configuration
//!
//! This crate contains the workout journal's domain logic and the record store port
//! that storage adapters implement.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod validation;

pub use error::{Result, TrainlogError};
