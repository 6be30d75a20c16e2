//! Farm Records - greenhouse record-keeping API
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod repository;
pub mod routes;
pub mod services;
pub mod views;
