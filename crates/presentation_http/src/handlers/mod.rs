//! HTTP request handlers

pub mod export;
pub mod health;
pub mod records;
pub mod weather;
