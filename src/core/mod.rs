//! Business logic for batch preparation runs

pub mod prepare;
