//! # SQL Syntax Lint Library
//!
//! Syntax checking for embedded SQL, delegated to the PostgreSQL `ecpg`
//! preprocessor. See [`linter`] for the pipeline.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod linter;
pub mod output;
