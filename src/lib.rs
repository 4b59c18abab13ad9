//! Core library for the qb2est command line application.
//!
//! The library turns a QuickBooks contact export into the quoted, comma
//! separated text file imported by Canada Post's EST 2.0 software. IO
//! adapters live under [`io`], the grid model in [`model`], the conversion
//! stages under [`pipeline`] and [`codes`], and the orchestration that runs
//! them in order in [`convert`].

pub mod codes;
pub mod config;
pub mod convert;
pub mod error;
pub mod est;
pub mod io;
pub mod model;
pub mod pipeline;

pub use error::{Result, ToolError};
