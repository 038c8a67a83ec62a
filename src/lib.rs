// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod csv;
pub mod dates;
pub mod error;
pub mod net;
pub mod params;
pub mod record;
pub mod search;
pub mod task;

pub mod board;
pub mod file;
pub mod filter;
pub mod ingest;
pub mod page;
pub mod refresh;
pub mod sort;
pub mod summary;

pub mod cli;
