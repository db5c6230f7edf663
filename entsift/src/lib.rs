// entsift/src/lib.rs
//! # EntSift CLI crate
//!
//! Thin presentation layer over `entsift-core`: argument parsing, logger
//! bootstrap, input loading, and report rendering. All extraction and
//! validation semantics live in the core library; this crate only consumes
//! the finished `Report`.
//!
//! License: MIT OR APACHE 2.0

pub mod cli;
pub mod commands;
pub mod logger;
