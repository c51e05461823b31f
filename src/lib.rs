//! appdex: an in-memory cache of available-application descriptors
//!
//! The library walks a watched directory of flat-text descriptor files,
//! keeps a process-lifetime cache of parsed records (category parsed
//! eagerly, detail fields lazily and at most once per entry), and exposes a
//! filtered enumeration with a caller-supplied visitor. The CLI in
//! `main.rs` is a thin wrapper over [`catalog::AppCatalog`].

pub mod bundle;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod install;
pub mod output;
