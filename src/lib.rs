//! Typemon Library
//!
//! This library turns a declarative description of a split ergonomic keyboard
//! into render-ready template data: it resolves per-key transforms from
//! layered key well modifiers, normalizes the thumb cluster and specializes
//! switch module footprints per switch type.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
