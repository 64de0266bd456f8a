//! citysuggest-cli
//! ================
//!
//! Command-line front end for the `citysuggest-core` city autocomplete
//! engine.
//!
//! The binary (`citysuggest`) is the primary deliverable. The library
//! target holds the pieces the binary is built from, so they can be
//! tested without spawning a process.
//!
//! Basic usage:
//!
//! ```text
//! citysuggest search mad
//! citysuggest select "Madrid, España"
//! citysuggest recent
//! citysuggest interactive
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;
pub mod repl;
