//! Core types for the summary MCP server.
//!
//! This crate holds everything the server surfaces share:
//! - The instruction document model (`InstructionDocument` and friends)
//! - The pure builder that assembles the document
//! - Ambient configuration (`SummaryConfig`)
//! - The error hierarchy
//!
//! The document is entirely static apart from `output_file.location`, which
//! is interpolated from the caller-supplied override or the ambient
//! configuration. Nothing in this crate performs I/O.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod document;
mod error;

pub use config::{DEFAULT_LOCATION, SummaryConfig, SummaryConfigBuilder};
pub use document::{
    FieldSpec, FileFormat, InstructionDocument, NotesForCursor, OUTPUT_FILE_NAME, OutputFile,
};
pub use error::{Error, Result};
