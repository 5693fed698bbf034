//! Public API for phrase chunking
//!
//! This module provides the high-level interface for turning raw text into
//! labeled phrase groups. It hides the individual pipeline stages behind a
//! single processor type with a consistent configuration surface.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::PhraseChunker;
