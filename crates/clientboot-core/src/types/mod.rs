//! Core types shared by every stage
//!
//! This module contains the stage outcome type and the client handles.

mod resolved;
mod client;

pub use resolved::{Resolved, ErrorMessage, UNKNOWN_ERROR, is_success, is_failure, error_message};
pub use client::{Client, ClientOptions, ClientPair, DataSources, ErrorFormat, ParseErrorFormatError};
