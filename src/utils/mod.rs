//! Utility modules
//!
//! This module contains common utilities used throughout the portal core,
//! including error handling, logging setup, and helper functions.

pub mod errors;
pub mod logging;
pub mod helpers;
pub mod validation;

pub use errors::{PortalError, Result};
