// src/prelude.rs
//! The “everything” import for veclib.
//!
//! Brings you the commonly used types and functions with one glob:
//! ```rust
//! use veclib::prelude::*;
//! ```

pub use crate::close::{is_close, is_close_tol};
pub use crate::error::{Result, VectorError};
pub use crate::vector::{Rounded, Vector};
