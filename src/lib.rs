//! # veclib Quickstart
//!
//! ```rust
//! use veclib::prelude::*;
//!
//! let a = Vector::new(&[1.0, 2.0])?;
//! let b = Vector::new(&[3.0, 4.0])?;
//!
//! // Componentwise sum; mismatched dimensions surface as an error value.
//! assert_eq!((&a + &b)?, Vector::new(&[4.0, 6.0])?);
//!
//! // Geometry
//! assert!((b.magnitude() - 5.0).abs() < 1e-12);
//! assert!(Vector::new(&[1.0, 0.0])?.is_orthogonal(&Vector::new(&[0.0, 5.0])?)?);
//! # Ok::<(), VectorError>(())
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod close;
pub mod error;
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use close::{is_close, is_close_tol, ABS_TOL, REL_TOL};
pub use error::{Result, VectorError};
pub use vector::{Rounded, Vector};
