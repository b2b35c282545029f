#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
//! Element hooks which fix common problems in non-conforming DICOM data
//! while it is being read,
//! before any value is decoded.
//!
//! The hooks in this crate are installed
//! in the [`CallbackRegistry`] handed to a
//! [`DataSetReader`](dicom_parser::DataSetReader).
//!
//! # Example
//!
//! Some devices write multi-valued numbers
//! with a separator other than the standard backslash,
//! such as `0.5|0.5` for _Pixel Spacing_.
//!
//! ```
//! use dicom_fixer::{fix_separator, FixSeparatorOptions};
//! use dicom_parser::{CallbackRegistry, DataSetReaderOptions};
//!
//! let options = FixSeparatorOptions::new(b'|')?;
//! let mut registry = CallbackRegistry::new();
//! fix_separator(&mut registry, options);
//!
//! let reader_options = DataSetReaderOptions::default().callback(registry);
//! # Ok::<(), dicom_fixer::ConfigurationError>(())
//! ```
//!
//! [`CallbackRegistry`]: dicom_parser::CallbackRegistry

pub mod options;
pub mod separator;

pub use options::{ConfigurationError, FixSeparatorOptions, FixSeparatorOptionsBuilder};
pub use separator::{fix_separator, fix_separator_callback};
