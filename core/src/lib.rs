#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the raw DICOM data set reader,
//! containing the concepts and data structures
//! shared by the dictionary, encoding and parser crates.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises various data types for DICOM element headers,
//!   including common definitions for DICOM tags, value representations
//!   and value lengths.
//! - [`raw`] holds [`RawElement`],
//!   a data element which has been framed but not yet decoded.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`raw`]: ./raw/index.html

pub mod dictionary;
pub mod header;
pub mod raw;

pub use dictionary::DataDictionary;
pub use header::{DataElementHeader, Length, Tag, VR};
pub use raw::RawElement;
