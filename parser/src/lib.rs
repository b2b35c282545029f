#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate reads DICOM data sets sequentially,
//! framing each data element into a [`RawElement`]
//! without decoding its value.
//!
//! - [`stateful`] binds a byte source to the header decoders
//!   of a transfer syntax and keeps track of the reading position.
//! - [`dataset`] provides [`DataSetReader`],
//!   an iterator of raw elements over one level of a data set.
//! - [`resolve`] contains the value representation resolution rules
//!   applied to elements read in an implicit VR transfer syntax.
//! - [`callback`] holds the per-reader element hook,
//!   which can rewrite each raw element before it is handed out.
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [`RawElement`]: dicom_core::RawElement

pub mod callback;
pub mod dataset;
pub mod resolve;
pub mod stateful;

pub use callback::{CallbackRegistry, ElementCallback};
pub use dataset::{DataSetReader, DataSetReaderOptions};
pub use stateful::decode::{DynStatefulDecoder, StatefulDecode, StatefulDecoder};
