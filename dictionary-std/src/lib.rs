//! This crate implements the standard DICOM attribute dictionary.
//!
//! - [`data_element`] contains the run-time dictionary of DICOM attributes,
//!   which is used by the data set reader to resolve
//!   the value representation of implicit VR data elements.
//! - [`tags`] maps attribute keywords to DICOM tags at compile time,
//!   thus without incurring a look-up cost.
//!
//! The records are collected from [DICOM PS3.6].
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
