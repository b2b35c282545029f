//! This module contains the concept of a DICOM data dictionary.
//!
//! The standard data dictionary is provided by the
//! `dicom-dictionary-std` crate.
//! For tests, or to opt out of dictionary look-ups entirely,
//! [`StubDataDictionary`] never recognizes any tag.

mod data_element;
pub mod stub;

pub use self::data_element::{
    DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, TagRange, TagRangeParseError,
    VirtualVr,
};
pub use self::stub::StubDataDictionary;
