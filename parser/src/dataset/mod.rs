//! Interpretation of DICOM data sets as streams of raw data elements.
//!
//! See [`DataSetReader`] for reading a data set sequentially.
pub mod read;

pub use self::read::{DataSetReader, DataSetReaderOptions};
