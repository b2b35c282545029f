//! Stateful decoding of DICOM data,
//! keeping the source and the decoders of a transfer syntax together.
pub mod decode;
