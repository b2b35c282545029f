//! DICOM decoding primitives.
//!
//! This crate provides interfaces and data structures for reading
//! the framing of DICOM data elements:
//! tags, value representations, value lengths,
//! and sequence item headers,
//! in each of the three native encodings
//! (implicit VR little endian, explicit VR little endian,
//! and explicit VR big endian).
//! This crate also hosts the concept of [transfer syntax specifier],
//! which can be used to produce decoders at run-time.
//!
//! Element values are not interpreted here.
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod decode;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use decode::basic::BasicDecoder;
pub use decode::{BasicDecode, Decode, DecodeFrom};
pub use transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
