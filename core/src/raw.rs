//! Raw data elements: framed, but not yet decoded.
//!
//! A [`RawElement`] is what the data set reader produces for each element
//! in the stream. Its value is the exact byte sequence found in the encoded
//! data, together with enough of the parsing context
//! (value representation, byte order, implicit or explicit VR)
//! for a value decoder to interpret it later
//! without access to the original stream.
//!
//! Raw elements are values: none of their fields can be changed in place.
//! Methods such as [`with_value`](RawElement::with_value)
//! produce a new element instead,
//! which keeps the original bytes available for diagnostics
//! and allows element hooks to be composed freely.

use crate::header::{DataElementHeader, HasLength, Header, Length, Tag, VR};

/// A DICOM data element whose value has been framed but not decoded.
#[derive(Debug, Clone)]
pub struct RawElement {
    tag: Tag,
    /// `None` when the VR is not in the stream
    /// and could not be resolved from a dictionary
    vr: Option<VR>,
    len: Length,
    value: Vec<u8>,
    /// position of the first value byte in the source stream
    value_offset: u64,
    implicit_vr: bool,
    little_endian: bool,
}

impl RawElement {
    /// Create a raw element from its tag, VR and value bytes.
    ///
    /// The length is the byte length of `value`.
    /// The element is assumed to come from an explicit VR little endian
    /// encoding at offset 0;
    /// use [`with_encoding`](RawElement::with_encoding)
    /// and [`with_offset`](RawElement::with_offset)
    /// to describe other contexts.
    pub fn new(tag: Tag, vr: Option<VR>, value: impl Into<Vec<u8>>) -> Self {
        let value = value.into();
        RawElement {
            tag,
            vr,
            len: Length(value.len() as u32),
            value,
            value_offset: 0,
            implicit_vr: false,
            little_endian: true,
        }
    }

    /// Create a raw element with a length
    /// which is not necessarily the byte length of the value,
    /// such as [`Length::UNDEFINED`].
    pub fn new_with_len(tag: Tag, vr: Option<VR>, len: Length, value: impl Into<Vec<u8>>) -> Self {
        RawElement {
            len,
            ..RawElement::new(tag, vr, value)
        }
    }

    /// Describe the position of the value in the source stream.
    pub fn with_offset(self, value_offset: u64) -> Self {
        RawElement {
            value_offset,
            ..self
        }
    }

    /// Describe the encoding which the element was read from.
    pub fn with_encoding(self, implicit_vr: bool, little_endian: bool) -> Self {
        RawElement {
            implicit_vr,
            little_endian,
            ..self
        }
    }

    /// Obtain a copy of this element with a different value.
    ///
    /// All other properties are kept.
    /// The length of the new element is the byte length of `value`,
    /// unless this element has an undefined length,
    /// in which case the copy keeps it undefined.
    pub fn with_value(&self, value: impl Into<Vec<u8>>) -> Self {
        let value = value.into();
        let len = if self.len.is_undefined() {
            Length::UNDEFINED
        } else {
            Length(value.len() as u32)
        };
        RawElement {
            tag: self.tag,
            vr: self.vr,
            len,
            value,
            value_offset: self.value_offset,
            implicit_vr: self.implicit_vr,
            little_endian: self.little_endian,
        }
    }

    /// Obtain a copy of this element with a different value representation.
    pub fn with_vr(&self, vr: Option<VR>) -> Self {
        RawElement {
            vr,
            ..self.clone()
        }
    }

    /// The element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The element's value representation,
    /// or `None` if it was not resolved.
    #[inline]
    pub fn vr(&self) -> Option<VR> {
        self.vr
    }

    /// Whether the value representation is known.
    #[inline]
    pub fn is_vr_resolved(&self) -> bool {
        self.vr.is_some()
    }

    /// The undecoded value bytes.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Move the undecoded value bytes out of the element.
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    /// The position of the first value byte in the source stream.
    #[inline]
    pub fn value_offset(&self) -> u64 {
        self.value_offset
    }

    /// Whether the element was read from an implicit VR encoding.
    #[inline]
    pub fn is_implicit_vr(&self) -> bool {
        self.implicit_vr
    }

    /// Whether the element was read from a little endian encoding.
    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    /// Build an element header out of this raw element.
    /// An unresolved VR becomes [`VR::UN`].
    pub fn header(&self) -> DataElementHeader {
        DataElementHeader::new(self.tag, self.vr.unwrap_or(VR::UN), self.len)
    }
}

impl HasLength for RawElement {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for RawElement {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

/// This implementation treats undefined lengths as equal.
impl PartialEq for RawElement {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.vr == other.vr
            && self.len.inner_eq(other.len)
            && self.value == other.value
            && self.value_offset == other.value_offset
            && self.implicit_vr == other.implicit_vr
            && self.little_endian == other.little_endian
    }
}
