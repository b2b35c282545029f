//! This module provides a stateful abstraction over a DICOM data source,
//! which decodes element headers and frames element values
//! while keeping track of the position in the source.

use dicom_core::header::{DataElementHeader, Header, SequenceItemHeader};
use dicom_core::{Tag, VR};
use dicom_encoding::decode::basic::{
    BasicDecoder, BigEndianBasicDecoder, LittleEndianBasicDecoder,
};
use dicom_encoding::decode::explicit_be::ExplicitVRBigEndianDecoder;
use dicom_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dicom_encoding::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use dicom_encoding::decode::{BasicDecode, Decode, DecodeFrom};
use dicom_encoding::transfer_syntax::{DynDecoder, Endianness, TransferSyntax};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{self, BufRead, Read};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Transfer syntax {} ({}) is not supported for reading", uid, name))]
    UnsupportedTransferSyntax {
        uid: &'static str,
        name: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicom_encoding::decode::Error,
    },
    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicom_encoding::decode::Error,
    },
    #[snafu(display("Could not read value from source at position {}", position))]
    ReadValueData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Value at position {} ended early: expected {} bytes but only {} were available",
        position,
        expected,
        available
    ))]
    UnexpectedEndOfValue {
        position: u64,
        expected: u32,
        available: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not skip value bytes at position {}", position))]
    SkipValueData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not check for the end of the data at position {}", position))]
    CheckEnd {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected tag {} inside a sequence item at position {}", tag, position))]
    UnexpectedTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A stateful reader of DICOM data:
/// decodes element headers
/// and frames element values as raw bytes.
pub trait StatefulDecode {
    /// Same as `Decode::decode_header` over the bound source.
    fn decode_header(&mut self) -> Result<DataElementHeader>;

    /// Same as `Decode::decode_item_header` over the bound source.
    fn decode_item_header(&mut self) -> Result<SequenceItemHeader>;

    /// Read exactly `length` bytes from the source
    /// and append them to the given vector.
    ///
    /// # Errors
    ///
    /// Fails if the source ends before all bytes are read,
    /// in which case the bytes available are still appended to `vec`.
    fn read_to_vec(&mut self, length: u32, vec: &mut Vec<u8>) -> Result<()>;

    /// Read the value of an element with undefined length,
    /// appending its raw bytes to the given vector.
    ///
    /// The value is a sequence of items,
    /// each either of defined length
    /// or made of data elements up to an item delimiter.
    /// Nested sequences of undefined length are captured recursively.
    /// The sequence delimiter closing the value is consumed
    /// but not appended.
    ///
    /// If `implicit_le` is true,
    /// the nested content is read as Implicit VR Little Endian
    /// regardless of the transfer syntax,
    /// as is the case for a value of VR `UN` with undefined length.
    fn read_undefined_to_vec(&mut self, implicit_le: bool, vec: &mut Vec<u8>) -> Result<()>;

    /// Skip `length` bytes from the source.
    fn skip_bytes(&mut self, length: u32) -> Result<()>;

    /// Check whether the source has no more data,
    /// without consuming anything.
    fn is_at_end(&mut self) -> Result<bool>;

    /// Retrieve the exact number of bytes read so far by the stateful decoder,
    /// plus the position it was created with.
    fn position(&self) -> u64;

    /// Whether the value representation is in the encoded data.
    fn is_explicit_vr(&self) -> bool;

    /// The byte order of the encoded data.
    fn endianness(&self) -> Endianness;
}

/// A reader which can record every byte going through it.
///
/// This is the source type seen by the header decoders of a
/// [`StatefulDecoder`],
/// so that undefined length values can be captured
/// exactly as they are encoded.
#[derive(Debug)]
pub struct CaptureReader<R> {
    inner: R,
    capture: Option<Vec<u8>>,
}

impl<R> CaptureReader<R> {
    fn new(inner: R) -> Self {
        CaptureReader {
            inner,
            capture: None,
        }
    }

    /// Start recording bytes, appending them to `buffer`.
    fn start_capture(&mut self, buffer: Vec<u8>) {
        self.capture = Some(buffer);
    }

    /// Stop recording, returning everything recorded so far.
    fn stop_capture(&mut self) -> Vec<u8> {
        self.capture.take().unwrap_or_default()
    }
}

impl<R> Read for CaptureReader<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if let Some(capture) = &mut self.capture {
            capture.extend_from_slice(&buf[..n]);
        }
        Ok(n)
    }
}

/// Alias for a dynamically resolved DICOM stateful decoder. Although the data
/// source may be known at compile time, the required decoder may vary
/// according to the data set's transfer syntax.
pub type DynStatefulDecoder<'s> = StatefulDecoder<
    DynDecoder<CaptureReader<Box<dyn BufRead + 's>>>,
    BasicDecoder,
    Box<dyn BufRead + 's>,
>;

/// Type alias for a stateful decoder of Explicit VR Little Endian data.
pub type ExplicitVRLittleEndianStatefulDecoder<S> =
    StatefulDecoder<ExplicitVRLittleEndianDecoder, LittleEndianBasicDecoder, S>;

/// Type alias for a stateful decoder of Explicit VR Big Endian data.
pub type ExplicitVRBigEndianStatefulDecoder<S> =
    StatefulDecoder<ExplicitVRBigEndianDecoder, BigEndianBasicDecoder, S>;

/// Type alias for a stateful decoder of Implicit VR Little Endian data.
pub type ImplicitVRLittleEndianStatefulDecoder<S> =
    StatefulDecoder<ImplicitVRLittleEndianDecoder, LittleEndianBasicDecoder, S>;

/// A stateful abstraction for the DICOM content reading process.
/// This type binds a data source to the decoders
/// of one transfer syntax.
/// `S` is the generic parameter type for the original source,
/// `D` is the element header decoder,
/// whereas `BD` is the basic decoder,
/// which determines the byte order.
///
/// The source needs to be buffered,
/// so that the end of the data can be detected
/// before attempting to read another element header.
#[derive(Debug)]
pub struct StatefulDecoder<D, BD, S> {
    from: CaptureReader<S>,
    decoder: D,
    basic: BD,
    explicit_vr: bool,
    position: u64,
}

impl<'s> DynStatefulDecoder<'s> {
    /// Create a new stateful decoder for the given transfer syntax.
    ///
    /// `position` is the position of `from` in the overall stream,
    /// usually 0.
    pub fn new_with_ts<S>(from: S, ts: &TransferSyntax, position: u64) -> Result<Self>
    where
        S: 's + BufRead,
    {
        let basic = ts.basic_decoder();
        let decoder = ts
            .decoder_for::<CaptureReader<Box<dyn BufRead + 's>>>()
            .context(UnsupportedTransferSyntaxSnafu {
                uid: ts.uid(),
                name: ts.name(),
            })?;

        Ok(StatefulDecoder::new_with_position(
            Box::new(from) as Box<dyn BufRead + 's>,
            decoder,
            basic,
            ts.is_explicit_vr(),
            position,
        ))
    }
}

impl<S> ExplicitVRLittleEndianStatefulDecoder<S> {
    /// Create a new stateful decoder of Explicit VR Little Endian data.
    pub fn explicit_le(from: S) -> Self {
        StatefulDecoder::new(
            from,
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
            true,
        )
    }
}

impl<S> ExplicitVRBigEndianStatefulDecoder<S> {
    /// Create a new stateful decoder of Explicit VR Big Endian data.
    pub fn explicit_be(from: S) -> Self {
        StatefulDecoder::new(
            from,
            ExplicitVRBigEndianDecoder::default(),
            BigEndianBasicDecoder,
            true,
        )
    }
}

impl<S> ImplicitVRLittleEndianStatefulDecoder<S> {
    /// Create a new stateful decoder of Implicit VR Little Endian data.
    pub fn implicit_le(from: S) -> Self {
        StatefulDecoder::new(
            from,
            ImplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
            false,
        )
    }
}

impl<D, BD, S> StatefulDecoder<D, BD, S> {
    /// Create a new DICOM stateful decoder from its parts.
    ///
    /// `explicit_vr` tells whether `decoder`
    /// reads the value representation from the data.
    #[inline]
    pub fn new(from: S, decoder: D, basic: BD, explicit_vr: bool) -> StatefulDecoder<D, BD, S> {
        Self::new_with_position(from, decoder, basic, explicit_vr, 0)
    }

    /// Create a new DICOM stateful decoder from its parts,
    /// assuming the given position of the source in the overall stream.
    pub fn new_with_position(
        from: S,
        decoder: D,
        basic: BD,
        explicit_vr: bool,
        position: u64,
    ) -> StatefulDecoder<D, BD, S> {
        StatefulDecoder {
            from: CaptureReader::new(from),
            decoder,
            basic,
            explicit_vr,
            position,
        }
    }

    /// Retrieve the original source.
    pub fn into_inner(self) -> S {
        self.from.inner
    }
}

impl<D, BD, S> StatefulDecoder<D, BD, S>
where
    D: DecodeFrom<CaptureReader<S>>,
    BD: BasicDecode,
    S: BufRead,
{
    /// Decode an element header inside a nested data set.
    fn decode_nested_header(&mut self, implicit_le: bool) -> Result<DataElementHeader> {
        if !implicit_le {
            return self.decode_header();
        }
        let (header, bytes_read) =
            Decode::decode_header(&ImplicitVRLittleEndianDecoder::default(), &mut self.from)
                .context(DecodeElementHeaderSnafu {
                    position: self.position,
                })?;
        self.position += bytes_read as u64;
        Ok(header)
    }

    /// Decode an item header inside a nested data set.
    fn decode_nested_item_header(&mut self, implicit_le: bool) -> Result<SequenceItemHeader> {
        if !implicit_le {
            return self.decode_item_header();
        }
        let header =
            Decode::decode_item_header(&ImplicitVRLittleEndianDecoder::default(), &mut self.from)
                .context(DecodeItemHeaderSnafu {
                    position: self.position,
                })?;
        self.position += 8;
        Ok(header)
    }

    /// Walk through the items of a sequence
    /// up to and including its sequence delimiter.
    fn walk_sequence(&mut self, implicit_le: bool) -> Result<()> {
        loop {
            let position = self.position;
            match self.decode_nested_item_header(implicit_le)? {
                SequenceItemHeader::Item { len } => match len.get() {
                    Some(len) => self.skip_bytes(len)?,
                    None => self.walk_item(implicit_le)?,
                },
                SequenceItemHeader::ItemDelimiter => {
                    tracing::warn!(
                        "Ignoring item delimiter outside of an item at position {}",
                        position
                    );
                }
                SequenceItemHeader::SequenceDelimiter => return Ok(()),
            }
        }
    }

    /// Walk through the data elements of an item
    /// up to and including its item delimiter.
    fn walk_item(&mut self, implicit_le: bool) -> Result<()> {
        loop {
            let position = self.position;
            let header = self.decode_nested_header(implicit_le)?;
            if header.is_item_delimiter() {
                return Ok(());
            }
            ensure!(
                !header.is_item() && !header.is_sequence_delimiter(),
                UnexpectedTagSnafu {
                    tag: header.tag,
                    position,
                }
            );
            match header.len.get() {
                Some(len) => self.skip_bytes(len)?,
                // UN of undefined length switches to implicit VR little endian
                None => self.walk_sequence(implicit_le || header.vr == VR::UN)?,
            }
        }
    }
}

impl<D, BD, S> StatefulDecode for StatefulDecoder<D, BD, S>
where
    D: DecodeFrom<CaptureReader<S>>,
    BD: BasicDecode,
    S: BufRead,
{
    fn decode_header(&mut self) -> Result<DataElementHeader> {
        let (header, bytes_read) = self
            .decoder
            .decode_header(&mut self.from)
            .context(DecodeElementHeaderSnafu {
                position: self.position,
            })?;
        self.position += bytes_read as u64;
        Ok(header)
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let header = self
            .decoder
            .decode_item_header(&mut self.from)
            .context(DecodeItemHeaderSnafu {
                position: self.position,
            })?;
        self.position += 8;
        Ok(header)
    }

    fn read_to_vec(&mut self, length: u32, vec: &mut Vec<u8>) -> Result<()> {
        let position = self.position;
        let available = (&mut self.from)
            .take(u64::from(length))
            .read_to_end(vec)
            .context(ReadValueDataSnafu { position })? as u64;
        self.position += available;
        ensure!(
            available == u64::from(length),
            UnexpectedEndOfValueSnafu {
                position,
                expected: length,
                available,
            }
        );
        Ok(())
    }

    fn read_undefined_to_vec(&mut self, implicit_le: bool, vec: &mut Vec<u8>) -> Result<()> {
        self.from.start_capture(std::mem::take(vec));
        let outcome = self.walk_sequence(implicit_le);
        *vec = self.from.stop_capture();
        outcome?;
        // leave out the sequence delimiter
        let end = vec.len().saturating_sub(8);
        vec.truncate(end);
        Ok(())
    }

    fn skip_bytes(&mut self, length: u32) -> Result<()> {
        let position = self.position;
        let skipped = io::copy(
            &mut (&mut self.from).take(u64::from(length)),
            &mut io::sink(),
        )
        .context(SkipValueDataSnafu { position })?;
        self.position += skipped;
        ensure!(
            skipped == u64::from(length),
            UnexpectedEndOfValueSnafu {
                position,
                expected: length,
                available: skipped,
            }
        );
        Ok(())
    }

    fn is_at_end(&mut self) -> Result<bool> {
        let buf = self.from.inner.fill_buf().context(CheckEndSnafu {
            position: self.position,
        })?;
        Ok(buf.is_empty())
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    #[inline]
    fn endianness(&self) -> Endianness {
        self.basic.endianness()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DynStatefulDecoder, Error, ExplicitVRBigEndianStatefulDecoder,
        ExplicitVRLittleEndianStatefulDecoder, ImplicitVRLittleEndianStatefulDecoder,
        StatefulDecode,
    };
    use dicom_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use dicom_core::{Tag, VR};
    use dicom_encoding::transfer_syntax::{Codec, Endianness, TransferSyntax};

    fn is_stateful_decode<T: StatefulDecode>(_: &T) {}

    #[rustfmt::skip]
    const PIXEL_SPACING_EXPLICIT_LE: &[u8] = &[
        // (0028,0030) PixelSpacing, DS, len 8
        0x28, 0x00, 0x30, 0x00, b'D', b'S', 0x08, 0x00,
        b'0', b'.', b'5', b'\\', b'0', b'.', b'5', b' ',
        // (0028,0100) BitsAllocated, US, len 2
        0x28, 0x00, 0x00, 0x01, b'U', b'S', 0x02, 0x00,
        0x10, 0x00,
    ];

    #[test]
    fn reads_headers_and_values() {
        let mut decoder = ExplicitVRLittleEndianStatefulDecoder::explicit_le(PIXEL_SPACING_EXPLICIT_LE);
        is_stateful_decode(&decoder);
        assert!(decoder.is_explicit_vr());
        assert_eq!(decoder.endianness(), Endianness::Little);

        let header = decoder.decode_header().expect("should read header");
        assert_eq!(header.tag(), Tag(0x0028, 0x0030));
        assert_eq!(header.vr(), VR::DS);
        assert_eq!(header.length(), Length(8));
        assert_eq!(decoder.position(), 8);

        let mut value = Vec::new();
        decoder.read_to_vec(8, &mut value).expect("should read value");
        assert_eq!(value, b"0.5\\0.5 ");
        assert_eq!(decoder.position(), 16);
        assert!(!decoder.is_at_end().unwrap());

        let header = decoder.decode_header().expect("should read header");
        assert_eq!(header.tag(), Tag(0x0028, 0x0100));
        decoder.skip_bytes(2).expect("should skip value");
        assert_eq!(decoder.position(), 26);
        assert!(decoder.is_at_end().unwrap());
    }

    #[test]
    fn short_value_is_an_error() {
        let data = &PIXEL_SPACING_EXPLICIT_LE[..12];
        let mut decoder = ExplicitVRLittleEndianStatefulDecoder::explicit_le(data);
        decoder.decode_header().unwrap();

        let mut value = Vec::new();
        let err = decoder.read_to_vec(8, &mut value).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEndOfValue {
                position: 8,
                expected: 8,
                available: 4,
                ..
            }
        ));
        assert_eq!(value, b"0.5\\");
    }

    #[test]
    fn truncated_header_is_an_error() {
        let data = &PIXEL_SPACING_EXPLICIT_LE[..5];
        let mut decoder = ExplicitVRLittleEndianStatefulDecoder::explicit_le(data);
        assert!(!decoder.is_at_end().unwrap());
        let err = decoder.decode_header().unwrap_err();
        assert!(matches!(err, Error::DecodeElementHeader { position: 0, .. }));
    }

    #[rustfmt::skip]
    const NESTED_SEQUENCES_IMPLICIT_LE: &[u8] = &[
        // Item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // (0008,1150) ReferencedSOPClassUID, len 4
            0x08, 0x00, 0x50, 0x11, 0x04, 0x00, 0x00, 0x00,
            b'1', b'.', b'2', 0x00,
            // (0008,9215) DerivationCodeSequence, undefined length
            0x08, 0x00, 0x15, 0x92, 0xFF, 0xFF, 0xFF, 0xFF,
                // Item, len 0
                0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // Sequence Delimitation Item
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // Item Delimitation Item
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // Item, len 4
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00,
        0x01, 0x02, 0x03, 0x04,
        // Sequence Delimitation Item
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // (0010,0010) PatientName, len 2
        0x10, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00,
        b'J', b' ',
    ];

    #[test]
    fn captures_undefined_length_values() {
        let mut decoder =
            ImplicitVRLittleEndianStatefulDecoder::implicit_le(NESTED_SEQUENCES_IMPLICIT_LE);

        let mut value = Vec::new();
        decoder
            .read_undefined_to_vec(false, &mut value)
            .expect("should capture the whole sequence");
        // everything up to the outer sequence delimiter
        assert_eq!(&value[..], &NESTED_SEQUENCES_IMPLICIT_LE[..64]);
        assert_eq!(decoder.position(), 72);

        // the next element is read normally
        let header = decoder.decode_header().unwrap();
        assert_eq!(header.tag(), Tag(0x0010, 0x0010));
        assert_eq!(header.length(), Length(2));
    }

    #[test]
    fn unterminated_sequence_is_an_error() {
        let data = &NESTED_SEQUENCES_IMPLICIT_LE[..60];
        let mut decoder = ImplicitVRLittleEndianStatefulDecoder::implicit_le(data);
        let mut value = Vec::new();
        let err = decoder.read_undefined_to_vec(false, &mut value).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEndOfValue { .. }));
    }

    #[rustfmt::skip]
    const UN_SEQUENCE_CONTENT: &[u8] = &[
        // Item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // (0008,0100) CodeValue, implicit VR, len 4
            0x08, 0x00, 0x00, 0x01, 0x04, 0x00, 0x00, 0x00,
            b'1', b'2', b'3', b'4',
        // Item Delimitation Item
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // Sequence Delimitation Item
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn captures_implicit_content_in_explicit_data() {
        let mut decoder = ExplicitVRLittleEndianStatefulDecoder::explicit_le(UN_SEQUENCE_CONTENT);
        let mut value = Vec::new();
        decoder
            .read_undefined_to_vec(true, &mut value)
            .expect("should capture the sequence");
        assert_eq!(&value[..], &UN_SEQUENCE_CONTENT[..28]);
        assert_eq!(decoder.position(), 36);
        assert!(decoder.is_at_end().unwrap());
    }

    #[rustfmt::skip]
    const BAD_ITEM_CONTENT_EXPLICIT_BE: &[u8] = &[
        // Item, undefined length
        0xFF, 0xFE, 0xE0, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // another Item right inside the item
            0xFF, 0xFE, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn item_inside_item_is_an_error() {
        let mut decoder =
            ExplicitVRBigEndianStatefulDecoder::explicit_be(BAD_ITEM_CONTENT_EXPLICIT_BE);
        assert_eq!(decoder.endianness(), Endianness::Big);
        let mut value = Vec::new();
        let err = decoder.read_undefined_to_vec(false, &mut value).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedTag {
                tag: Tag(0xFFFE, 0xE000),
                position: 8,
                ..
            }
        ));
    }

    #[test]
    fn decodes_item_headers() {
        let data: &[u8] = &[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00];
        let mut decoder = ImplicitVRLittleEndianStatefulDecoder::implicit_le(data);
        let header = decoder.decode_item_header().unwrap();
        assert_eq!(header, SequenceItemHeader::SequenceDelimiter);
        assert_eq!(decoder.position(), 8);
    }

    #[test]
    fn dyn_decoder_from_transfer_syntax() {
        let ts = TransferSyntax::new(
            "1.2.840.10008.1.2.1",
            "Explicit VR Little Endian",
            Endianness::Little,
            true,
            Codec::None,
        );
        let mut decoder = DynStatefulDecoder::new_with_ts(PIXEL_SPACING_EXPLICIT_LE, &ts, 132)
            .expect("should create decoder");
        assert_eq!(decoder.position(), 132);
        let header = decoder.decode_header().unwrap();
        assert_eq!(header.vr(), VR::DS);
        assert_eq!(decoder.position(), 140);
    }

    #[test]
    fn deflated_transfer_syntax_is_unsupported() {
        let ts = TransferSyntax::new(
            "1.2.840.10008.1.2.1.99",
            "Deflated Explicit VR Little Endian",
            Endianness::Little,
            true,
            Codec::Unsupported,
        );
        let err = match DynStatefulDecoder::new_with_ts(PIXEL_SPACING_EXPLICIT_LE, &ts, 0) {
            Err(e) => e,
            Ok(_) => panic!("deflated transfer syntax should be rejected"),
        };
        assert!(matches!(
            err,
            Error::UnsupportedTransferSyntax {
                uid: "1.2.840.10008.1.2.1.99",
                ..
            }
        ));
    }
}
