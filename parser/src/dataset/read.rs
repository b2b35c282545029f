//! This module contains a mid-level abstraction for reading DICOM content
//! sequentially.
//!
//! The [`DataSetReader`] frames each data element at the top level
//! of a data set into a [`RawElement`].
//! Values are never decoded:
//! elements with an undefined length,
//! such as sequences and encapsulated pixel data,
//! have their nested content captured as raw bytes.
use crate::callback::CallbackRegistry;
use crate::resolve::resolve_vr;
use crate::stateful::decode::{DynStatefulDecoder, Error as DecoderError, StatefulDecode};
use dicom_core::dictionary::DataDictionary;
use dicom_core::header::{DataElementHeader, Header, Length};
use dicom_core::{RawElement, Tag, VR};
use dicom_dictionary_std::StandardDataDictionary;
use dicom_encoding::transfer_syntax::{Endianness, TransferSyntax};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::BufRead;
use std::iter::Iterator;

fn is_stateful_decode<T>(_: &T)
where
    T: StatefulDecode,
{
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not create decoder"))]
    CreateDecoder {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read element header"))]
    ReadHeader {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read {} value bytes for element tagged {}", len, tag))]
    ReadValue {
        len: Length,
        tag: Tag,
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display(
        "Unexpected item tag {} at position {} while reading element header",
        tag,
        position
    ))]
    UnexpectedItemTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Element tagged {} has an undefined length, which is not allowed for VR {}",
        tag,
        vr
    ))]
    InconsistentLength {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The set of options for the data set reader.
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct DataSetReaderOptions {
    /// the position of the reader as received at building time
    pub base_offset: u64,
    /// stop reading at the first element with this tag or greater
    pub stop_before: Option<Tag>,
    /// the element callback applied to every element read
    pub callback: CallbackRegistry,
}

impl DataSetReaderOptions {
    /// Replace the base reader offset of the options.
    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.base_offset = base_offset;
        self
    }

    /// Stop reading once an element with the given tag or greater
    /// is found.
    /// That element's value is not read.
    pub fn stop_before(mut self, tag: Tag) -> Self {
        self.stop_before = Some(tag);
        self
    }

    /// Replace the element callback registry of the options.
    pub fn callback(mut self, callback: CallbackRegistry) -> Self {
        self.callback = callback;
        self
    }
}

/// A reader of the data elements in a DICOM data set,
/// producing one [`RawElement`] per element at the top level.
///
/// The VR of elements in an implicit VR transfer syntax
/// is resolved with the help of the data dictionary `D`.
/// Each element goes through the
/// [callback registry](DataSetReaderOptions::callback)
/// before it is yielded.
///
/// Iteration ends cleanly when the source ends
/// right before an element header,
/// or when the [stop tag](DataSetReaderOptions::stop_before) is reached.
/// After the first error, the reader yields nothing else.
#[derive(Debug)]
pub struct DataSetReader<S, D = StandardDataDictionary> {
    /// the stateful decoder
    parser: S,
    /// the dictionary for resolving implicit value representations
    dictionary: D,
    /// the options of this reader
    options: DataSetReaderOptions,
    /// fuse the iteration process if true
    hard_break: bool,
}

impl<'s> DataSetReader<DynStatefulDecoder<'s>> {
    /// Create a new data set reader over the given source
    /// in the given transfer syntax,
    /// using the standard data dictionary.
    pub fn new_with_ts<R>(
        source: R,
        ts: &TransferSyntax,
        options: DataSetReaderOptions,
    ) -> Result<Self>
    where
        R: 's + BufRead,
    {
        let parser = DynStatefulDecoder::new_with_ts(source, ts, 0).context(CreateDecoderSnafu)?;

        is_stateful_decode(&parser);

        Ok(DataSetReader::new(parser, StandardDataDictionary, options))
    }
}

impl<S, D> DataSetReader<S, D> {
    /// Create a new data set reader
    /// with the given stateful decoder, dictionary and options.
    pub fn new(decoder: S, dictionary: D, options: DataSetReaderOptions) -> Self {
        DataSetReader {
            parser: decoder,
            dictionary,
            options,
            hard_break: false,
        }
    }

    /// Retrieve the options of this reader.
    pub fn options(&self) -> &DataSetReaderOptions {
        &self.options
    }

    /// Retrieve the inner stateful decoder from this data set reader.
    pub fn into_decoder(self) -> S {
        self.parser
    }
}

impl<S, D> DataSetReader<S, D>
where
    S: StatefulDecode,
{
    /// The current position of the reader in the stream,
    /// including the base offset.
    pub fn position(&self) -> u64 {
        self.options.base_offset + self.parser.position()
    }
}

impl<S, D> Iterator for DataSetReader<S, D>
where
    S: StatefulDecode,
    D: DataDictionary,
{
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hard_break {
            return None;
        }
        match self.read_element() {
            Ok(Some(elem)) => Some(Ok(elem)),
            Ok(None) => {
                self.hard_break = true;
                None
            }
            Err(e) => {
                self.hard_break = true;
                Some(Err(e))
            }
        }
    }
}

impl<S, D> DataSetReader<S, D>
where
    S: StatefulDecode,
    D: DataDictionary,
{
    fn read_element(&mut self) -> Result<Option<RawElement>> {
        loop {
            if self.parser.is_at_end().context(ReadHeaderSnafu)? {
                return Ok(None);
            }

            let position = DataSetReader::position(self);
            let header = self.parser.decode_header().context(ReadHeaderSnafu)?;

            if header.is_item_delimiter() {
                // happens after some sequences with a defined length
                tracing::warn!(
                    "Ignoring stray item delimiter at position {} outside of a sequence",
                    position
                );
                continue;
            }
            ensure!(
                !header.is_item() && !header.is_sequence_delimiter(),
                UnexpectedItemTagSnafu {
                    tag: header.tag,
                    position,
                }
            );

            if let Some(stop) = self.options.stop_before {
                if header.tag >= stop {
                    tracing::debug!(
                        "Stopping at element {} (position {}), at or after {}",
                        header.tag,
                        position,
                        stop
                    );
                    return Ok(None);
                }
            }

            return self.read_value(header).map(Some);
        }
    }

    fn read_value(&mut self, header: DataElementHeader) -> Result<RawElement> {
        let explicit_vr = self.parser.is_explicit_vr();
        let value_offset = DataSetReader::position(self);

        let mut value = Vec::new();
        let framed = match header.len.get() {
            Some(len) => self.parser.read_to_vec(len, &mut value),
            None => {
                ensure!(
                    !explicit_vr || allows_undefined_length(header.vr),
                    InconsistentLengthSnafu {
                        tag: header.tag,
                        vr: header.vr,
                    }
                );
                self.parser
                    .read_undefined_to_vec(explicit_vr && header.vr == VR::UN, &mut value)
            }
        };
        framed.context(ReadValueSnafu {
            len: header.len,
            tag: header.tag,
        })?;

        let vr = if explicit_vr {
            Some(header.vr)
        } else {
            resolve_vr(&self.dictionary, header.tag)
        };

        tracing::trace!(
            "Framed element {} {} ({} bytes) at position {}",
            header.tag,
            vr.map(VR::as_str).unwrap_or("??"),
            value.len(),
            value_offset
        );

        let raw = RawElement::new_with_len(header.tag, vr, header.len, value)
            .with_offset(value_offset)
            .with_encoding(
                !explicit_vr,
                self.parser.endianness() == Endianness::Little,
            );

        Ok(self.options.callback.invoke(raw))
    }
}

/// Whether an element with this VR may have an undefined length
/// in an explicit VR transfer syntax.
fn allows_undefined_length(vr: VR) -> bool {
    matches!(vr, VR::SQ | VR::UN | VR::OB | VR::OW)
}
