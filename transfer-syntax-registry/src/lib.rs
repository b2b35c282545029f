//! This crate contains the DICOM transfer syntax registry.
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier.
//!
//! ```
//! use dicom_transfer_syntax_registry::get_registry;
//!
//! let ts = get_registry().get("1.2.840.10008.1.2.1\0").unwrap();
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! ```

pub mod entries;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use dicom_encoding::transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a DICOM transfer syntax by its UID.
    ///
    /// Trailing null characters and spaces are ignored,
    /// as these are used to pad UIDs to an even length.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let ts_uid = uid.as_ref().trim_end_matches(|c| c == '\0' || c == ' ');
        self.m.get(ts_uid)
    }

    /// Iterate over all registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// Register the given transfer syntax (TS) to the system. It can override
    /// another TS with the same UID, in the only case that the previous TS
    /// could not be read while the new one can.
    /// Otherwise, this function returns `false`
    /// and no changes are made.
    fn register(&mut self, ts: TransferSyntax) -> bool {
        match self.m.entry(ts.uid()) {
            Entry::Occupied(mut e) => {
                let replace = matches!(
                    (e.get().codec(), ts.codec()),
                    (Codec::Unsupported, Codec::None | Codec::EncapsulatedPixelData)
                );
                if replace {
                    e.insert(ts);
                } else {
                    tracing::warn!(
                        "Transfer syntax {} is already registered, ignoring {}",
                        ts.uid(),
                        ts.name()
                    );
                }
                replace
            }
            Entry::Vacant(e) => {
                e.insert(ts);
                true
            }
        }
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        Self::get(self, uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = initialize_codecs();
}

/// Retrieve the default transfer syntax.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

fn initialize_codecs() -> TransferSyntaxRegistry {
    use crate::entries::*;

    let mut registry = TransferSyntaxRegistry {
        m: HashMap::with_capacity(16),
    };

    for ts in [
        // the three base transfer syntaxes, fully supported
        EXPLICIT_VR_LITTLE_ENDIAN,
        IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BIG_ENDIAN,
        // encapsulated pixel data
        ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
        RLE_LOSSLESS,
        JPEG_BASELINE,
        JPEG_EXTENDED,
        JPEG_LOSSLESS_NON_HIERARCHICAL,
        JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
        JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
        JPEG_LS_LOSSY_IMAGE_COMPRESSION,
        JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_IMAGE_COMPRESSION,
        // known but not supported
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    ] {
        registry.register(ts);
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::{entries, get_registry, TransferSyntaxRegistry};
    use byteordered::Endianness;
    use dicom_encoding::transfer_syntax::{Codec, TransferSyntaxIndex};
    use std::collections::HashMap;

    #[test]
    fn contains_base_ts() {
        let registry = get_registry();

        // contains implicit VR little endian and is fully supported
        let ts = registry.get("1.2.840.10008.1.2");
        assert!(ts.is_some());
        let ts = ts.unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2");
        assert_eq!(ts.name(), "Implicit VR Little Endian");
        assert_eq!(ts.endianness(), Endianness::Little);
        assert!(!ts.is_explicit_vr());
        assert!(ts.decoder().is_some());

        // should work the same for trailing padding
        let ts = registry.get("1.2.840.10008.1.2\0");
        assert_eq!(ts.map(|ts| ts.uid()), Some("1.2.840.10008.1.2"));
        let ts = registry.get("1.2.840.10008.1.2.1 ");
        assert_eq!(ts.map(|ts| ts.uid()), Some("1.2.840.10008.1.2.1"));

        // contains explicit VR big endian
        let ts = registry.get("1.2.840.10008.1.2.2");
        assert!(ts.is_some());
        let ts = ts.unwrap();
        assert_eq!(ts.endianness(), Endianness::Big);
        assert!(ts.is_explicit_vr());
        assert!(ts.decoder().is_some());
    }

    #[test]
    fn contains_encapsulated_ts() {
        let registry = get_registry();

        for uid in [
            "1.2.840.10008.1.2.4.50",
            "1.2.840.10008.1.2.4.51",
            "1.2.840.10008.1.2.4.57",
            "1.2.840.10008.1.2.4.70",
            "1.2.840.10008.1.2.4.80",
            "1.2.840.10008.1.2.4.81",
            "1.2.840.10008.1.2.4.90",
            "1.2.840.10008.1.2.4.91",
            "1.2.840.10008.1.2.5",
            "1.2.840.10008.1.2.1.98",
        ] {
            let ts = registry
                .get(uid)
                .unwrap_or_else(|| panic!("transfer syntax {} should be registered", uid));
            assert!(ts.is_encapsulated_pixel_data());
            assert!(ts.is_explicit_vr());
            assert_eq!(ts.endianness(), Endianness::Little);
            assert!(ts.decoder().is_some());
        }
    }

    #[test]
    fn deflated_is_known_but_unsupported() {
        let ts = get_registry()
            .get("1.2.840.10008.1.2.1.99")
            .expect("deflated transfer syntax should be registered");
        assert!(ts.unsupported());
        assert!(ts.decoder().is_none());
    }

    #[test]
    fn unknown_uids_are_not_found() {
        let registry = get_registry();
        assert!(registry.get("1.2.840.10008.1.2.4.201").is_none());
        assert!(registry.get("").is_none());
        // through the index trait
        assert!(TransferSyntaxIndex::get(registry, "1.2.3.4").is_none());
    }

    #[test]
    fn registration_only_replaces_unsupported() {
        let mut registry = TransferSyntaxRegistry { m: HashMap::new() };
        assert!(registry.register(entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN));
        assert!(!registry.register(entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN));
        assert_eq!(
            registry.get("1.2.840.10008.1.2.1.99").map(|ts| *ts.codec()),
            Some(Codec::Unsupported)
        );
        assert_eq!(registry.iter().count(), 1);
    }
}
