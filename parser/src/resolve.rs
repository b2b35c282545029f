//! Value representation resolution for implicit VR data sets.
//!
//! In implicit VR transfer syntaxes the VR is not in the stream,
//! so it has to be recovered from the element's tag.
//! A few attributes have a VR which depends on the transfer syntax,
//! and these are settled here before the dictionary is consulted.

use dicom_core::dictionary::DataDictionary;
use dicom_core::{Tag, VR};
use dicom_dictionary_std::tags;

/// Resolve the value representation of an element
/// read in an implicit VR transfer syntax.
///
/// - Items and delimiters (group `FFFE`) have no VR.
/// - _Pixel Data_ and _Overlay Data_ are always `OW`
///   in implicit VR little endian.
/// - Everything else is looked up in the given dictionary.
///
/// Returns `None` if the VR could not be resolved.
/// This is not an error:
/// private and unknown attributes are expected in real data sets.
pub fn resolve_vr<D>(dict: &D, tag: Tag) -> Option<VR>
where
    D: DataDictionary,
{
    if tag.group() == 0xFFFE {
        return None;
    }
    if is_pixel_data(tag) || is_overlay_data(tag) {
        return Some(VR::OW);
    }
    dict.resolve_vr(tag)
}

fn is_pixel_data(tag: Tag) -> bool {
    tag == tags::PIXEL_DATA
}

/// Overlay Data (60xx,3000). Odd groups are private.
fn is_overlay_data(tag: Tag) -> bool {
    tag.group() & 0xFF01 == 0x6000 && tag.element() == 0x3000
}
