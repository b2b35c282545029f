//! Fixing multi-valued strings which use an invalid value separator.
//!
//! The fix works on the raw value bytes,
//! so it has to happen before values are decoded:
//! splitting the value into multiple values
//! and parsing numbers both rely on the standard separator.

use crate::options::{FixSeparatorOptions, STANDARD_SEPARATOR};
use dicom_core::header::HasLength;
use dicom_core::RawElement;
use dicom_dictionary_std::StandardDataDictionary;
use dicom_parser::callback::CallbackRegistry;
use dicom_parser::resolve::resolve_vr;

/// Replace an invalid value separator with the standard backslash
/// in a raw element, in accordance to the given options.
///
/// If the element's VR is unknown,
/// it is first looked up in the standard data dictionary.
/// The element is then fixed if either:
///
/// - its VR is one of [`for_vrs`](FixSeparatorOptions::for_vrs); or
/// - its VR is still unknown and
///   [`process_unknown_vrs`](FixSeparatorOptions::process_unknown_vrs)
///   is enabled.
///
/// All other elements are returned unchanged.
///
/// Elements with an undefined length are always returned unchanged,
/// even when their VR is unknown and unknown VRs are processed:
/// their value holds items or fragments, never text.
///
/// If the VR is still unknown after the dictionary check
/// and a separator was replaced,
/// the element is given the VR in
/// [`resolve_unknown_as`](FixSeparatorOptions::resolve_unknown_as), if any.
///
/// Applying the fix again to the outcome has no effect.
pub fn fix_separator_callback(raw: RawElement, options: &FixSeparatorOptions) -> RawElement {
    if raw.length().is_undefined() {
        return raw;
    }

    let vr = raw
        .vr()
        .or_else(|| resolve_vr(&StandardDataDictionary, raw.tag()));

    let try_replace = match vr {
        Some(vr) => options.for_vrs().contains(&vr),
        None => options.process_unknown_vrs(),
    };
    if !try_replace {
        return raw;
    }

    let invalid = options.invalid_separator();
    if !raw.value().contains(&invalid) {
        return raw;
    }

    tracing::debug!(
        "Replacing separator {:?} in element {}",
        char::from(invalid),
        raw.tag()
    );
    let value: Vec<u8> = raw
        .value()
        .iter()
        .map(|&b| if b == invalid { STANDARD_SEPARATOR } else { b })
        .collect();
    let fixed = raw.with_value(value);

    match (vr, options.resolve_unknown_as()) {
        (None, Some(resolved)) => fixed.with_vr(Some(resolved)),
        _ => fixed,
    }
}

/// Install the separator fixer in the given callback registry,
/// replacing any callback installed before.
pub fn fix_separator(registry: &mut CallbackRegistry, options: FixSeparatorOptions) {
    registry.install(fix_separator_callback, options);
}
