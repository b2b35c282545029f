//! Behavior of the separator fixer, on its own and while reading data sets.
use dicom_core::header::HasLength;
use dicom_core::{RawElement, Tag, VR};
use dicom_fixer::{fix_separator, fix_separator_callback, FixSeparatorOptions};
use dicom_parser::{CallbackRegistry, DataSetReader, DataSetReaderOptions};
use dicom_transfer_syntax_registry::get_registry;

fn ds_only(process_unknown_vrs: bool) -> FixSeparatorOptions {
    FixSeparatorOptions::builder()
        .invalid_separator(b'|')
        .for_vrs([VR::DS])
        .process_unknown_vrs(process_unknown_vrs)
        .build()
        .expect("options should be valid")
}

/// Byte sequences with zero or more invalid separators,
/// including some with standard separators already.
fn sample_values() -> Vec<Vec<u8>> {
    vec![
        b"".to_vec(),
        b"1.0".to_vec(),
        b"|".to_vec(),
        b"||".to_vec(),
        b"1.0|2.0|3.0".to_vec(),
        b"1.0\\2.0|3.0 ".to_vec(),
        b"|1|\\|".to_vec(),
        vec![0x00, b'|', 0xFF, b'\\', b'|'],
    ]
}

#[test]
fn replacement_correctness() {
    let raw = RawElement::new(Tag(0x0028, 0x0030), Some(VR::DS), &b"1.0|2.0|3.0"[..]);
    let fixed = fix_separator_callback(raw, &ds_only(true));
    assert_eq!(fixed.value(), b"1.0\\2.0\\3.0");
}

#[test]
fn fixing_twice_is_fixing_once() {
    let options = FixSeparatorOptions::builder()
        .invalid_separator(b'|')
        .resolve_unknown_as(VR::DS)
        .build()
        .unwrap();
    let vrs = [Some(VR::DS), Some(VR::IS), Some(VR::LO), None];

    for value in sample_values() {
        for vr in vrs {
            let raw = RawElement::new(Tag(0x0009, 0x1001), vr, value.clone());
            let once = fix_separator_callback(raw, &options);
            let twice = fix_separator_callback(once.clone(), &options);
            assert_eq!(once, twice, "value {:?} with VR {:?}", value, vr);
            assert!(!twice.value().contains(&b'|') || vr == Some(VR::LO));
        }
    }
}

#[test]
fn ineligible_elements_pass_through() {
    let mut registry = CallbackRegistry::new();
    fix_separator(&mut registry, ds_only(false));

    for value in sample_values() {
        let candidates = [
            RawElement::new(Tag(0x0010, 0x0010), Some(VR::PN), value.clone()),
            RawElement::new(Tag(0x0020, 0x0013), Some(VR::IS), value.clone()),
            // unknown VRs are skipped here
            RawElement::new(Tag(0x0009, 0x1001), None, value.clone())
                .with_encoding(true, true),
        ];
        for raw in candidates {
            let out = registry.invoke(raw.clone());
            assert_eq!(out.value(), raw.value());
            assert_eq!(out, raw);
        }
    }
}

#[test]
fn eligibility_table() {
    let value = &b"7|8"[..];
    let known_in_set = RawElement::new(Tag(0x0028, 0x0030), Some(VR::DS), value);
    let known_not_in_set = RawElement::new(Tag(0x0008, 0x0060), Some(VR::CS), value);
    let unresolved = RawElement::new(Tag(0x0011, 0x1010), None, value);

    // known VR, in the target set: replaced
    let out = fix_separator_callback(known_in_set.clone(), &ds_only(false));
    assert_eq!(out.value(), b"7\\8");
    // known VR, not in the target set: unchanged
    let out = fix_separator_callback(known_not_in_set.clone(), &ds_only(true));
    assert_eq!(out, known_not_in_set);
    // unresolved VR, unknown VRs processed: replaced
    let out = fix_separator_callback(unresolved.clone(), &ds_only(true));
    assert_eq!(out.value(), b"7\\8");
    assert_eq!(out.vr(), None);
    // unresolved VR, unknown VRs skipped: unchanged
    let out = fix_separator_callback(unresolved.clone(), &ds_only(false));
    assert_eq!(out, unresolved);
}

#[test]
fn unknown_vr_policy() {
    let raw = RawElement::new(Tag(0x0029, 0x1020), None, &b"0.1|0.2"[..]);

    let processed = fix_separator_callback(raw.clone(), &ds_only(true));
    assert_eq!(processed.value(), b"0.1\\0.2");
    assert_eq!(processed.length(), raw.length());

    let skipped = fix_separator_callback(raw.clone(), &ds_only(false));
    assert_eq!(skipped.value(), raw.value());
}

#[rustfmt::skip]
const IMPLICIT_LE: &[u8] = &[
    // (0008,0060) Modality, len 2
    0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00,
    b'M', b'|',
    // (0020,0013) InstanceNumber, len 4
    0x20, 0x00, 0x13, 0x00, 0x04, 0x00, 0x00, 0x00,
    b'1', b'|', b'2', b' ',
    // (0028,0030) PixelSpacing, len 8
    0x28, 0x00, 0x30, 0x00, 0x08, 0x00, 0x00, 0x00,
    b'0', b'.', b'5', b'|', b'0', b'.', b'5', b' ',
    // (0029,1010) private attribute, len 4
    0x29, 0x00, 0x10, 0x10, 0x04, 0x00, 0x00, 0x00,
    b'a', b'|', b'b', b' ',
];

#[test]
fn fixes_elements_while_reading() {
    let ts = get_registry().get("1.2.840.10008.1.2").unwrap();
    let mut registry = CallbackRegistry::new();
    fix_separator(&mut registry, FixSeparatorOptions::new(b'|').unwrap());
    let options = DataSetReaderOptions::default().callback(registry);

    let elements: Vec<_> = DataSetReader::new_with_ts(IMPLICIT_LE, ts, options)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let values: Vec<_> = elements.iter().map(|e| (e.vr(), e.value())).collect();
    assert_eq!(
        values,
        vec![
            (Some(VR::CS), &b"M|"[..]),
            (Some(VR::IS), &b"1\\2 "[..]),
            (Some(VR::DS), &b"0.5\\0.5 "[..]),
            (None, &b"a\\b "[..]),
        ]
    );
    // framing information is kept
    assert_eq!(elements[2].value_offset(), 30);
    assert!(elements.iter().all(RawElement::is_implicit_vr));
}
