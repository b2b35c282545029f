//! Reading data sets through the transfer syntax registry.
use dicom_core::header::HasLength;
use dicom_core::{RawElement, Tag, VR};
use dicom_parser::dataset::read::Error;
use dicom_parser::{DataSetReader, DataSetReaderOptions};
use dicom_transfer_syntax_registry::get_registry;

fn read_all(data: &[u8], uid: &str, options: DataSetReaderOptions) -> Vec<RawElement> {
    let ts = get_registry()
        .get(uid)
        .unwrap_or_else(|| panic!("transfer syntax {} should be registered", uid));
    DataSetReader::new_with_ts(data, ts, options)
        .expect("should create reader")
        .collect::<Result<Vec<_>, _>>()
        .expect("should read every element")
}

#[rustfmt::skip]
const IMPLICIT_LE: &[u8] = &[
    // (0008,0060) Modality, len 2
    0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00,
    b'M', b'R',
    // (0018,0050) SliceThickness, len 4
    0x18, 0x00, 0x50, 0x00, 0x04, 0x00, 0x00, 0x00,
    b'1', b'|', b'5', b' ',
    // (0019,0010) private creator, len 4
    0x19, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
    b'A', b'C', b'M', b'E',
    // (0019,1001) private attribute, len 2
    0x19, 0x00, 0x01, 0x10, 0x02, 0x00, 0x00, 0x00,
    0x01, 0x00,
    // (6000,3000) OverlayData, len 2
    0x00, 0x60, 0x00, 0x30, 0x02, 0x00, 0x00, 0x00,
    0xFF, 0x00,
];

#[test]
fn implicit_vr_little_endian() {
    let elements = read_all(IMPLICIT_LE, "1.2.840.10008.1.2\0", Default::default());

    let summary: Vec<_> = elements
        .iter()
        .map(|e| (e.tag(), e.vr(), e.value_offset()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Tag(0x0008, 0x0060), Some(VR::CS), 8),
            (Tag(0x0018, 0x0050), Some(VR::DS), 18),
            (Tag(0x0019, 0x0010), Some(VR::LO), 30),
            (Tag(0x0019, 0x1001), None, 42),
            (Tag(0x6000, 0x3000), Some(VR::OW), 52),
        ]
    );
    assert!(elements.iter().all(|e| e.is_implicit_vr() && e.is_little_endian()));
    assert_eq!(elements[1].value(), b"1|5 ");
}

#[rustfmt::skip]
const EXPLICIT_BE: &[u8] = &[
    // (0028,0030) PixelSpacing, DS, len 8
    0x00, 0x28, 0x00, 0x30, b'D', b'S', 0x00, 0x08,
    b'0', b'.', b'5', b'\\', b'0', b'.', b'5', b' ',
    // (7FE0,0010) PixelData, OW, len 4
    0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x00, 0x04,
    0x12, 0x34, 0x56, 0x78,
];

#[test]
fn explicit_vr_big_endian() {
    let elements = read_all(EXPLICIT_BE, "1.2.840.10008.1.2.2", Default::default());
    assert_eq!(elements.len(), 2);
    assert_eq!(
        elements[0],
        RawElement::new(Tag(0x0028, 0x0030), Some(VR::DS), &b"0.5\\0.5 "[..])
            .with_offset(8)
            .with_encoding(false, false)
    );
    // value bytes are kept in stream order
    assert_eq!(elements[1].value(), &[0x12, 0x34, 0x56, 0x78]);
    assert_eq!(elements[1].value_offset(), 28);
}

#[rustfmt::skip]
const JPEG_DATA_SET: &[u8] = &[
    // (0028,0010) Rows, US, len 2
    0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
    0x00, 0x02,
    // (7FE0,0010) PixelData, OB, undefined length
    0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // basic offset table, one frame
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        // fragment
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00,
        0xFF, 0xD8, 0xFF, 0xD9,
    // Sequence Delimitation Item
    0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
];

#[test]
fn encapsulated_pixel_data() {
    let elements = read_all(JPEG_DATA_SET, "1.2.840.10008.1.2.4.50", Default::default());
    assert_eq!(elements.len(), 2);
    let pixel_data = &elements[1];
    assert_eq!(pixel_data.tag(), Tag(0x7FE0, 0x0010));
    assert_eq!(pixel_data.vr(), Some(VR::OB));
    assert!(pixel_data.length().is_undefined());
    assert_eq!(pixel_data.value(), &JPEG_DATA_SET[22..46]);
    assert_eq!(pixel_data.value_offset(), 22);
}

#[test]
fn offset_and_stop_tag() {
    let options = DataSetReaderOptions::default()
        .base_offset(132)
        .stop_before(Tag(0x0019, 0x0000));
    let elements = read_all(IMPLICIT_LE, "1.2.840.10008.1.2", options);
    let offsets: Vec<_> = elements.iter().map(RawElement::value_offset).collect();
    assert_eq!(offsets, vec![140, 150]);
}

#[test]
fn deflated_cannot_be_read() {
    let ts = get_registry()
        .get("1.2.840.10008.1.2.1.99")
        .expect("deflated transfer syntax should be known");
    let outcome = DataSetReader::new_with_ts(IMPLICIT_LE, ts, Default::default());
    assert!(matches!(outcome, Err(Error::CreateDecoder { .. })));
}

#[test]
fn truncated_data_set_fails_once() {
    let ts = get_registry().get("1.2.840.10008.1.2").unwrap();
    // cut in the middle of the private creator's value
    let mut reader =
        DataSetReader::new_with_ts(&IMPLICIT_LE[..33], ts, Default::default()).unwrap();
    assert!(reader.next().unwrap().is_ok());
    assert!(reader.next().unwrap().is_ok());
    assert!(matches!(
        reader.next(),
        Some(Err(Error::ReadValue {
            tag: Tag(0x0019, 0x0010),
            ..
        }))
    ));
    assert!(reader.next().is_none());
}
