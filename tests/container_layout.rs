//! Byte layout of assembled icon containers

use favforge::{Error, IconContainer, RasterImage};

fn image(dimension: u32, len: usize) -> RasterImage {
    // Vary the fill so payload ordering is observable in the output.
    RasterImage::new(dimension, vec![(dimension % 251) as u8; len])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

fn sequences() -> Vec<Vec<RasterImage>> {
    vec![
        vec![image(16, 1)],
        vec![image(16, 300), image(32, 600)],
        vec![image(256, 1000), image(1, 7), image(48, 4096)],
        (1..=12).map(|i| image(i * 20, (i * 37) as usize)).collect(),
    ]
}

#[test]
fn total_length_is_header_directory_and_payloads() {
    for images in sequences() {
        let ico = IconContainer::assemble(&images).unwrap();
        let payloads: usize = images.iter().map(|i| i.bytes.len()).sum();
        assert_eq!(ico.as_bytes().len(), 6 + 16 * images.len() + payloads);
    }
}

#[test]
fn offsets_accumulate_from_end_of_directory() {
    for images in sequences() {
        let ico = IconContainer::assemble(&images).unwrap();
        let bytes = ico.as_bytes();
        let mut expected = 6 + 16 * images.len();
        for (i, img) in images.iter().enumerate() {
            let record = 6 + 16 * i;
            assert_eq!(u32_at(bytes, record + 8) as usize, img.bytes.len());
            assert_eq!(u32_at(bytes, record + 12) as usize, expected);
            assert_eq!(&bytes[expected..expected + img.bytes.len()], &img.bytes[..]);
            expected += img.bytes.len();
        }
    }
}

#[test]
fn dimension_bytes_follow_the_256_rule() {
    for images in sequences() {
        let ico = IconContainer::assemble(&images).unwrap();
        for (i, img) in images.iter().enumerate() {
            let record = &ico.as_bytes()[6 + 16 * i..];
            let expected = if img.dimension == 256 { 0 } else { img.dimension as u8 };
            assert_eq!(record[0], expected);
            assert_eq!(record[1], expected);
            assert_eq!(ico.entries()[i].dimension(), img.dimension);
        }
    }
}

#[test]
fn planes_and_bit_depth_are_fixed() {
    let ico = IconContainer::assemble(&[image(16, 3), image(256, 3)]).unwrap();
    for entry in ico.entries() {
        assert_eq!(entry.palette_size, 0);
        assert_eq!(entry.reserved, 0);
        assert_eq!(entry.color_planes, 1);
        assert_eq!(entry.bits_per_pixel, 32);
    }
}

#[test]
fn assembly_is_deterministic() {
    for images in sequences() {
        let first = IconContainer::assemble(&images).unwrap();
        let second = IconContainer::assemble(&images).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}

#[test]
fn favicon_pair_scenario() {
    let ico = IconContainer::assemble(&[image(16, 300), image(32, 600)]).unwrap();
    assert_eq!(ico.as_bytes().len(), 938);
    assert_eq!(ico.entries()[0].offset, 38);
    assert_eq!(ico.entries()[1].offset, 338);
}

#[test]
fn empty_input_produces_no_container() {
    match IconContainer::assemble(&[]) {
        Err(Error::InvalidInput(msg)) => assert!(msg.contains("at least one")),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn write_to_persists_the_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.ico");
    let ico = IconContainer::assemble(&[image(16, 300), image(32, 600)]).unwrap();
    ico.write_to(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), ico.as_bytes());
}

#[test]
fn write_to_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("favicon.ico");
    let ico = IconContainer::assemble(&[image(16, 1)]).unwrap();
    let err = ico.write_to(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
