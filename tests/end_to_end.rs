use exif_caption::CaptionError;
use exif_caption::config::Config;
use exif_caption::exif::{RequiredTag, read_tags};
use exif_caption::pipeline::caption_image;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Minimal little-endian TIFF/EXIF writer ────────────────────────────

const ASCII: u16 = 2;
const SHORT: u16 = 3;
const LONG: u16 = 4;
const RATIONAL: u16 = 5;
const SRATIONAL: u16 = 10;

const EXIF_IFD_POINTER: u16 = 0x8769;

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

fn ascii(tag: u16, s: &str) -> Entry {
    let mut data = s.as_bytes().to_vec();
    data.push(0);
    Entry { tag, kind: ASCII, count: data.len() as u32, data }
}

fn short(tag: u16, v: u16) -> Entry {
    Entry { tag, kind: SHORT, count: 1, data: v.to_le_bytes().to_vec() }
}

fn long(tag: u16, v: u32) -> Entry {
    Entry { tag, kind: LONG, count: 1, data: v.to_le_bytes().to_vec() }
}

fn rational(tag: u16, num: u32, den: u32) -> Entry {
    let mut data = num.to_le_bytes().to_vec();
    data.extend_from_slice(&den.to_le_bytes());
    Entry { tag, kind: RATIONAL, count: 1, data }
}

fn srational(tag: u16, num: i32, den: i32) -> Entry {
    let mut data = num.to_le_bytes().to_vec();
    data.extend_from_slice(&den.to_le_bytes());
    Entry { tag, kind: SRATIONAL, count: 1, data }
}

fn ifd_len(entries: usize) -> u32 {
    (2 + 12 * entries + 4) as u32
}

fn write_ifd(out: &mut Vec<u8>, entries: &mut [Entry], data: &mut Vec<u8>, data_base: u32) {
    entries.sort_by_key(|e| e.tag);
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for e in entries.iter() {
        out.extend_from_slice(&e.tag.to_le_bytes());
        out.extend_from_slice(&e.kind.to_le_bytes());
        out.extend_from_slice(&e.count.to_le_bytes());
        if e.data.len() <= 4 {
            let mut inline = e.data.clone();
            inline.resize(4, 0);
            out.extend_from_slice(&inline);
        } else {
            let offset = data_base + data.len() as u32;
            out.extend_from_slice(&offset.to_le_bytes());
            data.extend_from_slice(&e.data);
            if data.len() % 2 == 1 {
                data.push(0);
            }
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
}

/// IFD0 holds `ifd0` plus a pointer to an Exif sub-IFD holding `exif`.
fn build_tiff(mut ifd0: Vec<Entry>, mut exif: Vec<Entry>) -> Vec<u8> {
    let ifd0_offset = 8u32;
    let exif_offset = ifd0_offset + ifd_len(ifd0.len() + 1);
    let data_base = exif_offset + ifd_len(exif.len());
    ifd0.push(long(EXIF_IFD_POINTER, exif_offset));

    let mut out = b"II".to_vec();
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&ifd0_offset.to_le_bytes());

    let mut data = Vec::new();
    write_ifd(&mut out, &mut ifd0, &mut data, data_base);
    write_ifd(&mut out, &mut exif, &mut data, data_base);
    assert_eq!(out.len() as u32, data_base);
    out.extend_from_slice(&data);
    out
}

/// Encode a small JPEG and splice an APP1 Exif segment in right after SOI.
fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut jpeg = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 32, Rgb([30, 60, 90])))
        .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let mut app1 = vec![0xFF, 0xE1];
    app1.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(tiff);

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

fn sample_exif(with_model: bool) -> Vec<u8> {
    let mut ifd0 = Vec::new();
    if with_model {
        ifd0.push(ascii(RequiredTag::Model.code(), "X"));
    }
    let exif = vec![
        short(RequiredTag::ISOSpeedRatings.code(), 200),
        srational(RequiredTag::ShutterSpeedValue.code(), 7, 1),
        rational(RequiredTag::ApertureValue.code(), 4, 1),
        rational(RequiredTag::FocalLength.code(), 50, 1),
        ascii(RequiredTag::LensModel.code(), "Y"),
    ];
    build_tiff(ifd0, exif)
}

fn write_sample(dir: &TempDir, with_model: bool) -> PathBuf {
    let path = dir.path().join("sample.jpg");
    std::fs::write(&path, jpeg_with_exif(&sample_exif(with_model))).unwrap();
    path
}

// ── Tests ─────────────────────────────────────────────────────────────

#[test]
fn captions_a_real_jpeg() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, true);

    let result = caption_image(&path, &Config::default()).unwrap();
    assert_eq!(result.caption, "X, Y, 50mm, F4, 1/125, ISO 200");
    assert_eq!((result.canvas.width(), result.canvas.height()), (64, 32));
    assert!(result.written_to.is_none());
}

#[test]
fn reads_all_required_tags() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, true);

    let tags = read_tags(&path).unwrap();
    assert_eq!(tags.len(), RequiredTag::ALL.len());
}

#[test]
fn missing_model_stops_before_rendering() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, false);
    let destination = dir.path().join("out.png");

    let mut config = Config::default();
    config.output.destination = Some(destination.clone());

    let err = caption_image(&path, &config).unwrap_err();
    assert!(matches!(err, CaptionError::MissingTag(RequiredTag::Model)));
    assert!(!destination.exists());
}

#[test]
fn writes_destination_when_configured() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, true);
    let destination = dir.path().join("labeled.png");

    let mut config = Config::default();
    config.output.destination = Some(destination.clone());

    let result = caption_image(&path, &config).unwrap();
    assert_eq!(result.written_to.as_deref(), Some(destination.as_path()));

    let written = image::open(Path::new(&destination)).unwrap();
    assert_eq!((written.width(), written.height()), (64, 32));
}
