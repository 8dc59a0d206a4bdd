use qoi::{decode, encode, Channels, Colorspace, Error, Header, Image, Pixel, QOI_BYTES_END};

fn single_pixel_stream() -> Vec<u8> {
  let mut bytes = b"qoif".to_vec();

  bytes.extend_from_slice(&[0, 0, 0, 1]); // width
  bytes.extend_from_slice(&[0, 0, 0, 1]); // height
  bytes.extend_from_slice(&[4, 0]); // channels, colorspace
  bytes.extend_from_slice(&[0xfe, 10, 20, 30]); // Rgb(10, 20, 30)
  bytes.extend_from_slice(&QOI_BYTES_END);

  bytes
}

#[test]
fn test_decoding_single_pixel_image() {
  assert_eq!(
    decode(&single_pixel_stream()),
    Ok(Image {
      header: Header {
        width: 1,
        height: 1,
        channels: Channels::Rgba,
        colorspace: Colorspace::SrgbLinearAlpha,
      },
      pixels: vec![Pixel::new(10, 20, 30, 255)],
    })
  );
}

#[test]
fn test_decoding_blank_image() {
  let image = decode(&encode(&[], 0, 0)).expect("Failed to decode image");

  assert!(image.pixels.is_empty());
  assert_eq!(image.header.num_pixels(), 0);
}

#[test]
fn test_decoding_rejects_every_altered_magic_byte() {
  for position in 0..4 {
    let mut bytes = single_pixel_stream();
    bytes[position] ^= 0x20;

    let mut found = *b"qoif";
    found[position] ^= 0x20;

    assert_eq!(decode(&bytes), Err(Error::InvalidMagic { found }));
  }
}

#[test]
fn test_decoding_bad_magic_stops_before_header() {
  // Too short for a header, but the magic is checked first.
  assert_eq!(decode(b"QOIF"), Err(Error::InvalidMagic { found: *b"QOIF" }));
}

#[test]
fn test_decoding_every_truncation_fails() {
  let pixels: Vec<Pixel> = (0..64u8)
    .map(|i| Pixel::new(i.wrapping_mul(7), i / 3, 255 - i, if i % 9 == 0 { 128 } else { 255 }))
    .chain(std::iter::repeat(Pixel::new(1, 2, 3, 4)).take(80))
    .collect();

  let bytes = encode(&pixels, 144, 1);

  for len in 0..bytes.len() {
    assert!(
      matches!(decode(&bytes[..len]), Err(Error::TruncatedStream { .. })),
      "stream truncated to {} of {} bytes did not fail",
      len,
      bytes.len()
    );
  }

  assert_eq!(decode(&bytes).map(|image| image.pixels), Ok(pixels));
}

#[test]
fn test_decoding_ignores_pixel_count_mismatch() {
  let pixels = vec![Pixel::new(9, 9, 9, 255); 5];
  let image = decode(&encode(&pixels, 100, 100)).expect("Failed to decode image");

  assert_eq!(image.header.num_pixels(), 10_000);
  assert_eq!(image.pixels.len(), 5);
}

#[test]
fn test_decoding_ignores_trailing_bytes() {
  let mut bytes = single_pixel_stream();
  bytes.extend_from_slice(b"trailing");

  let image = decode(&bytes).expect("Failed to decode image");

  assert_eq!(image.pixels, vec![Pixel::new(10, 20, 30, 255)]);
}
