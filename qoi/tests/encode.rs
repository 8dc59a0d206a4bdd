use qoi::{encode, Pixel, QOI_BYTES_END, QOI_HEADER_LEN};

#[test]
fn test_encoding_blank_image() {
  let encoded = encode(&[], 0, 0);

  assert_eq!(encoded.len(), QOI_HEADER_LEN + QOI_BYTES_END.len());
  assert_eq!(&encoded[..4], b"qoif");
  assert_eq!(encoded[QOI_HEADER_LEN..], QOI_BYTES_END);
}

#[test]
fn test_encoding_single_pixel_image() {
  assert_eq!(
    encode(&[Pixel::new(10, 20, 30, 255)], 1, 1),
    vec![
      b'q', b'o', b'i', b'f',
      0, 0, 0, 1, // width
      0, 0, 0, 1, // height
      4, 0, // channels, colorspace
      0xfe, 10, 20, 30, // Rgb(10, 20, 30)
      0, 0, 0, 0, 0, 0, 0, 1,
    ]
  );
}

#[test]
fn test_encoding_always_advertises_rgba() {
  // Even an all-opaque image is labelled as four channel sRGB.
  let encoded = encode(&[Pixel::new(1, 2, 3, 255)], 1, 1);

  assert_eq!(encoded[12..14], [4, 0]);
}

#[test]
fn test_encoding_long_run_is_split() {
  let pixel = Pixel::new(101, 102, 103, 104);
  let mut pixels = vec![pixel; 71];
  pixels.push(Pixel::new(0, 0, 0, 0));

  let encoded = encode(&pixels, 72, 1);

  assert_eq!(
    encoded[QOI_HEADER_LEN..encoded.len() - QOI_BYTES_END.len()],
    [
      0xff, 101, 102, 103, 104, // Rgba
      0xc0 | 61, // Run(62)
      0xc0 | 7, // Run(8)
      0x00, // Index(0)
    ]
  );
}

#[test]
fn test_encoding_is_deterministic() {
  let pixels: Vec<Pixel> = (0..=255u8)
    .map(|i| Pixel::new(i, i ^ 0x55, i / 2, 255 - i / 4))
    .collect();

  assert_eq!(encode(&pixels, 16, 16), encode(&pixels, 16, 16));
}
