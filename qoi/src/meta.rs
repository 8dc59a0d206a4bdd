use crate::pixel::Pixel;

/// The 8 byte sentinel that terminates the chunk stream.
pub const QOI_BYTES_END: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
/// The 4 byte magic every QOI stream starts with.
pub const QOI_BYTES_MAGIC: &[u8; 4] = b"qoif";
/// Length of the header in bytes, magic included.
pub const QOI_HEADER_LEN: usize = 14;
/// The longest run a single run chunk can encode.
pub const QOI_MAX_RUN: u8 = 62;

/// Metadata describing an image, as stored in the header of a QOI stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header {
  /// The image's width.
  pub width: u32,
  /// The image's height.
  pub height: u32,
  /// The number of color channels the image's pixels contain, see
  /// [Channels].
  pub channels: Channels,
  /// The image's colorspace, see [Colorspace].
  pub colorspace: Colorspace,
}

impl Header {
  /// Returns the total number of pixels that make up the image.
  pub fn num_pixels(&self) -> u64 {
    u64::from(self.width) * u64::from(self.height)
  }
}

/// The channel count advertised by the header. This is descriptive only: the
/// codec always works with four channel pixels. Header bytes other than 3 or
/// 4 are preserved as `Other`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channels {
  Rgb,
  Rgba,
  Other(u8),
}

impl From<u8> for Channels {
  fn from(byte: u8) -> Self {
    match byte {
      3 => Channels::Rgb,
      4 => Channels::Rgba,
      other => Channels::Other(other),
    }
  }
}

impl From<Channels> for u8 {
  fn from(channels: Channels) -> Self {
    match channels {
      Channels::Rgb => 3,
      Channels::Rgba => 4,
      Channels::Other(byte) => byte,
    }
  }
}

/// The colorspace advertised by the header. Like [Channels], it does not
/// change how pixels are encoded or decoded. Header bytes other than 0 or 1
/// are preserved as `Other`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Colorspace {
  /// sRGB color channels with a linear alpha channel.
  SrgbLinearAlpha,
  /// All channels linear.
  Linear,
  Other(u8),
}

impl From<u8> for Colorspace {
  fn from(byte: u8) -> Self {
    match byte {
      0 => Colorspace::SrgbLinearAlpha,
      1 => Colorspace::Linear,
      other => Colorspace::Other(other),
    }
  }
}

impl From<Colorspace> for u8 {
  fn from(colorspace: Colorspace) -> Self {
    match colorspace {
      Colorspace::SrgbLinearAlpha => 0,
      Colorspace::Linear => 1,
      Colorspace::Other(byte) => byte,
    }
  }
}

/// A decoded image.
///
/// The codec does not check that `pixels.len()` equals
/// `header.width * header.height`; keeping the two consistent is up to the
/// caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
  /// The image's header.
  pub header: Header,
  /// The image's pixels in row-major order.
  pub pixels: Vec<Pixel>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_channels_byte_conversion() {
    assert_eq!(Channels::from(3), Channels::Rgb);
    assert_eq!(Channels::from(4), Channels::Rgba);
    assert_eq!(Channels::from(9), Channels::Other(9));

    for byte in 0..=u8::MAX {
      assert_eq!(u8::from(Channels::from(byte)), byte);
    }
  }

  #[test]
  fn test_colorspace_byte_conversion() {
    assert_eq!(Colorspace::from(0), Colorspace::SrgbLinearAlpha);
    assert_eq!(Colorspace::from(1), Colorspace::Linear);
    assert_eq!(Colorspace::from(2), Colorspace::Other(2));

    for byte in 0..=u8::MAX {
      assert_eq!(u8::from(Colorspace::from(byte)), byte);
    }
  }

  #[test]
  fn test_num_pixels_does_not_overflow() {
    let header = Header {
      width: u32::MAX,
      height: u32::MAX,
      channels: Channels::Rgba,
      colorspace: Colorspace::SrgbLinearAlpha,
    };

    assert_eq!(header.num_pixels(), u64::from(u32::MAX) * u64::from(u32::MAX));
  }
}
