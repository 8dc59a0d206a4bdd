/// A single RGBA pixel. Images are always processed as four channel pixels
/// internally, regardless of the channel count advertised in the header.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Pixel {
  /// Red channel value.
  pub r: u8,
  /// Green channel value.
  pub g: u8,
  /// Blue channel value.
  pub b: u8,
  /// Alpha channel value.
  pub a: u8,
}

// The small signed difference between two pixels of equal alpha, in the
// narrowest form that can represent it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PixelDiff {
  // Every channel delta is in `-2..=1`.
  Small { dr: i8, dg: i8, db: i8 },
  // The green delta is in `-32..=31`, and the red and blue deltas are each
  // within `-8..=7` of it.
  Luma { dg: i8, dr_dg: i8, db_dg: i8 },
}

impl Pixel {
  /// Opaque black, the value of the "previous pixel" before the first chunk.
  pub const OPAQUE_BLACK: Pixel = Pixel { r: 0, g: 0, b: 0, a: 255 };

  /// Creates a pixel from its four channel values.
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Creates a pixel from an `[r, g, b, a]` array.
  pub const fn from_rgba(rgba: [u8; 4]) -> Self {
    Self { r: rgba[0], g: rgba[1], b: rgba[2], a: rgba[3] }
  }

  /// Returns the pixel as an `[r, g, b, a]` array.
  pub const fn to_rgba(self) -> [u8; 4] {
    [self.r, self.g, self.b, self.a]
  }

  /// The pixel cache slot for this pixel:
  /// `(r * 3 + g * 5 + b * 7 + a * 11) % 64`, computed in 8-bit wrapping
  /// arithmetic.
  pub fn cache_index(&self) -> u8 {
    let sum = self
      .r
      .wrapping_mul(3)
      .wrapping_add(self.g.wrapping_mul(5))
      .wrapping_add(self.b.wrapping_mul(7))
      .wrapping_add(self.a.wrapping_mul(11));

    sum % 64
  }

  // Attempts to describe `self` as a small change from `prev`. Channel deltas
  // wrap around at the 0/255 boundary. Returns `None` when alpha differs or
  // when the deltas are too large for either diff form.
  pub fn diff(&self, prev: &Pixel) -> Option<PixelDiff> {
    if self.a != prev.a {
      return None;
    }

    let dr = self.r.wrapping_sub(prev.r) as i8;
    let dg = self.g.wrapping_sub(prev.g) as i8;
    let db = self.b.wrapping_sub(prev.b) as i8;

    let small = -2..=1;

    if small.contains(&dr) && small.contains(&dg) && small.contains(&db) {
      return Some(PixelDiff::Small { dr, dg, db });
    }

    if !(-32..=31).contains(&dg) {
      return None;
    }

    let dr_dg = i16::from(dr) - i16::from(dg);
    let db_dg = i16::from(db) - i16::from(dg);
    let luma = -8..=7;

    if luma.contains(&dr_dg) && luma.contains(&db_dg) {
      return Some(PixelDiff::Luma { dg, dr_dg: dr_dg as i8, db_dg: db_dg as i8 });
    }

    None
  }

  // Recreates a pixel by applying `diff` to `prev` with 8-bit wrapping
  // arithmetic. Alpha is carried over from `prev`.
  pub fn from_diff(diff: PixelDiff, prev: &Pixel) -> Self {
    let (dr, dg, db) = match diff {
      PixelDiff::Small { dr, dg, db } => (dr, dg, db),
      PixelDiff::Luma { dg, dr_dg, db_dg } => {
        (dg.wrapping_add(dr_dg), dg, dg.wrapping_add(db_dg))
      }
    };

    Self {
      r: prev.r.wrapping_add(dr as u8),
      g: prev.g.wrapping_add(dg as u8),
      b: prev.b.wrapping_add(db as u8),
      a: prev.a,
    }
  }
}

impl From<[u8; 4]> for Pixel {
  fn from(rgba: [u8; 4]) -> Self {
    Pixel::from_rgba(rgba)
  }
}

impl From<Pixel> for [u8; 4] {
  fn from(pixel: Pixel) -> Self {
    pixel.to_rgba()
  }
}
