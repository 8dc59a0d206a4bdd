use crate::cursor::Cursor;
use crate::error::Error;
use crate::pixel::{Pixel, PixelDiff};

// The six chunk kinds, as classified from a chunk's first byte. Every byte
// value maps to exactly one kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChunkKind {
  Rgb,
  Rgba,
  Index,
  Diff,
  Luma,
  Run,
}

impl ChunkKind {
  const MASK_TAG: u8 = 0xc0;

  const TAG_INDEX: u8 = 0x00;
  const TAG_DIFF: u8 = 0x40;
  const TAG_LUMA: u8 = 0x80;
  const TAG_RUN: u8 = 0xc0;
  const TAG_RGB: u8 = 0xfe;
  const TAG_RGBA: u8 = 0xff;

  // Classifies a chunk by its first byte. The two full-byte tags are checked
  // before the 2-bit tags because both also start with `11`.
  pub fn classify(tag: u8) -> Self {
    match tag {
      Self::TAG_RGB => ChunkKind::Rgb,
      Self::TAG_RGBA => ChunkKind::Rgba,
      _ => match tag & Self::MASK_TAG {
        Self::TAG_INDEX => ChunkKind::Index,
        Self::TAG_DIFF => ChunkKind::Diff,
        Self::TAG_LUMA => ChunkKind::Luma,
        _ => ChunkKind::Run,
      },
    }
  }

  // Total encoded length of a chunk of this kind, tag byte included.
  pub fn encoded_len(self) -> usize {
    match self {
      ChunkKind::Rgb => 4,
      ChunkKind::Rgba => 5,
      ChunkKind::Luma => 2,
      ChunkKind::Index | ChunkKind::Diff | ChunkKind::Run => 1,
    }
  }
}

// A decoded chunk. Deltas are held as signed values; the biases only exist in
// the encoded form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Chunk {
  // `QOI_OP_RGB`, the red, green, and blue values of a pixel. Alpha is
  // carried over from the previous pixel.
  //
  // | 7  6  5  4  3  2  1  0 | 7..0 | 7..0 | 7..0 |
  // |------------------------|------|------|------|
  // | 1  1  1  1  1  1  1  0 |   r  |   g  |   b  |
  //
  Rgb(u8, u8, u8),

  // `QOI_OP_RGBA`, the red, green, blue, and alpha values of a pixel.
  //
  // | 7  6  5  4  3  2  1  0 | 7..0 | 7..0 | 7..0 | 7..0 |
  // |------------------------|------|------|------|------|
  // | 1  1  1  1  1  1  1  1 |   r  |   g  |   b  |   a  |
  //
  Rgba(u8, u8, u8, u8),

  // `QOI_OP_INDEX`, a slot in the pixel cache.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 0 0 |      index       |
  //
  Index(u8),

  // `QOI_OP_DIFF`, the red, green, and blue difference from the previous
  // pixel, each in `-2..=1` and stored with a bias of +2.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 0 1 |  dr |  dg |  db  |
  //
  Diff { dr: i8, dg: i8, db: i8 },

  // `QOI_OP_LUMA`, the green difference from the previous pixel (bias +32)
  // and the red and blue differences relative to it (bias +8).
  //
  // | 7 6   5  4  3  2  1  0 | 7  6  5  4   3  2  1  0 |
  // |------------------------|-------------------------|
  // | 1 0 |       dg         |   dr - dg  |   db - dg  |
  //
  Luma { dg: i8, dr_dg: i8, db_dg: i8 },

  // `QOI_OP_RUN`, the previous pixel repeated `1..=62` times, stored with a
  // bias of -1.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 1 1 |      run         |
  //
  Run(u8),
}

impl Chunk {
  const MASK_2: u8 = 0x03;
  const MASK_4: u8 = 0x0f;
  const MASK_6: u8 = 0x3f;

  const BIAS_DIFF: i8 = 2;
  const BIAS_LUMA_G: i8 = 32;
  const BIAS_LUMA_RB: i8 = 8;

  // Creates the chunk that encodes `diff`.
  pub fn from_diff(diff: PixelDiff) -> Self {
    match diff {
      PixelDiff::Small { dr, dg, db } => Chunk::Diff { dr, dg, db },
      PixelDiff::Luma { dg, dr_dg, db_dg } => Chunk::Luma { dg, dr_dg, db_dg },
    }
  }

  pub fn kind(&self) -> ChunkKind {
    match self {
      Chunk::Rgb(..) => ChunkKind::Rgb,
      Chunk::Rgba(..) => ChunkKind::Rgba,
      Chunk::Index(_) => ChunkKind::Index,
      Chunk::Diff { .. } => ChunkKind::Diff,
      Chunk::Luma { .. } => ChunkKind::Luma,
      Chunk::Run(_) => ChunkKind::Run,
    }
  }

  // Encodes the chunk and appends its bytes to `out`.
  pub fn write_to(self, out: &mut Vec<u8>) {
    match self {
      Chunk::Rgb(r, g, b) => {
        out.extend_from_slice(&[ChunkKind::TAG_RGB, r, g, b]);
      }
      Chunk::Rgba(r, g, b, a) => {
        out.extend_from_slice(&[ChunkKind::TAG_RGBA, r, g, b, a]);
      }
      Chunk::Index(index) => {
        out.push(ChunkKind::TAG_INDEX | (index & Self::MASK_6));
      }
      Chunk::Diff { dr, dg, db } => {
        let bias = |delta: i8| (delta + Self::BIAS_DIFF) as u8 & Self::MASK_2;
        out.push(ChunkKind::TAG_DIFF | bias(dr) << 4 | bias(dg) << 2 | bias(db));
      }
      Chunk::Luma { dg, dr_dg, db_dg } => {
        let bias = |delta: i8| (delta + Self::BIAS_LUMA_RB) as u8 & Self::MASK_4;
        out.extend_from_slice(&[
          ChunkKind::TAG_LUMA | ((dg + Self::BIAS_LUMA_G) as u8 & Self::MASK_6),
          bias(dr_dg) << 4 | bias(db_dg),
        ]);
      }
      Chunk::Run(run) => {
        debug_assert!((1..=62).contains(&run), "run length {} out of range", run);
        out.push(ChunkKind::TAG_RUN | ((run - 1) & Self::MASK_6));
      }
    }
  }

  // Decodes the next chunk from `cursor`, consuming exactly its bytes. A
  // chunk cut off by the end of the stream fails without consuming anything.
  pub fn read(cursor: &mut Cursor<'_>) -> Result<Self, Error> {
    let kind = ChunkKind::classify(cursor.peek_u8()?);
    let bytes = cursor.consume(kind.encoded_len())?;
    let tag = bytes[0];

    let chunk = match kind {
      ChunkKind::Rgb => Chunk::Rgb(bytes[1], bytes[2], bytes[3]),
      ChunkKind::Rgba => Chunk::Rgba(bytes[1], bytes[2], bytes[3], bytes[4]),
      ChunkKind::Index => Chunk::Index(tag & Self::MASK_6),
      ChunkKind::Diff => {
        let unbias = |field: u8| (field & Self::MASK_2) as i8 - Self::BIAS_DIFF;
        Chunk::Diff {
          dr: unbias(tag >> 4),
          dg: unbias(tag >> 2),
          db: unbias(tag),
        }
      }
      ChunkKind::Luma => {
        let unbias = |field: u8| (field & Self::MASK_4) as i8 - Self::BIAS_LUMA_RB;
        Chunk::Luma {
          dg: (tag & Self::MASK_6) as i8 - Self::BIAS_LUMA_G,
          dr_dg: unbias(bytes[1] >> 4),
          db_dg: unbias(bytes[1]),
        }
      }
      ChunkKind::Run => Chunk::Run((tag & Self::MASK_6) + 1),
    };

    Ok(chunk)
  }

  // Applies a non-run chunk to the previous pixel, producing the pixel it
  // encodes. Index chunks look their pixel up in `cache_pixel`, which the
  // caller resolves.
  pub fn apply(self, prev: &Pixel, cache_pixel: impl FnOnce(u8) -> Pixel) -> Pixel {
    match self {
      Chunk::Rgb(r, g, b) => Pixel { r, g, b, a: prev.a },
      Chunk::Rgba(r, g, b, a) => Pixel { r, g, b, a },
      Chunk::Index(index) => cache_pixel(index),
      Chunk::Diff { dr, dg, db } => Pixel::from_diff(PixelDiff::Small { dr, dg, db }, prev),
      Chunk::Luma { dg, dr_dg, db_dg } => {
        Pixel::from_diff(PixelDiff::Luma { dg, dr_dg, db_dg }, prev)
      }
      Chunk::Run(_) => *prev,
    }
  }
}
