use tracing::{debug, trace};

use crate::chunk::{Chunk, ChunkKind};
use crate::meta::{
  Channels, Colorspace, QOI_BYTES_END, QOI_BYTES_MAGIC, QOI_HEADER_LEN, QOI_MAX_RUN,
};
use crate::pixel::Pixel;
use crate::state::State;

/// Encodes `pixels` into a QOI image of the given dimensions.
///
/// Encoding cannot fail: any pixel sequence, including an empty one, produces
/// a valid stream. The header always advertises four channels with sRGB and
/// linear alpha. `width * height` is expected to equal `pixels.len()` but this
/// is not checked.
///
/// For each pixel the first applicable chunk is chosen, in this order:
///
/// 1. If the pixel's cache slot already holds it: a run if it also equals the
///    previous pixel, otherwise an index.
/// 2. If alpha is unchanged: a diff, a luma, or a full RGB chunk, whichever
///    fits first.
/// 3. Otherwise a full RGBA chunk.
pub fn encode(pixels: &[Pixel], width: u32, height: u32) -> Vec<u8> {
  let mut out = Vec::with_capacity(QOI_HEADER_LEN + pixels.len() + QOI_BYTES_END.len());
  encode_header(&mut out, width, height);

  debug!(width, height, pixels = pixels.len(), "encoding QOI image");

  let mut state = State::new();
  let mut stats = ChunkStats::default();
  let mut position = 0;

  while position < pixels.len() {
    let pixel = pixels[position];
    let (chunk, consumed) = next_chunk(&state, &pixels[position..]);

    trace!(position, ?chunk, "encoded chunk");

    chunk.write_to(&mut out);
    stats.record(chunk.kind());

    // A run repeats the previous pixel, so `push` leaves the state unchanged
    // in that case; it is still applied to keep one update per step.
    state.push(pixel);
    position += consumed;
  }

  out.extend_from_slice(&QOI_BYTES_END);

  debug!(
    bytes = out.len(),
    rgb = stats.rgb,
    rgba = stats.rgba,
    index = stats.index,
    diff = stats.diff,
    luma = stats.luma,
    run = stats.run,
    "encoded QOI image"
  );

  out
}

// Writes the 14 byte header: magic, big-endian width and height, then the
// fixed channel and colorspace values.
fn encode_header(out: &mut Vec<u8>, width: u32, height: u32) {
  out.extend_from_slice(QOI_BYTES_MAGIC);
  out.extend_from_slice(&width.to_be_bytes());
  out.extend_from_slice(&height.to_be_bytes());
  out.push(Channels::Rgba.into());
  out.push(Colorspace::SrgbLinearAlpha.into());
}

// Picks the chunk for the first of `pixels`, returning it along with how many
// pixels it covers.
fn next_chunk(state: &State, pixels: &[Pixel]) -> (Chunk, usize) {
  let pixel = pixels[0];
  let prev = state.prev_pixel;

  if let Some(index) = state.cache.find(pixel) {
    if pixel == prev {
      let run = pixels
        .iter()
        .take(usize::from(QOI_MAX_RUN))
        .take_while(|&&next| next == prev)
        .count();

      return (Chunk::Run(run as u8), run);
    }

    return (Chunk::Index(index), 1);
  }

  if pixel.a == prev.a {
    let chunk = match pixel.diff(&prev) {
      Some(diff) => Chunk::from_diff(diff),
      None => Chunk::Rgb(pixel.r, pixel.g, pixel.b),
    };

    return (chunk, 1);
  }

  (Chunk::Rgba(pixel.r, pixel.g, pixel.b, pixel.a), 1)
}

// Per-kind chunk counts, reported once an encode finishes.
#[derive(Default)]
struct ChunkStats {
  rgb: usize,
  rgba: usize,
  index: usize,
  diff: usize,
  luma: usize,
  run: usize,
}

impl ChunkStats {
  fn record(&mut self, kind: ChunkKind) {
    let count = match kind {
      ChunkKind::Rgb => &mut self.rgb,
      ChunkKind::Rgba => &mut self.rgba,
      ChunkKind::Index => &mut self.index,
      ChunkKind::Diff => &mut self.diff,
      ChunkKind::Luma => &mut self.luma,
      ChunkKind::Run => &mut self.run,
    };

    *count += 1;
  }
}
