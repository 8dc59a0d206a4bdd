use tracing::{debug, trace};

use crate::chunk::Chunk;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::meta::{Header, Image, QOI_BYTES_END, QOI_BYTES_MAGIC};
use crate::state::State;

/// Decodes a QOI encoded image held entirely in memory.
///
/// Chunks are decoded until the 8 byte end marker is reached; the header's
/// width and height are reported as-is and are not checked against the
/// number of pixels decoded.
///
/// # Errors
///
/// Returns [Error::InvalidMagic] if `bytes` does not start with `qoif`, and
/// [Error::TruncatedStream] if the header, a chunk, or the end marker is cut
/// short. No partial image is returned on failure.
pub fn decode(bytes: &[u8]) -> Result<Image, Error> {
  let mut cursor = Cursor::new(bytes);
  let header = decode_header(&mut cursor)?;

  debug!(
    width = header.width,
    height = header.height,
    channels = u8::from(header.channels),
    colorspace = u8::from(header.colorspace),
    "decoded QOI header"
  );

  let mut state = State::new();
  let mut pixels = Vec::new();
  let mut chunks = 0usize;

  while cursor.peek(QOI_BYTES_END.len())? != QOI_BYTES_END {
    let offset = cursor.position();
    let chunk = Chunk::read(&mut cursor)?;
    chunks += 1;

    trace!(offset, ?chunk, "decoded chunk");

    match chunk {
      Chunk::Run(run) => {
        pixels.extend(std::iter::repeat(state.prev_pixel).take(usize::from(run)));
      }
      _ => {
        let pixel = chunk.apply(&state.prev_pixel, |index| state.cache.get(index));
        pixels.push(pixel);
        state.push(pixel);
      }
    }
  }

  debug!(chunks, pixels = pixels.len(), "decoded QOI image");

  Ok(Image { header, pixels })
}

// Checks the magic bytes and parses the remainder of the header.
fn decode_header(cursor: &mut Cursor<'_>) -> Result<Header, Error> {
  let magic = cursor.consume(QOI_BYTES_MAGIC.len())?;

  if magic != QOI_BYTES_MAGIC {
    let mut found = [0; 4];
    found.copy_from_slice(magic);
    return Err(Error::InvalidMagic { found });
  }

  Ok(Header {
    width: cursor.consume_be(4)?,
    height: cursor.consume_be(4)?,
    channels: cursor.consume_u8()?.into(),
    colorspace: cursor.consume_u8()?.into(),
  })
}
