use crate::cache::PixelCache;
use crate::pixel::Pixel;

// The running state both the encoder and decoder maintain in lockstep. A
// fresh `State` is created for every encode or decode call.
pub struct State {
  // A cache of previously seen pixels, indexed by `Pixel::cache_index`.
  pub cache: PixelCache,
  // The previously decoded/encoded pixel.
  pub prev_pixel: Pixel,
}

impl State {
  pub fn new() -> Self {
    Self {
      cache: PixelCache::new(),
      prev_pixel: Pixel::OPAQUE_BLACK,
    }
  }

  // Records `pixel` as produced by a non-run chunk: it becomes the previous
  // pixel and is written to its cache slot.
  pub fn push(&mut self, pixel: Pixel) {
    self.prev_pixel = pixel;
    self.cache.insert(pixel);
  }
}
