use crate::pixel::Pixel;

pub const CACHE_LEN: usize = 64;

// The 64 slot table of previously seen pixels. Slots are addressed by
// `Pixel::cache_index` and the most recent write to a slot wins.
pub struct PixelCache {
  slots: [Pixel; CACHE_LEN],
}

impl PixelCache {
  // A cache with every slot holding the all-zero pixel.
  pub fn new() -> Self {
    Self { slots: [Pixel::default(); CACHE_LEN] }
  }

  // Returns the pixel stored at `index`. Only the low 6 bits of `index` are
  // used.
  pub fn get(&self, index: u8) -> Pixel {
    self.slots[usize::from(index) % CACHE_LEN]
  }

  // Returns the slot index of `pixel` if that slot currently holds exactly
  // `pixel`.
  pub fn find(&self, pixel: Pixel) -> Option<u8> {
    let index = pixel.cache_index();
    (self.get(index) == pixel).then_some(index)
  }

  // Writes `pixel` to its slot, overwriting whatever was there.
  pub fn insert(&mut self, pixel: Pixel) {
    self.slots[usize::from(pixel.cache_index())] = pixel;
  }
}
