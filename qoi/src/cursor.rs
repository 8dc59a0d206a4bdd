use crate::error::Error;

// A sequential, bounds-checked reader over an in-memory byte buffer. Every
// read that would run past the end of the buffer fails with
// `Error::TruncatedStream` instead of panicking.
pub struct Cursor<'a> {
  data: &'a [u8],
  position: usize,
}

impl<'a> Cursor<'a> {
  pub fn new(data: &'a [u8]) -> Self {
    Self { data, position: 0 }
  }

  pub fn position(&self) -> usize {
    self.position
  }

  pub fn remaining(&self) -> usize {
    self.data.len() - self.position
  }

  // Returns the next `count` bytes and advances past them.
  pub fn consume(&mut self, count: usize) -> Result<&'a [u8], Error> {
    let bytes = self.peek(count)?;
    self.position += count;
    Ok(bytes)
  }

  // Returns the next `count` bytes without advancing.
  pub fn peek(&self, count: usize) -> Result<&'a [u8], Error> {
    self
      .position
      .checked_add(count)
      .and_then(|end| self.data.get(self.position..end))
      .ok_or(Error::TruncatedStream {
        offset: self.position,
        needed: count,
        remaining: self.remaining(),
      })
  }

  pub fn consume_u8(&mut self) -> Result<u8, Error> {
    Ok(self.consume(1)?[0])
  }

  pub fn peek_u8(&self) -> Result<u8, Error> {
    Ok(self.peek(1)?[0])
  }

  // Consumes `count` bytes (at most 4) and combines them into a big-endian
  // unsigned integer.
  pub fn consume_be(&mut self, count: usize) -> Result<u32, Error> {
    debug_assert!(count <= 4, "cannot combine {} bytes into a u32", count);
    Ok(combine_be(self.consume(count)?))
  }

  // Peeks `count` bytes (at most 4) and combines them into a big-endian
  // unsigned integer.
  #[allow(dead_code)]
  pub fn peek_be(&self, count: usize) -> Result<u32, Error> {
    debug_assert!(count <= 4, "cannot combine {} bytes into a u32", count);
    Ok(combine_be(self.peek(count)?))
  }
}

fn combine_be(bytes: &[u8]) -> u32 {
  bytes.iter().fold(0, |acc, &byte| (acc << 8) | u32::from(byte))
}
