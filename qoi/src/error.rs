use thiserror::Error;

/// An enumeration of all error values this crate may produce. Encoding never
/// fails, so every variant describes a problem with a stream being decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  /// The first four bytes of the stream are not the ASCII sequence `qoif`.
  #[error("invalid magic bytes {found:?}, expected `qoif`")]
  InvalidMagic {
    /// The four bytes found where the magic was expected.
    found: [u8; 4],
  },
  /// A read would run past the end of the stream. Reported for a missing
  /// header, a chunk cut off part way through, or a missing end marker.
  #[error(
    "truncated stream: needed {needed} bytes at offset {offset}, but only {remaining} remain"
  )]
  TruncatedStream {
    /// Offset of the attempted read.
    offset: usize,
    /// Number of bytes the read asked for.
    needed: usize,
    /// Number of bytes left in the stream at `offset`.
    remaining: usize,
  },
}
