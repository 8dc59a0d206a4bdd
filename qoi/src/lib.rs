//! This crate implements an encoder and decoder for the
//! [QOI image format](https://qoiformat.org), a lossless format that stores an
//! image as a stream of small variable width chunks.
//!
//! The two primary exports are the [decode] and [encode] functions. Both work
//! on in-memory buffers: [decode] takes the complete encoded stream and
//! returns an [Image], and [encode] takes a slice of [Pixel] values plus the
//! image's dimensions and returns the encoded bytes.
//!
//! Pixels are always handled as four channel RGBA values. The channel count
//! and colorspace stored in a header are descriptive only and are reported
//! back as-is.
//!
//! Neither function checks that the number of pixels matches
//! `width * height`; that is left to the caller.
//!
//! # Encode example
//!
//! ```rust
//! use qoi::{encode, Pixel};
//!
//! // A 1x1 image made up of a single pixel.
//! let pixels = [Pixel::new(10, 20, 30, 255)];
//! let encoded = encode(&pixels, 1, 1);
//!
//! assert_eq!(&encoded[..4], b"qoif");
//! // Header (14 bytes) + one RGB chunk (4 bytes) + end marker (8 bytes).
//! assert_eq!(encoded.len(), 26);
//! ```
//!
//! # Decode example
//!
//! ```rust
//! use qoi::{decode, encode, Channels, Error, Pixel};
//!
//! let pixels = vec![Pixel::new(1, 2, 3, 4); 16];
//! let image = decode(&encode(&pixels, 4, 4))?;
//!
//! assert_eq!(image.header.width, 4);
//! assert_eq!(image.header.channels, Channels::Rgba);
//! assert_eq!(image.pixels, pixels);
//!
//! // Streams that don't start with `qoif` are rejected.
//! assert!(matches!(decode(b"nope"), Err(Error::InvalidMagic { .. })));
//! # Ok::<(), Error>(())
//! ```
//!

pub use crate::decode::decode;
pub use crate::encode::encode;
pub use crate::error::Error;
pub use crate::meta::{
  Channels, Colorspace, Header, Image, QOI_BYTES_END, QOI_BYTES_MAGIC, QOI_HEADER_LEN, QOI_MAX_RUN,
};
pub use crate::pixel::Pixel;

mod cache;
mod chunk;
mod cursor;
mod decode;
mod encode;
mod error;
mod meta;
mod pixel;
mod state;
