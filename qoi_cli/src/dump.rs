//! A plain text rendition of an image, used to inspect decoded images and to
//! author encoder inputs by hand.
//!
//! ```text
//! <width>
//! <height>
//! <r> <g> <b> <a>
//! ...
//! ```
//!
//! One decimal `r g b a` line per pixel, with no newline after the last one.

use std::fmt::Write;

use anyhow::{bail, ensure, Context, Result};
use qoi::{Image, Pixel};

/// Renders `image` in the dump format.
pub fn write_dump(image: &Image) -> String {
  let mut dump = format!("{}\n{}", image.header.width, image.header.height);

  for pixel in &image.pixels {
    // Writing into a `String` cannot fail.
    let _ = write!(dump, "\n{} {} {} {}", pixel.r, pixel.g, pixel.b, pixel.a);
  }

  dump
}

/// Parses a dump back into its width, height, and pixels. Blank lines are
/// skipped.
pub fn read_dump(text: &str) -> Result<(u32, u32, Vec<Pixel>)> {
  let mut lines = text
    .lines()
    .enumerate()
    .map(|(index, line)| (index + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty());

  let width = parse_dimension(lines.next(), "width")?;
  let height = parse_dimension(lines.next(), "height")?;

  let pixels = lines
    .map(|(number, line)| {
      parse_pixel(line).with_context(|| format!("invalid pixel on line {}", number))
    })
    .collect::<Result<Vec<_>>>()?;

  Ok((width, height, pixels))
}

fn parse_dimension(line: Option<(usize, &str)>, name: &str) -> Result<u32> {
  let Some((number, line)) = line else {
    bail!("missing {} line", name);
  };

  line
    .parse()
    .with_context(|| format!("invalid {} `{}` on line {}", name, line, number))
}

fn parse_pixel(line: &str) -> Result<Pixel> {
  let channels = line
    .split_whitespace()
    .map(|value| {
      value
        .parse::<u8>()
        .with_context(|| format!("`{}` is not a channel value", value))
    })
    .collect::<Result<Vec<_>>>()?;

  ensure!(channels.len() == 4, "expected 4 channel values, found {}", channels.len());

  Ok(Pixel::new(channels[0], channels[1], channels[2], channels[3]))
}
