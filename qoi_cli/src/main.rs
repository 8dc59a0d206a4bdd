//! Command line front end for the `qoi` crate.
//!
//! ```sh
//! qoi image.qoi
//! ```
//!
//! Decodes `image.qoi` and writes a text dump of its pixels to `image.txt`.
//!
//! ```sh
//! qoi image.txt
//! ```
//!
//! Reads a text dump (see `dump.rs` for the format) and encodes it to
//! `image.qoi`.
//!
//! Outputs go to the current directory unless `--output` is given. Pass `-v`
//! (repeatable) for more log output on stderr.

mod dump;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level};

use crate::dump::{read_dump, write_dump};

/// Convert between QOI images and a plain text pixel dump.
#[derive(Parser, Debug)]
#[command(name = "qoi", version)]
struct Args {
  /// A `.qoi` image to decode, or a text dump to encode.
  file: PathBuf,

  /// Where to write the result. Defaults to the input's file stem with a
  /// `.txt` or `.qoi` extension, in the current directory.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> ExitCode {
  let args = Args::parse();

  let level = match args.verbose {
    0 => Level::WARN,
    1 => Level::INFO,
    2 => Level::DEBUG,
    _ => Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .init();

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{:#}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args) -> Result<()> {
  let is_qoi = args.file.extension().is_some_and(|ext| ext == "qoi");

  if is_qoi {
    let output = output_path(args, "txt")?;
    decode_to_dump(&args.file, &output)
  } else {
    let output = output_path(args, "qoi")?;
    encode_from_dump(&args.file, &output)
  }
}

fn decode_to_dump(input: &Path, output: &Path) -> Result<()> {
  let bytes = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;

  let image = qoi::decode(&bytes).map_err(|e| match e {
    qoi::Error::InvalidMagic { .. } => anyhow::anyhow!(
      "{} has a .qoi extension, but it is not actually a QOI image",
      input.display()
    ),
    other => anyhow::Error::new(other).context(format!("failed to decode {}", input.display())),
  })?;

  info!(
    width = image.header.width,
    height = image.header.height,
    pixels = image.pixels.len(),
    "decoded {}",
    input.display()
  );

  fs::write(output, write_dump(&image))
    .with_context(|| format!("failed to write {}", output.display()))?;
  info!("wrote {}", output.display());

  Ok(())
}

fn encode_from_dump(input: &Path, output: &Path) -> Result<()> {
  let text =
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
  let (width, height, pixels) =
    read_dump(&text).with_context(|| format!("failed to parse {}", input.display()))?;

  let encoded = qoi::encode(&pixels, width, height);

  info!(
    width,
    height,
    pixels = pixels.len(),
    bytes = encoded.len(),
    "encoded {}",
    input.display()
  );

  fs::write(output, encoded).with_context(|| format!("failed to write {}", output.display()))?;
  info!("wrote {}", output.display());

  Ok(())
}

// Resolves the output path: the `--output` flag if given, otherwise the
// input's file stem with `extension`, relative to the current directory.
fn output_path(args: &Args, extension: &str) -> Result<PathBuf> {
  if let Some(output) = &args.output {
    return Ok(output.clone());
  }

  let stem = args
    .file
    .file_stem()
    .with_context(|| format!("{} has no file name", args.file.display()))?;

  Ok(PathBuf::from(stem).with_extension(extension))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(file: &str, output: Option<&str>) -> Args {
    Args {
      file: PathBuf::from(file),
      output: output.map(PathBuf::from),
      verbose: 0,
    }
  }

  #[test]
  fn test_output_path_defaults_to_stem_in_current_dir() {
    assert_eq!(
      output_path(&args("some/dir/image.qoi", None), "txt").unwrap(),
      PathBuf::from("image.txt")
    );
    assert_eq!(
      output_path(&args("dump.txt", None), "qoi").unwrap(),
      PathBuf::from("dump.qoi")
    );
  }

  #[test]
  fn test_output_path_prefers_flag() {
    assert_eq!(
      output_path(&args("image.qoi", Some("out/pixels.txt")), "txt").unwrap(),
      PathBuf::from("out/pixels.txt")
    );
  }

  #[test]
  fn test_args_parse() {
    let args = Args::try_parse_from(["qoi", "image.qoi", "-o", "out.txt", "-vv"])
      .expect("Failed to parse args");

    assert_eq!(args.file, PathBuf::from("image.qoi"));
    assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    assert_eq!(args.verbose, 2);

    assert!(Args::try_parse_from(["qoi"]).is_err());
  }

  #[test]
  fn test_encode_then_decode_files() {
    let dir = std::env::temp_dir().join(format!("qoi_cli_test_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let dump_in = dir.join("input.txt");
    let encoded = dir.join("input.qoi");
    let dump_out = dir.join("output.txt");
    let text = "2\n1\n10 20 30 255\n10 20 30 255";

    fs::write(&dump_in, text).unwrap();
    encode_from_dump(&dump_in, &encoded).unwrap();
    decode_to_dump(&encoded, &dump_out).unwrap();

    assert_eq!(fs::read_to_string(&dump_out).unwrap(), text);

    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_decoding_non_qoi_file_reports_bad_magic() {
    let dir = std::env::temp_dir().join(format!("qoi_cli_magic_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let input = dir.join("fake.qoi");
    fs::write(&input, b"not a qoi image").unwrap();

    let error =
      decode_to_dump(&input, &dir.join("fake.txt")).expect_err("Expected a bad magic error");
    assert!(error.to_string().contains("not actually a QOI image"));

    fs::remove_dir_all(&dir).unwrap();
  }
}
