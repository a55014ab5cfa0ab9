use std::fs;
use std::io::{Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use toon_codec::{DecodeOptions, Delimiter, EncodeOptions, Value};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
}

impl From<DelimArg> for Delimiter {
    fn from(arg: DelimArg) -> Delimiter {
        match arg {
            DelimArg::Comma => Delimiter::Comma,
            DelimArg::Tab => Delimiter::Tab,
            DelimArg::Pipe => Delimiter::Pipe,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "toon", about = "Convert between JSON and TOON", version)]
struct Args {
    /// Input file, or `-` for stdin
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force JSON -> TOON, overriding extension detection
    #[arg(short, long, conflicts_with = "decode")]
    encode: bool,

    /// Force TOON -> JSON, overriding extension detection
    #[arg(short, long)]
    decode: bool,

    /// Array delimiter used when encoding
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Indentation width
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Prefix declared array lengths with `#`
    #[arg(long)]
    length_marker: bool,

    /// Accept count and indentation irregularities when decoding
    #[arg(long)]
    lenient: bool,

    /// Pretty-print JSON output when decoding
    #[arg(long)]
    pretty: bool,
}

enum Mode {
    Encode,
    Decode,
}

/// `.json` encodes and `.toon` decodes; everything else, stdin included,
/// defaults to encoding.
fn detect_mode(args: &Args) -> Mode {
    if args.encode {
        return Mode::Encode;
    }
    if args.decode {
        return Mode::Decode;
    }
    match args.input.extension().and_then(|e| e.to_str()) {
        Some("toon") => Mode::Decode,
        _ => Mode::Encode,
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        stdin().read_to_string(&mut buf).context("reading stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn run(args: &Args) -> Result<String> {
    let input = read_input(&args.input)?;

    match detect_mode(args) {
        Mode::Encode => {
            let value: serde_json::Value =
                serde_json::from_str(&input).context("parsing JSON input")?;
            let options = EncodeOptions::default()
                .with_indent(args.indent)
                .with_delimiter(args.delimiter.into())
                .with_length_marker(args.length_marker);
            Ok(toon_codec::encode(&Value::from(value), &options))
        }
        Mode::Decode => {
            // Empty input is the empty document.
            let value = if input.trim().is_empty() {
                serde_json::Value::Object(serde_json::Map::new())
            } else {
                let options = DecodeOptions::default()
                    .with_indent(args.indent)
                    .with_strict(!args.lenient);
                let decoded = toon_codec::decode(&input, &options)
                    .with_context(|| format!("decoding {}", args.input.display()))?;
                serde_json::Value::from(decoded)
            };
            if args.pretty {
                Ok(serde_json::to_string_pretty(&value)?)
            } else {
                Ok(serde_json::to_string(&value)?)
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = run(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &out).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
