use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "jpretty-cli",
    about = "Pretty-print a JSON document, keeping short integer lists on one line",
    version
)]
struct Args {
    /// Spaces per indent level (0 = compact)
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Emit object keys in sorted order instead of document order
    #[arg(long)]
    sort_keys: bool,

    /// Replace non-finite numbers with a placeholder string
    #[arg(long)]
    convert_nans: bool,

    /// Placeholder used when --convert-nans is active
    #[arg(long, default_value = "NaN")]
    nullval: String,

    /// Leave integer lists split across lines
    #[arg(long)]
    no_unsplit: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let value: serde_json::Value = serde_json::from_str(&buf)?;
    let (doc, root) = jpretty::json::from_json(&value);

    let options = jpretty::Options {
        indent: args.indent,
        convert_nans: args.convert_nans,
        nullval: args.nullval,
        unsplit_int_lists: !args.no_unsplit,
        sort_keys: args.sort_keys,
    };

    match &args.output {
        Some(path) => {
            jpretty::render_to_path(path, &doc, root, &options)?;
        }
        None => {
            let text = jpretty::render_to_string(&doc, root, &options)?;
            let mut out = stdout().lock();
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }

    Ok(())
}
