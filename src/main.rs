use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use rand_cli::{render, terminator, ByteSource, Format};

/// Print random bytes from a secure source to stdout.
#[derive(Parser)]
#[command(name = "rand", version, about)]
struct Cli {
    /// number of random bytes to generate
    #[arg(value_name = "LENGTH_BYTES", required_unless_present = "uuid")]
    length: Option<u32>,

    /// use an insecure random source with seed integer
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// print random bytes encoded as base64
    #[arg(short = 'a', long)]
    base64: bool,

    /// print random bytes directly without formatting
    #[arg(short, long)]
    binary: bool,

    /// print a suitable password
    #[arg(short, long)]
    password: bool,

    /// omit the listed characters from generated passwords
    #[arg(short, long, default_value = "")]
    omit: String,

    /// do not print the trailing newline character
    #[arg(short = 'n', long)]
    omit_newline: bool,

    /// print a random version-4 UUID
    #[arg(short, long)]
    uuid: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
        .expect("cannot init logger");

    let cli = Cli::parse();

    let format = Format::select(cli.base64, cli.binary, cli.password, cli.uuid)?;
    let mut source = match cli.seed {
        Some(seed) => ByteSource::seeded(seed),
        None => ByteSource::secure(),
    };
    debug!("emitting with {} source", source.label());

    let length = cli.length.unwrap_or(0) as usize;
    let mut out = render(format, length, &cli.omit, &mut source)?;
    out.extend_from_slice(terminator(format, cli.omit_newline));

    std::io::stdout()
        .lock()
        .write_all(&out)
        .context("failed to write to stdout")?;

    Ok(())
}
