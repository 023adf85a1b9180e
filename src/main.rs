//! Binary entry point for the `xh` command-line tool.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use xpress_huffman::cli::args::{Cli, Command};
use xpress_huffman::cli::constants::set_display_level;
use xpress_huffman::{compress, max_compressed_size};

fn main() {
    let cli = Cli::parse();
    set_display_level(cli.display_level());

    if let Err(err) = run(cli) {
        eprintln!("xh: error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compress { input, output } => run_compress(input, output),
        Command::Bound { len } => {
            println!("{}", max_compressed_size(len));
            Ok(())
        }
    }
}

fn run_compress(input: Option<std::path::PathBuf>, output: Option<std::path::PathBuf>) -> Result<()> {
    let data = read_input(input)?;

    xpress_huffman::displaylevel!(3, "compressing {} bytes", data.len());

    let mut out = vec![0u8; max_compressed_size(data.len())];
    let written = compress(&data, &mut out)
        .map_err(|e| anyhow::anyhow!(e))
        .context("compression failed")?;
    out.truncate(written);

    xpress_huffman::displaylevel!(3, "wrote {} bytes", out.len());

    write_output(output, &out)
}

fn read_input(path: Option<std::path::PathBuf>) -> Result<Vec<u8>> {
    match path {
        None => read_stdin(),
        Some(p) if p.as_os_str() == "-" => read_stdin(),
        Some(p) => fs::read(&p).with_context(|| format!("reading {}", p.display())),
    }
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf).context("reading stdin")?;
    Ok(buf)
}

fn write_output(path: Option<std::path::PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        None => {
            io::stdout().write_all(data).context("writing stdout")?;
            Ok(())
        }
        Some(p) if p.as_os_str() == "-" => {
            io::stdout().write_all(data).context("writing stdout")?;
            Ok(())
        }
        Some(p) => fs::write(&p, data).with_context(|| format!("writing {}", p.display())),
    }
}

