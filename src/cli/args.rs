//! Argument parsing for the `xh` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Xpress-Huffman (MS-XCA) compressor.
#[derive(Debug, Parser)]
#[command(name = "xh", version, about = "Xpress-Huffman (MS-XCA) compressor")]
pub struct Cli {
    /// Raise output verbosity (repeatable: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress a file (or stdin) to a file (or stdout).
    Compress {
        /// Input file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,

        /// Output file; writes stdout when omitted or `-`.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the worst-case compressed size for a given input length.
    Bound {
        /// Input length in bytes.
        len: usize,
    },
}

impl Cli {
    /// Resolves `verbose`/`quiet` into the display level consumed by
    /// [`crate::cli::constants::set_display_level`].
    pub fn display_level(&self) -> u32 {
        if self.quiet {
            0
        } else {
            2 + self.verbose as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compress_with_output_flag() {
        let cli = Cli::parse_from(["xh", "compress", "in.bin", "-o", "out.xh"]);
        match cli.command {
            Command::Compress { input, output } => {
                assert_eq!(input, Some(PathBuf::from("in.bin")));
                assert_eq!(output, Some(PathBuf::from("out.xh")));
            }
            _ => panic!("expected Compress"),
        }
    }

    #[test]
    fn parses_bound() {
        let cli = Cli::parse_from(["xh", "bound", "65536"]);
        match cli.command {
            Command::Bound { len } => assert_eq!(len, 65536),
            _ => panic!("expected Bound"),
        }
    }

    #[test]
    fn quiet_overrides_verbosity() {
        let cli = Cli::parse_from(["xh", "-q", "-v", "bound", "1"]);
        assert_eq!(cli.display_level(), 0);
    }
}
