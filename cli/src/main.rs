use std::process::ExitCode;

use clap::Parser;

mod encode;
mod error;
mod output;
mod utils;

const AFTER_HELP: &str = "\
CODEPOINT FORMAT:
    U+XXXX, u+XXXX   hexadecimal
    0xXXXX, 0XXXXX   hexadecimal
    XXXX             hexadecimal when 4 to 6 hex digits long, or when it
                     contains a letter A-F
    NNN              decimal otherwise

    Valid Unicode scalar values are U+0000 to U+10FFFF, excluding
    U+D800 to U+DFFF.

EXAMPLES:
    uniprint 0041
    uniprint U+0041
    uniprint 1F512
    uniprint -o json U+1F512

POSIX SH USAGE:
    sym=$(uniprint 0041)
    printf '%s\\n' \"$sym\"

EXIT STATUS:
    0   success
    1   invalid code point or write error
    2   usage error";

#[derive(Parser)]
#[command(name = "uniprint", version)]
#[command(about = "Print a Unicode code point as UTF-8")]
#[command(
    long_about = "Converts a Unicode code point into its UTF-8 byte sequence and writes it \
                  to standard output. The raw output contains no trailing newline."
)]
#[command(after_long_help = AFTER_HELP)]
struct Cli {
    #[command(flatten)]
    config: encode::Config,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match encode::execute(cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("uniprint: {e}");
            ExitCode::FAILURE
        }
    }
}
