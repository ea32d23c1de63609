use std::io::{self, Write};

use clap::Args;
use log::debug;
use notation::Notation;
use serde::Serialize;
use uniprint::decoder::Decoder;
use uniprint::encoder::Encoder;
use utf8::Sequence;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::format_hex_bytes;

#[derive(Args)]
pub(crate) struct Config {
    /// Code point to print: U+XXXX, 0xXXXX, bare hex or decimal
    #[arg(value_name = "CODEPOINT")]
    codepoint: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "raw")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct Report {
    codepoint: String,
    value: u32,
    form: String,
    utf8: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let notation: Notation = config
        .codepoint
        .decode()
        .map_err(|source| Error::InvalidCodepoint {
            input: config.codepoint.clone(),
            source,
        })?;
    let scalar = notation.scalar();
    let seq: Sequence = scalar.encode()?;
    debug!("{scalar} encodes to {}", format_hex_bytes(&seq));

    let mut stdout = io::stdout().lock();
    match config.output {
        OutputFormat::Raw => {
            // no trailing newline so `$(uniprint 0041)` is exactly the character
            stdout.write_all(&seq)?;
        }
        OutputFormat::Hex => {
            writeln!(stdout, "{}", format_hex_bytes(&seq))?;
        }
        OutputFormat::Uplus => {
            writeln!(stdout, "{scalar}")?;
        }
        OutputFormat::Json => {
            let report = Report {
                codepoint: scalar.to_string(),
                value: scalar.value(),
                form: notation.form().to_string(),
                utf8: format_hex_bytes(&seq),
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
