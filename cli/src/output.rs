#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Raw UTF-8 bytes, no trailing newline
    Raw,
    /// Upper-case hex bytes separated by spaces
    Hex,
    /// Canonical U+XXXX notation
    Uplus,
    /// JSON report
    Json,
}
