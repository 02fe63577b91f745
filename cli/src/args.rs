use clap::Parser;

#[derive(Parser)]
#[command(name = "codemelli")]
#[command(about = "Validate Iranian national ID codes.")]
pub struct CommandLine {
    /// One or more codes to validate. Persian and Arabic digit glyphs
    /// are accepted and normalized to latin digits.
    // clap exits with status 2 when no code is supplied.
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Enable debug logging of the pipeline stages
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
