mod args;
mod logging;
mod output;

use std::process::ExitCode;

use args::CommandLine;
use codemelli_core::validate;
use tracing::debug;

fn main() -> ExitCode {
    let cli = CommandLine::parse_args();

    logging::init(cli.verbose);
    debug!(count = cli.codes.len(), "validating arguments");

    let mut all_valid = true;
    for raw in &cli.codes {
        let verdict = validate(Some(raw));
        output::verdict_line(raw, &verdict);
        all_valid &= verdict.is_valid();
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
