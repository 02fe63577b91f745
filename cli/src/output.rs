use codemelli_core::Verdict;
use colored::*;

/// Prints one result line per validated code.
pub fn verdict_line(raw: &str, verdict: &Verdict) {
    match verdict {
        Verdict::Valid { code } => {
            println!("{}  -> {}  normalized: {}", "VALID".green().bold(), raw, code);
        }
        Verdict::Invalid { reason, normalized } => {
            println!(
                "{} -> {}  reason: {}  normalized: {}",
                "INVALID".red().bold(),
                raw,
                reason.as_str().yellow(),
                normalized.as_deref().unwrap_or("-").dimmed()
            );
        }
    }
}
