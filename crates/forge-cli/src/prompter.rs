//! CLI implementation of ConfirmPrompt for oversize replacements

use std::io::{self, BufRead, Write};

use forge_core::{ConfirmPrompt, OversizeWarning};
use owo_colors::OwoColorize;

/// Asks on stdin unless `assume_yes` is set
pub struct CliPrompter {
    pub assume_yes: bool,
}

impl ConfirmPrompt for CliPrompter {
    fn confirm_oversize(&self, warning: &OversizeWarning) -> bool {
        eprintln!(
            "{} new content for {} is {} bytes but its slot at 0x{:X} holds {} bytes.",
            "Warning:".yellow().bold(),
            warning.display_name,
            warning.provided,
            warning.offset,
            warning.slot
        );
        eprintln!(
            "Only the first {} bytes will be written; the last {} are dropped and the sub-file may be corrupted.",
            warning.slot,
            warning.excess()
        );

        if self.assume_yes {
            eprintln!("Proceeding (--yes)");
            return true;
        }

        eprint!("Continue? [y/N] ");
        io::stderr().flush().ok();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        is_affirmative(&line)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_assume_yes_skips_stdin() {
        let prompter = CliPrompter { assume_yes: true };
        let warning = OversizeWarning {
            display_name: "File_0.json".to_string(),
            offset: 0x10,
            slot: 10,
            provided: 12,
        };
        assert!(prompter.confirm_oversize(&warning));
    }
}
