use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

/// Interactive collection of fields not supplied on the command line.
///
/// Every helper blocks on the operator's terminal; an interrupt during a
/// prompt surfaces as an error and aborts the whole invocation.

/// Ask for a field that must not be empty. The validator re-prompts on
/// empty input rather than failing the invocation.
pub fn required_text(message: &str, empty_message: &str) -> Result<String> {
    let empty_message = empty_message.to_string();
    Text::new(message)
        .with_validator(move |input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid(empty_message.clone().into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()
        .context("Failed to read input")
}

/// Ask for an optional field, falling back to `fallback` on blank input.
pub fn text_with_fallback(message: &str, fallback: &str) -> Result<String> {
    let answer = Text::new(message)
        .with_default(fallback)
        .prompt()
        .context("Failed to read input")?;

    let answer = answer.trim().to_string();
    if answer.is_empty() {
        Ok(fallback.to_string())
    } else {
        Ok(answer)
    }
}

/// Binary confirmation before a destructive action. The default answer is
/// chosen per call site; destructive resets default to `false`.
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    Confirm::new(message)
        .with_default(default)
        .prompt()
        .context("Failed to read confirmation")
}

const PUSH_YES: &str = "✅ Yes (default)";
const PUSH_NO: &str = "❌ No, I will push manually";

/// Yes/no selection for the automatic push after a merge, defaulting to yes.
pub fn confirm_push() -> Result<bool> {
    let choice = Select::new(
        "Do you want to force push automatically?",
        vec![PUSH_YES, PUSH_NO],
    )
    .with_starting_cursor(0)
    .prompt()
    .context("Failed to read confirmation")?;

    Ok(choice == PUSH_YES)
}
