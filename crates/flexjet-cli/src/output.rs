//! Output formatting for the CLI.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn status_json(status: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "status": status, "message": message })
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a success message to stdout.
pub fn print_success(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", message),
        OutputFormat::Json => println!("{}", status_json("success", message)),
    }
}

/// Print an error message to stderr.
pub fn print_error(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {}", message),
        OutputFormat::Json => eprintln!("{}", status_json("error", message)),
    }
}

/// Print a progress note. JSON output carries only the final result.
pub fn print_progress(message: &str, format: &OutputFormat) {
    if let Some(line) = progress_line(message, format) {
        println!("{}", line);
    }
}

fn progress_line<'a>(message: &'a str, format: &OutputFormat) -> Option<&'a str> {
    matches!(format, OutputFormat::Text).then_some(message)
}

/// Print an inline prompt. In JSON mode it goes to stderr to keep stdout parseable.
pub fn print_prompt(prompt: &str, format: &OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", prompt);
            std::io::stdout().flush()
        }
        OutputFormat::Json => {
            eprint!("{}", prompt);
            std::io::stderr().flush()
        }
    }
}

/// Print an indented `label: value` row.
pub fn print_row(label: &str, value: &str) {
    println!("  {:<10} {}", format!("{}:", label), value);
}

/// Print a blank line, `text`, and an underline of the same width.
pub fn print_heading(text: &str) {
    println!("\n{}", text);
    println!("{}", "-".repeat(text.chars().count()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_text_only() {
        assert_eq!(
            progress_line("Signing in...", &OutputFormat::Text),
            Some("Signing in...")
        );
        assert_eq!(progress_line("Signing in...", &OutputFormat::Json), None);
    }

    #[test]
    fn status_json_escapes_message() {
        let value = status_json("error", r#"Server said "no""#);
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], r#"Server said "no""#);
        assert!(value.to_string().contains(r#"\"no\""#));
    }
}
