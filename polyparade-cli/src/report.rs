use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use polyparade_core::Transcript;

pub fn generate_console_report(writer: &mut dyn Write, transcript: &Transcript) -> Result<()> {
    for (position, section) in transcript.sections.iter().enumerate() {
        if position > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", section.title.bright_cyan().bold())?;
        for line in &section.lines {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}

pub fn generate_json_report(writer: &mut dyn Write, transcript: &Transcript) -> Result<()> {
    let json = serde_json::to_string_pretty(transcript)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
