use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::deck::{Presentation, default_presentation};
use crate::document;

/// Load `file` (validated the same way as an import) or fall back to the built-in deck.
pub fn load_deck(file: Option<&Path>) -> Result<Presentation> {
    match file {
        Some(path) => document::read(path),
        None => Ok(default_presentation()),
    }
}

/// Run the export command.
pub fn run(file: Option<&Path>, output_dir: &Path, quiet: bool) -> Result<()> {
    let presentation = load_deck(file)?;
    let path = document::export_to_dir(&presentation, output_dir)?;
    if !quiet {
        println!(
            "{} {} slide(s) to {}",
            "Exported".green().bold(),
            presentation.slides.len(),
            path.display()
        );
    }
    Ok(())
}
