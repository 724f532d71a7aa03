use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::commands::export::load_deck;
use crate::links::{collect_links, default_label, kind_of};

/// Print every distinct link in the deck with the label it would get.
pub fn run(file: Option<&Path>) -> Result<()> {
    let presentation = load_deck(file)?;
    let links = collect_links(&presentation);
    if links.is_empty() {
        println!("{}", "No links found in the presentation.".yellow());
        return Ok(());
    }

    let width = links.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for literal in &links {
        let label = default_label(literal, kind_of(literal));
        println!("  {literal:<width$}  {}", label.cyan());
    }
    println!();
    println!("{} link(s)", links.len());
    Ok(())
}
