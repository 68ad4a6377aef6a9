use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let content = super::load_content(path)?;

    println!("  All checks passed for '{}'.", content.title);
    println!(
        "  {} levels, {} dialogue nodes, {} questions",
        content.level_count(),
        content.dialogue_count(),
        content.question_count()
    );

    Ok(())
}
