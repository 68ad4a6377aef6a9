use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let content = super::load_content(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Id", "Title", "Dialogue", "Ends with", "Achievement"]);

    for (i, level) in content.levels.iter().enumerate() {
        let ending = if level.scenario_test && !content.scenario_test.is_empty() {
            format!("scenario test ({})", content.scenario_test.len())
        } else if level.has_quiz() {
            format!("quiz ({})", level.quiz.len())
        } else {
            "—".to_string()
        };
        let title = if level.subtitle.is_empty() {
            level.title.clone()
        } else {
            format!("{}: {}", level.title, level.subtitle)
        };

        table.add_row(vec![
            (i + 1).to_string(),
            level.id.to_string(),
            title,
            level.dialogues.len().to_string(),
            ending,
            level.achievement.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} levels, post-test with {} questions",
        content.level_count(),
        content.post_test.len()
    );

    Ok(())
}
