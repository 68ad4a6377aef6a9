use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use gd_core::Phase;
use gd_engine::{Command, EngineConfig, Event, Game, HELP, LevelStatus, Outcome, parse_command};

pub fn run(path: &Path, coins: u32, clear_counters: bool) -> Result<(), String> {
    let content = super::load_content(path)?;
    let config = EngineConfig::default()
        .with_starting_coins(coins)
        .with_keep_counters_on_reset(!clear_counters);

    let mut game = Game::new(content, config).map_err(|e| format!("failed to start game: {e}"))?;

    println!("  {} {}", "Golden Detector:".bold(), game.content().title);
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    render(&game);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };

        match command {
            Command::Event(event) => match game.dispatch(event) {
                Outcome::Applied => render_after(&game, event),
                Outcome::Ignored(reason) => println!("{}\n", reason.to_string().yellow()),
            },
            Command::Status => println!("{}\n", status_line(&game)),
            Command::State => println!("{}\n", state_json(&game)?),
            Command::Help => println!("{HELP}\n"),
            Command::Quit => {
                println!("Goodbye!");
                break;
            }
        }
    }

    Ok(())
}

fn status_line(game: &Game) -> String {
    format!(
        "  Coins: {} | Wisdom: {}/100 | Levels: {}/{} | Phase: {}",
        game.coins().to_string().yellow(),
        game.wisdom().to_string().cyan(),
        game.state().progress().completed_count(),
        game.content().level_count(),
        game.phase()
    )
}

fn state_json(game: &Game) -> Result<String, String> {
    let value = serde_json::json!({
        "progress": game.state().progress(),
        "materialsPanelOpen": game.materials_panel_open(),
        "counters": game.counters(),
    });
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}

/// Render the screen that follows an applied event.
fn render_after(game: &Game, event: Event) {
    if event == Event::ToggleMaterialsPanel {
        render_materials(game);
        return;
    }
    render(game);
}

fn render(game: &Game) {
    match game.phase() {
        Phase::Landing => {
            println!("  Learn to tell a real offer from a scam.");
            println!("  Type 'start' to begin.\n");
        }
        Phase::ChapterMap => render_map(game),
        Phase::Dialogue => render_dialogue(game),
        Phase::Quiz | Phase::ScenarioTest | Phase::PostTest => render_assessment(game),
        Phase::Ending => render_ending(game),
    }
}

fn render_map(game: &Game) {
    println!("{}", status_line(game));
    println!();
    for (i, level) in game.content().levels.iter().enumerate() {
        let marker = match game.level_status(i) {
            Some(LevelStatus::Completed) => "✓".green(),
            Some(LevelStatus::Current) => "▶".cyan(),
            Some(LevelStatus::Available) => "·".normal(),
            Some(LevelStatus::Locked) | None => "🔒".dimmed(),
        };
        let title = if level.subtitle.is_empty() {
            level.title.bold().to_string()
        } else {
            format!("{} {}", level.title.bold(), level.subtitle.dimmed())
        };
        println!("  {marker} {}. {title}", i + 1);
    }
    println!();
}

fn render_dialogue(game: &Game) {
    let Some(node) = game.current_node() else {
        return;
    };
    match &node.speaker {
        Some(speaker) => println!("  {}: {}", speaker.bold(), node.text),
        None => println!("  {}", node.text),
    }
    for flag in &node.red_flags {
        println!("    {} {}", "⚑".red(), flag.red());
    }
    println!();
    for (i, choice) in node.choices.iter().enumerate() {
        match &choice.icon {
            Some(icon) => println!("  {}. {icon} {}", i + 1, choice.text),
            None => println!("  {}. {}", i + 1, choice.text),
        }
    }
    println!();
}

fn render_assessment(game: &Game) {
    let Some(summary) = game.assessment() else {
        return;
    };

    if summary.ended {
        println!(
            "  {} {}/{} correct ({}%), {}",
            "Result:".bold(),
            summary.correct,
            summary.total,
            summary.percent,
            summary.grade
        );
        if let Some(rank) = summary.rank {
            println!("  Rank: {}", rank.to_string().cyan());
        }
        println!("  Type 'finish' to continue.\n");
        return;
    }

    let Some(question) = game.current_question() else {
        return;
    };
    println!(
        "  {} {}/{}",
        game.phase().to_string().bold(),
        summary.position + 1,
        summary.total
    );
    println!("  {}", question.text);
    for (i, option) in question.options.iter().enumerate() {
        println!("    {}. {option}", i + 1);
    }

    if let Some(answered) = summary.answered {
        if answered.correct {
            println!("  {}", "Correct!".green());
        } else {
            let right = question
                .options
                .get(question.correct)
                .map_or("", String::as_str);
            println!("  {} The answer was: {right}", "Wrong.".red());
        }
        if let Some(explanation) = &question.explanation {
            println!("  {}", explanation.dimmed());
        }
        println!("  Type 'next' to continue.");
    }
    println!();
}

fn render_materials(game: &Game) {
    if !game.materials_panel_open() {
        println!("  Materials closed.\n");
        return;
    }
    println!("  {}", "Materials".bold());
    if game.content().tips.is_empty() {
        println!("  (no materials)");
    }
    for tip in &game.content().tips {
        println!("  • {tip}");
    }
    println!();
}

fn render_ending(game: &Game) {
    println!("  {}", "The end".bold());
    println!("{}", status_line(game));
    println!(
        "  Post-test: {}/{}",
        game.post_test_score(),
        game.content().post_test.len()
    );
    if !game.achievements().is_empty() {
        println!("  Achievements: {}", game.achievements().join(", "));
    }
    for tip in &game.content().tips {
        println!("  • {tip}");
    }
    println!("  Type 'reset' to play again.\n");
}
