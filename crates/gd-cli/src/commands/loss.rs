use comfy_table::{ContentArrangement, Table};
use gd_engine::minigame::{LossScenario, calculate};

pub fn run(scenario: Option<usize>, amount: f64, months: u32) -> Result<(), String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("amount must be a non-negative number, got {amount}"));
    }
    let months = months.clamp(1, 60);

    let presets = LossScenario::presets();
    let chosen: Vec<&LossScenario> = match scenario {
        None => presets.iter().collect(),
        Some(n) => {
            let s = n
                .checked_sub(1)
                .and_then(|i| presets.get(i))
                .ok_or_else(|| format!("no offer {n} (choose 1-{})", presets.len()))?;
            vec![s]
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Offer", "Invested", "Returned", "Lost", "Lost %", "Fees"]);

    for s in chosen {
        let r = calculate(s, amount, months);
        table.add_row(vec![
            s.name.clone(),
            format!("{:.2}", r.principal),
            format!("{:.2}", r.total),
            format!("{:.2}", r.loss),
            format!("{:.1}%", r.loss_percent),
            format!("{:.2}", r.fees),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Over {months} month{}", if months == 1 { "" } else { "s" });

    Ok(())
}
