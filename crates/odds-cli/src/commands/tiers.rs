use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use odds_engine::{OddsEngine, OddsSchedule};

pub fn run(engine: &OddsEngine) -> Result<(), String> {
    println!("  {}", "Odds Schedules".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Tier",
        "First opening",
        "Tail odds",
        "Listed openings",
        "Guaranteed from",
        "Expected boxes",
    ]);

    for (tier, schedule) in engine.table().iter() {
        let expected = engine
            .expected_value(tier, 0)
            .map_err(|e| e.to_string())?;
        table.add_row(vec![
            tier.to_string(),
            format_one_in(schedule.one_in()[0]),
            format_one_in(schedule.one_in()[schedule.tail_start()]),
            schedule.len().to_string(),
            guaranteed_label(schedule),
            format!("{expected:.2}"),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn format_one_in(n: f64) -> String {
    format!("1 in {n}")
}

/// Openings are numbered from 1, as in the game client.
fn guaranteed_label(schedule: &OddsSchedule) -> String {
    match schedule.guaranteed_at() {
        Some(trial) => format!("opening {}", trial + 1),
        None => "never".dimmed().to_string(),
    }
}
