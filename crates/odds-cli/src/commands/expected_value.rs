use odds_engine::{ExpectedValueQuery, OddsEngine, OutputConfig};

pub fn run(
    engine: &OddsEngine,
    tier: &str,
    start: i64,
    output: &OutputConfig,
) -> Result<(), String> {
    let tier = super::parse_tier(tier)?;
    let query = ExpectedValueQuery::new(tier, start).map_err(|e| e.to_string())?;

    let expected = engine
        .expected_value(query.tier, query.start_trial)
        .map_err(|e| e.to_string())?;

    println!("{}", output.format_value(expected));
    Ok(())
}
