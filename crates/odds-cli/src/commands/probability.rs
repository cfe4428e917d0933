use odds_engine::{OddsEngine, OutputConfig, ProbabilityQuery};

pub fn run(
    engine: &OddsEngine,
    tier: &str,
    start: i64,
    additional: i64,
    output: &OutputConfig,
) -> Result<(), String> {
    let tier = super::parse_tier(tier)?;
    let query = ProbabilityQuery::new(tier, start, additional).map_err(|e| e.to_string())?;

    let probability = engine
        .probability(query.tier, query.start_trial, query.additional_trials)
        .map_err(|e| e.to_string())?;

    println!("{}", output.format_value(probability));
    Ok(())
}
