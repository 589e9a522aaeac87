use telemetry_select_core::{Family, TelemetryRecord, Variant};

use super::CommandResult;

pub fn run(variant: &str, count: usize, seed: Option<u64>) -> CommandResult {
    let variants = super::parse_variants(variant)?;
    let data = super::make_generator(seed).generate(count)?;

    println!("Dataset: {} records\n", data.len());
    let results = select_all(&variants, &data)?;
    for (v, record) in &results {
        println!("{:<30} {}", v.name(), record);
    }

    for family in Family::ALL {
        if let Some(agree) = family_agrees(&results, family) {
            let verdict = if agree { "agree" } else { "DISAGREE" };
            println!("\n{family} variants {verdict}");
        }
    }
    Ok(())
}

/// Run each variant on `data`, keeping the order given.
pub fn select_all<'a>(
    variants: &[Variant],
    data: &'a [TelemetryRecord],
) -> Result<Vec<(Variant, &'a TelemetryRecord)>, telemetry_select_core::SelectError> {
    variants
        .iter()
        .map(|&v| v.select(data).map(|r| (v, r)))
        .collect()
}

/// Whether every selected variant of `family` returned the same record.
/// `None` when fewer than two variants of the family ran.
pub fn family_agrees(results: &[(Variant, &TelemetryRecord)], family: Family) -> Option<bool> {
    let ids: Vec<_> = results
        .iter()
        .filter(|(v, _)| v.family() == family)
        .map(|(_, r)| r.correlation_id())
        .collect();
    if ids.len() < 2 {
        return None;
    }
    Some(ids.iter().all(|id| *id == ids[0]))
}
