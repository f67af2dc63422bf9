//! Report rendering.
//!
//! Observations are rendered either as a short text report or as
//! pretty-printed JSON.
//!
//! ```text
//! Block 901152 · AG_4_2_3_2016
//!
//! Moon  🌑 new moon of the 🫂 Friend Moon
//!       waxing crescent in 504 blocks, Whale Moon in 2016 blocks
//! Sun   🌞 Summer, 43848 blocks to the Autumn Equinox
//!       148848 blocks to the next halving
//! Tide  🌊 High Tide (+18)
//!       high tide at peak (spring tide), next turn at block 901188
//! Air   4000 tx per full block (2800 tx in 2800000 WU)
//! ```

use core::fmt::Write as _;

use nextblock_types::Observations;

use crate::config::OutputFormat;
use crate::error::ObserverError;

/// Render observations in the requested format.
///
/// Tidal readings are left out when `include_tidal` is `false`.
///
/// # Errors
///
/// Returns [`ObserverError::Report`] if rendering fails.
pub fn render(
    observations: &Observations,
    format: OutputFormat,
    include_tidal: bool,
) -> Result<String, ObserverError> {
    match format {
        OutputFormat::Text => {
            render_text(observations, include_tidal).map_err(|e| ObserverError::Report {
                message: format!("text rendering failed: {e}"),
            })
        }
        OutputFormat::Json => {
            render_json(observations, include_tidal).map_err(|e| ObserverError::Report {
                message: format!("JSON rendering failed: {e}"),
            })
        }
    }
}

fn render_text(obs: &Observations, include_tidal: bool) -> Result<String, core::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Block {} · {}", obs.height, obs.formatted_date)?;
    writeln!(out)?;

    let lunar = &obs.lunar;
    writeln!(
        out,
        "Moon  {} {} moon of the {} {}",
        lunar.current_phase.emoji,
        lunar.current_phase.name,
        lunar.current_cycle.emoji,
        lunar.current_cycle.name,
    )?;
    writeln!(
        out,
        "      {} in {} blocks, {} in {} blocks",
        lunar.next_phase.name,
        lunar.blocks_until_next_phase,
        lunar.next_cycle.name,
        lunar.blocks_until_next_cycle,
    )?;

    let solar = &obs.solar;
    writeln!(
        out,
        "Sun   {} {}, {} blocks to the {} {}",
        solar.current_season.emoji,
        solar.current_season.name,
        solar.blocks_until_next_season,
        solar.next_season.name,
        solar.next_season.suffix,
    )?;
    writeln!(
        out,
        "      {} blocks to the next halving",
        solar.blocks_until_next_cycle
    )?;

    if include_tidal {
        let tidal = &obs.tidal;
        writeln!(out, "Tide  {}", tidal.display)?;
        writeln!(
            out,
            "      {}, next turn at block {}",
            tidal.description, tidal.state.next_tide_block
        )?;
    }

    if let Some(atmosphere) = &obs.atmosphere {
        match atmosphere.conditions {
            Some(conditions) => writeln!(
                out,
                "Air   {conditions} tx per full block ({} tx in {} WU)",
                atmosphere.transaction_count, atmosphere.weight
            )?,
            None => writeln!(out, "Air   empty block")?,
        }
    }

    Ok(out)
}

fn render_json(obs: &Observations, include_tidal: bool) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(obs)?;
    if let Some(fields) = value.as_object_mut().filter(|_| !include_tidal) {
        fields.remove("tidal");
    }
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nextblock_core::Telescope;
    use nextblock_types::{Block, Height};

    use super::*;

    fn observe(height: i64) -> Observations {
        Telescope::at(Height::new(height)).observe().unwrap()
    }

    #[test]
    fn text_report_lists_every_reading() {
        let report = render(&observe(901_152), OutputFormat::Text, true).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first(), Some(&"Block 901152 · AG_4_2_3_2016"));
        assert!(report.contains("Moon  🌑 new moon of the 🫂 Friend Moon"));
        assert!(report.contains("waxing crescent in 504 blocks, Whale Moon in 2016 blocks"));
        assert!(report.contains("Sun   🌞 Summer, 43848 blocks to the Autumn Equinox"));
        assert!(report.contains("148848 blocks to the next halving"));
        assert!(report.contains("Tide  🌊 High Tide (+18)"));
        assert!(report.contains("high tide at peak (spring tide), next turn at block 901188"));
        assert!(!report.contains("Air"));
    }

    #[test]
    fn text_report_can_skip_tides() {
        let report = render(&observe(901_152), OutputFormat::Text, false).unwrap();
        assert!(!report.contains("Tide"));
        assert!(report.contains("Moon"));
    }

    #[test]
    fn text_report_includes_atmosphere() {
        let block = Block {
            weight: 2_800_000,
            tx_count: 2800,
            ..Block::at_height(Height::new(901_152))
        };
        let obs = Telescope::new(&block).observe().unwrap();
        let report = render(&obs, OutputFormat::Text, true).unwrap();
        assert!(report.contains("Air   4000 tx per full block (2800 tx in 2800000 WU)"));
    }

    #[test]
    fn json_report_round_trips() {
        let obs = observe(901_152);
        let report = render(&obs, OutputFormat::Json, true).unwrap();
        let parsed: Observations = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed, obs);
    }

    #[test]
    fn json_report_can_skip_tides() {
        let report = render(&observe(901_152), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert!(value.get("tidal").is_none());
        assert_eq!(value["formatted_date"], "AG_4_2_3_2016");
    }

    #[test]
    fn json_report_carries_catalog_names_and_emoji() {
        let report = render(&observe(901_152), OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        let cycle = &value["lunar"]["current_cycle"];
        assert_eq!(cycle["name"], "Friend Moon");
        assert_eq!(cycle["emoji"], "🫂");
        assert_eq!(value["lunar"]["current_phase"]["name"], "new");
        let season = &value["solar"]["next_season"];
        assert_eq!(season["name"], "Autumn");
        assert_eq!(season["suffix"], "Equinox");
    }
}
