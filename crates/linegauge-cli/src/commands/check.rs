use anyhow::Result;
use std::path::Path;

use linegauge::widgets::{GaugeConfig, LineGauge, ValueMode};

pub(crate) fn run(path: &Path) -> Result<()> {
    let config = crate::load_config(path)?;
    print!("{}", summary(&config)?);
    Ok(())
}

/// Human-readable description of a validated configuration.
pub(crate) fn summary(config: &GaugeConfig) -> Result<String> {
    let gauge = LineGauge::new(config.clone())?;
    let range = gauge.range();
    let intervals = gauge.intervals();
    let space = gauge.mapper().space();

    let mode = match config.mode {
        ValueMode::Controlled { value } => format!("controlled (value {value})"),
        ValueMode::Uncontrolled { .. } => format!("uncontrolled (starts at {})", gauge.value()),
    };

    let mut out = String::new();
    out.push_str("✓ Config is valid\n");
    out.push_str(&format!("  Range:      {}..={}\n", range.min(), range.max()));
    out.push_str(&format!(
        "  Intervals:  medium every {}, large every {}\n",
        intervals.medium(),
        intervals.large()
    ));
    out.push_str(&format!(
        "  Scroll:     0..={} px ({} px per tick)\n",
        space.max,
        config.tick_width
    ));
    out.push_str(&format!("  Rounding:   {:?}\n", config.rounding));
    out.push_str(&format!("  Mode:       {mode}\n"));
    Ok(out)
}
