use anyhow::Result;
use serde::Serialize;
use tracing::info;

use linegauge::widgets::{GaugeChanged, GaugeConfig, LineGauge, SyncState};
use linegauge::{Event, ScrollCommand, Widget};

use crate::script::{self, Step};

/// Outcome of one scripted step.
#[derive(Debug, Serialize)]
pub(crate) struct StepReport {
    step: Step,
    changed: Option<i64>,
    value: i64,
    state: SyncState,
    commands: Vec<ScrollCommand>,
}

pub(crate) fn run(config: GaugeConfig, script: &str, json: bool) -> Result<()> {
    let steps = script::parse(script)?;
    let reports = simulate(config, &steps)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        let changed = report
            .changed
            .map_or_else(|| "-".to_string(), |v| format!("onChange({v})"));
        let commands: Vec<String> = report
            .commands
            .iter()
            .map(|c| {
                let kind = if c.animated { "animate" } else { "jump" };
                format!("{kind} {}", c.offset_x)
            })
            .collect();
        println!(
            "{:<16} {:<14} value={:<6} {:<8} {}",
            report.step.to_string(),
            changed,
            report.value,
            format!("{:?}", report.state),
            commands.join(", ")
        );
    }
    Ok(())
}

/// Drive a fresh gauge through `steps`.
pub(crate) fn simulate(config: GaugeConfig, steps: &[Step]) -> Result<Vec<StepReport>> {
    let mut gauge = LineGauge::new(config)?;
    let mut reports = Vec::with_capacity(steps.len());

    for &step in steps {
        let message = match step {
            Step::Scroll { offset_x } => gauge.event(&Event::ScrollOffsetChanged { offset_x }),
            Step::Settle { offset_x } => gauge.event(&Event::MomentumScrollEnd { offset_x }),
            Step::Content => {
                let event = Event::ContentSizeChanged {
                    width: gauge.mapper().space().extent(),
                    height: gauge.config().style.height,
                };
                gauge.event(&event)
            }
            Step::Set { value } => {
                gauge.set_value(value);
                None
            }
            Step::Range { min, max } => {
                let mut next = gauge.config().clone().with_range(min, max);
                if gauge.is_controlled() {
                    next = next.controlled(gauge.value());
                }
                gauge.apply(&next)?;
                None
            }
        };

        let changed = message
            .and_then(|m| m.downcast::<GaugeChanged>().ok())
            .map(|c| c.value);
        if let Some(value) = changed {
            info!(value, "value changed");
        }

        reports.push(StepReport {
            step,
            changed,
            value: gauge.value(),
            state: gauge.state(),
            commands: gauge.surface_mut().take(),
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(config: GaugeConfig, script: &str) -> Vec<StepReport> {
        simulate(config, &script::parse(script).unwrap()).unwrap()
    }

    #[test]
    fn test_user_scroll_reports_once() {
        let reports = run_script(GaugeConfig::default(), "scroll:900,scroll:900,settle:900");
        let changes: Vec<_> = reports.iter().filter_map(|r| r.changed).collect();
        assert_eq!(changes, vec![51]);
        assert!(reports.iter().all(|r| r.commands.is_empty()));
    }

    #[test]
    fn test_external_set_scrolls() {
        let reports = run_script(GaugeConfig::default().controlled(50), "set:80");
        assert_eq!(reports[0].commands, vec![ScrollCommand::jump(1422.0)]);
        assert_eq!(reports[0].value, 80);
        assert_eq!(reports[0].state, SyncState::Idle);
        assert_eq!(reports[0].changed, None);
    }

    #[test]
    fn test_range_change_waits_for_content() {
        let reports = run_script(GaugeConfig::default().controlled(80), "range:1:50,scroll:0,content");
        assert_eq!(reports[0].state, SyncState::Syncing);
        assert!(reports[0].commands.is_empty());
        assert_eq!(reports[1].changed, None);
        assert_eq!(reports[2].state, SyncState::Idle);
        assert_eq!(reports[2].value, 50);
        assert_eq!(reports[2].commands, vec![ScrollCommand::jump(882.0)]);
    }

    #[test]
    fn test_invalid_range_step_fails() {
        let steps = script::parse("range:9:2").unwrap();
        assert!(simulate(GaugeConfig::default(), &steps).is_err());
    }

    #[test]
    fn test_report_serializes() {
        let reports = run_script(GaugeConfig::default(), "scroll:900");
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["changed"], 51);
        assert_eq!(json[0]["state"], "Idle");
        assert_eq!(json[0]["step"]["kind"], "scroll");
    }
}
