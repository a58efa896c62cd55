use anyhow::Result;

use linegauge::widgets::{GaugeConfig, LineGauge, TickSize, ValueMode};
use linegauge::{Rect, RecordingCanvas, Widget};

/// Viewport used to count paint commands.
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 360.0, 55.0);

pub(crate) fn run(mut config: GaugeConfig, value: Option<i64>, columns: usize) -> Result<()> {
    if let Some(value) = value {
        config.mode = match config.mode {
            ValueMode::Controlled { .. } => ValueMode::Controlled { value },
            ValueMode::Uncontrolled { .. } => ValueMode::Uncontrolled {
                initial_value: Some(value),
            },
        };
    }

    let mut gauge = LineGauge::new(config)?;
    for line in ruler(&gauge, columns) {
        println!("{line}");
    }

    gauge.layout(VIEWPORT);
    let mut canvas = RecordingCanvas::new();
    gauge.paint(&mut canvas);
    println!();
    println!("value: {}", gauge.value());
    println!(
        "paint: {} draw commands for a {}px viewport",
        canvas.command_count(),
        VIEWPORT.width
    );
    Ok(())
}

/// Text rendition of the ruler: label row, mark row, centerline marker.
///
/// One column per tick, with the current value in the middle column.
pub(crate) fn ruler(gauge: &LineGauge, columns: usize) -> [String; 3] {
    let columns = columns.max(1);
    let center = columns / 2;
    let range = gauge.range();
    let intervals = gauge.intervals();

    let mut labels = vec![' '; columns];
    let mut marks = vec![' '; columns];
    let mut occupied_until = 0;

    for (col, mark) in marks.iter_mut().enumerate() {
        let value = gauge.value() - center as i64 + col as i64;
        if !range.contains(value) {
            continue;
        }
        let size = intervals.classify(value);
        *mark = match size {
            TickSize::Large => '|',
            TickSize::Medium => ':',
            TickSize::Small => '.',
        };

        if size.is_labeled() {
            let text: Vec<char> = value.to_string().chars().collect();
            let start = col.saturating_sub(text.len() / 2);
            if start >= occupied_until && start + text.len() <= columns {
                labels[start..start + text.len()].copy_from_slice(&text);
                occupied_until = start + text.len() + 1;
            }
        }
    }

    let mut marker = vec![' '; columns];
    marker[center] = '^';

    [labels, marks, marker].map(|row| row.into_iter().collect::<String>().trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge_at(value: i64) -> LineGauge {
        LineGauge::new(GaugeConfig::default().controlled(value)).unwrap()
    }

    #[test]
    fn test_ruler_centered_on_value() {
        let [labels, marks, marker] = ruler(&gauge_at(50), 21);
        assert_eq!(marks, "|....:....|....:....|");
        assert_eq!(marker, "          ^");
        assert_eq!(labels, "40       50        60");
    }

    #[test]
    fn test_ruler_stops_at_range_edge() {
        let [_, marks, _] = ruler(&gauge_at(1), 11);
        assert_eq!(marks, "     ....:.");
    }

    #[test]
    fn test_ruler_single_column() {
        let [_, marks, marker] = ruler(&gauge_at(10), 1);
        assert_eq!(marks, "|");
        assert_eq!(marker, "^");
    }
}
