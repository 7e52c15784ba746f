//! Console text for a run. Pure string building; the runner does the printing.

use crate::{
    event::SimEvent,
    geo::format_years,
    types::{Position, Year},
};

pub const BANNER: &str = "Starting simulation...\n";

/// One line per breath:
/// `Breath #3 | Years: 300 | Turtle(lat=1.0000, lon=2.0000) | Yoke(lat=3.0000, lon=4.0000)`
pub fn breath_line(breath: u64, year: Year, turtle: Position, yoke: Position) -> String {
    format!(
        "Breath #{breath} | Years: {} | Turtle(lat={:.4}, lon={:.4}) | Yoke(lat={:.4}, lon={:.4})",
        format_years(year),
        turtle.lat,
        turtle.lon,
        yoke.lat,
        yoke.lon
    )
}

/// The closing block, preceded by a blank line.
pub fn success_block(year: Year) -> String {
    format!("\nSUCCESS!\nTotal years passed: {}", format_years(year))
}

pub fn limit_block(year: Year) -> String {
    format!("\nNo reunion within the year limit.\nTotal years passed: {}", format_years(year))
}

/// Human text for an event, if it has any. Run initialisation is silent.
pub fn render(event: &SimEvent) -> Option<String> {
    match event {
        SimEvent::RunInitialized { .. } => None,
        SimEvent::Breath { breath, year, turtle, yoke, .. } => {
            Some(breath_line(*breath, *year, *turtle, *yoke))
        }
        SimEvent::Reunited { year, .. } => Some(success_block(*year)),
        SimEvent::LimitReached { year } => Some(limit_block(*year)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breath_line_format() {
        let line = breath_line(
            12,
            1_200,
            Position { lat: 12.345678, lon: -170.0 },
            Position { lat: -0.5, lon: 3.5 },
        );
        assert_eq!(
            line,
            "Breath #12 | Years: 1,200 | Turtle(lat=12.3457, lon=-170.0000) | Yoke(lat=-0.5000, lon=3.5000)"
        );
    }

    #[test]
    fn success_block_has_two_lines_after_blank() {
        let block = success_block(2_345_600);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines, vec!["", "SUCCESS!", "Total years passed: 2,345,600"]);
    }

    #[test]
    fn initialisation_is_not_rendered() {
        let event = SimEvent::RunInitialized {
            seed: 1,
            turtle: Position { lat: 0.0, lon: 0.0 },
            yoke: Position { lat: 0.0, lon: 0.0 },
            season_phase: 0.0,
        };
        assert!(render(&event).is_none());
        assert!(render(&SimEvent::Reunited { breath: 1, year: 100 })
            .unwrap()
            .contains("SUCCESS!"));
    }
}
