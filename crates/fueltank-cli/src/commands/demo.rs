//! Demonstration command: construct a tank, inspect it, refuel, draw.
//!
//! With the default arguments this replays the scenario from the
//! quickstart: a 50 L tank holding 20 L gains 10 L and then loses 5 L.

use std::path::Path;

use anyhow::{Context, Result};
use fueltank::FuelTank;
use fueltank_types::Liters;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::preset;

/// Volume added midway through the demonstration.
const DEMO_ADD: f64 = 10.0;

/// Volume drawn at the end of the demonstration.
const DEMO_DRAW: f64 = 5.0;

pub fn run(capacity: Liters, fuel: Liters, preset_path: Option<&Path>) -> Result<()> {
    let mut tank = match preset_path {
        Some(path) => preset::load_tank(path)
            .with_context(|| format!("failed to load preset {}", path.display()))?,
        None => FuelTank::new(capacity, fuel).context("invalid tank parameters")?,
    };

    debug!(capacity = %tank.capacity(), level = %tank.level(), "tank constructed");

    println!("{}", "Fuel tank demonstration".bold());
    println!();
    println!(
        "Tank: {} capacity, holding {}  {}",
        tank.capacity(),
        tank.level(),
        gauge(&tank)
    );
    println!("Empty? {}", if tank.is_empty() { "yes" } else { "no" });
    println!();

    let added = Liters::new(DEMO_ADD)?;
    tank.add_fuel(added).context("demonstration refuel failed")?;
    println!("Added {added}. Level is now {}  {}", tank.level(), gauge(&tank));

    let drawn = tank
        .use_fuel(Liters::new(DEMO_DRAW)?)
        .context("demonstration draw failed")?;
    println!("Drew {drawn}. {} remaining  {}", tank.level(), gauge(&tank));

    Ok(())
}

/// Renders the fill level as a ten-segment gauge, e.g. `[######----] 60%`.
fn gauge(tank: &FuelTank) -> String {
    let fraction = tank.fill_fraction();
    let filled = ((fraction * 10.0).round() as usize).min(10);

    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        fraction * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank(capacity: f64, level: f64) -> FuelTank {
        FuelTank::new(
            Liters::new(capacity).unwrap(),
            Liters::new(level).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn gauge_renders_the_fill_fraction() {
        assert_eq!(gauge(&tank(50.0, 0.0)), "[----------] 0%");
        assert_eq!(gauge(&tank(50.0, 25.0)), "[#####-----] 50%");
        assert_eq!(gauge(&tank(50.0, 50.0)), "[##########] 100%");
    }
}
