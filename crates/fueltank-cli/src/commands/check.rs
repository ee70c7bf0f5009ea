//! Self-test command: replays the documented examples against the library.
//!
//! The cases mirror the worked examples in `docs/quickstart.md`. Each
//! case prints `ok` or `FAILED`; the process exits non-zero if any fail.

use anyhow::{Result, bail};
use fueltank::{FuelTank, TankError};
use fueltank_types::{Liters, VolumeError};
use owo_colors::OwoColorize;
use tracing::debug;

struct Case {
    name: &'static str,
    run: fn() -> bool,
}

const CASES: &[Case] = &[
    Case {
        name: "a 50 L tank holding 20 L is accepted",
        run: example_tank_is_accepted,
    },
    Case {
        name: "negative capacity is rejected",
        run: negative_capacity_is_rejected,
    },
    Case {
        name: "negative fuel is rejected",
        run: negative_fuel_is_rejected,
    },
    Case {
        name: "fuel above capacity is rejected",
        run: fuel_above_capacity_is_rejected,
    },
    Case {
        name: "non-numeric text is rejected at the boundary",
        run: non_numeric_text_is_rejected,
    },
    Case {
        name: "a dry tank reads empty, a fueled tank does not",
        run: emptiness_follows_the_level,
    },
    Case {
        name: "adding 15 L to 30 L yields 45 L",
        run: adding_fuel_raises_the_level,
    },
    Case {
        name: "overfilling fails and changes nothing",
        run: overfilling_changes_nothing,
    },
    Case {
        name: "drawing 10 L of 20 L returns 10 L and leaves 10 L",
        run: drawing_fuel_lowers_the_level,
    },
    Case {
        name: "overdrawing fails and changes nothing",
        run: overdrawing_changes_nothing,
    },
];

pub fn run() -> Result<()> {
    debug!(cases = CASES.len(), "replaying documented examples");

    println!("{}", "Replaying documented examples".bold());
    println!();

    let mut failures = 0usize;
    for case in CASES {
        if (case.run)() {
            println!("  {} {}", "ok".green(), case.name);
        } else {
            println!("  {} {}", "FAILED".red(), case.name);
            failures += 1;
        }
    }

    println!();
    if failures > 0 {
        bail!("{failures} of {} documented examples failed", CASES.len());
    }
    println!("All {} documented examples hold.", CASES.len());
    Ok(())
}

// ============================================================================
// Cases
// ============================================================================

fn tank(capacity: f64, level: f64) -> Option<FuelTank> {
    let capacity = Liters::new(capacity).ok()?;
    let level = Liters::new(level).ok()?;
    FuelTank::new(capacity, level).ok()
}

fn example_tank_is_accepted() -> bool {
    tank(50.0, 20.0).is_some()
}

fn negative_capacity_is_rejected() -> bool {
    let (Ok(capacity), Ok(level)) = (Liters::new(-1.0), Liters::new(0.0)) else {
        return false;
    };
    matches!(
        FuelTank::new(capacity, level),
        Err(TankError::NonPositiveCapacity(_))
    )
}

fn negative_fuel_is_rejected() -> bool {
    let (Ok(capacity), Ok(level)) = (Liters::new(50.0), Liters::new(-5.0)) else {
        return false;
    };
    matches!(FuelTank::new(capacity, level), Err(TankError::NegativeFuel(_)))
}

fn fuel_above_capacity_is_rejected() -> bool {
    let (Ok(capacity), Ok(level)) = (Liters::new(50.0), Liters::new(60.0)) else {
        return false;
    };
    matches!(
        FuelTank::new(capacity, level),
        Err(TankError::LevelExceedsCapacity { .. })
    )
}

fn non_numeric_text_is_rejected() -> bool {
    matches!("x".parse::<Liters>(), Err(VolumeError::NotNumeric(_)))
}

fn emptiness_follows_the_level() -> bool {
    let (Some(dry), Some(fueled)) = (tank(50.0, 0.0), tank(50.0, 1.0)) else {
        return false;
    };
    dry.is_empty() && !fueled.is_empty()
}

fn adding_fuel_raises_the_level() -> bool {
    let (Some(mut tank), Ok(amount)) = (tank(50.0, 30.0), Liters::new(15.0)) else {
        return false;
    };
    tank.add_fuel(amount).is_ok() && tank.level().as_f64() == 45.0
}

fn overfilling_changes_nothing() -> bool {
    let (Some(mut tank), Ok(amount)) = (tank(50.0, 45.0), Liters::new(10.0)) else {
        return false;
    };
    tank.add_fuel(amount).is_err() && tank.level().as_f64() == 45.0
}

fn drawing_fuel_lowers_the_level() -> bool {
    let (Some(mut tank), Ok(amount)) = (tank(50.0, 20.0), Liters::new(10.0)) else {
        return false;
    };
    tank.use_fuel(amount) == Ok(amount) && tank.level().as_f64() == 10.0
}

fn overdrawing_changes_nothing() -> bool {
    let (Some(mut tank), Ok(amount)) = (tank(50.0, 20.0), Liters::new(100.0)) else {
        return false;
    };
    tank.use_fuel(amount).is_err() && tank.level().as_f64() == 20.0
}
