use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use field_pieces::pieces::{Car, CarError, PiecesResult, Point, Unit};

#[derive(Parser)]
#[command(name = "field_pieces")]
#[command(about = "Replay car and battle unit scenarios headlessly")]
struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    scenario: Scenario,
}

#[derive(Subcommand)]
enum Scenario {
    /// Refill a car and drive it to a destination
    Drive {
        /// Tank size
        #[arg(long, default_value = "100")]
        capacity: f64,

        /// Fuel burned per unit of distance
        #[arg(long, default_value = "0.5")]
        consumption: f64,

        /// Fuel poured in before driving
        #[arg(long, default_value = "50")]
        refill: f64,

        /// Destination x coordinate
        #[arg(long, default_value = "1")]
        x: f64,

        /// Destination y coordinate
        #[arg(long, default_value = "2")]
        y: f64,

        /// Car model name
        #[arg(long, default_value = "Mercedes")]
        model: String,
    },

    /// Let one unit attack another until someone dies or rounds run out
    Battle {
        #[arg(long, default_value = "Varian")]
        attacker_name: String,

        #[arg(long, default_value = "100")]
        attacker_hp: f64,

        #[arg(long, default_value = "20")]
        attacker_dmg: f64,

        #[arg(long, default_value = "Gul'dan")]
        defender_name: String,

        #[arg(long, default_value = "70")]
        defender_hp: f64,

        #[arg(long, default_value = "50")]
        defender_dmg: f64,

        /// Number of attacks to attempt
        #[arg(long, default_value = "1")]
        rounds: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match cli.scenario {
        Scenario::Drive {
            capacity,
            consumption,
            refill,
            x,
            y,
            model,
        } => {
            anyhow::ensure!(capacity > 0.0, "capacity must be positive, got {}", capacity);
            anyhow::ensure!(
                consumption > 0.0,
                "consumption must be positive, got {}",
                consumption
            );
            let mut car = Car::new(capacity, consumption, Point::origin(), model);
            run_drive(&mut car, refill, Point::new(x, y)).context("drive scenario failed")?;
            println!("{}", car);
        }
        Scenario::Battle {
            attacker_name,
            attacker_hp,
            attacker_dmg,
            defender_name,
            defender_hp,
            defender_dmg,
            rounds,
        } => {
            let mut attacker = Unit::new(attacker_name, attacker_hp, attacker_dmg);
            let mut defender = Unit::new(defender_name, defender_hp, defender_dmg);
            run_battle(&mut attacker, &mut defender, rounds).context("battle scenario failed")?;
            println!("{}", attacker);
            println!("{}", defender);
        }
    }

    Ok(())
}

/// Refill the car, then drive it to `destination`
///
/// An overflowing refill still leaves a full tank, so the ride is attempted
/// anyway. Running out of fuel is reported and the car stays put.
fn run_drive(car: &mut Car, refill: f64, destination: Point) -> PiecesResult<()> {
    info!("Starting: {}", car);

    match car.refill(refill) {
        Ok(()) => {}
        Err(err @ CarError::TooMuchFuel { .. }) => warn!("{}", err),
        Err(err) => return Err(err.into()),
    }
    info!("After refill: {}", car);

    let needed = car.fuel_needed(&destination);
    info!("Ride to {} needs {} fuel", destination, needed);
    match car.drive(destination) {
        Ok(()) => info!("Arrived: {}", car),
        Err(err @ CarError::OutOfFuel { .. }) => warn!("Stayed put: {}", err),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Repeat `attacker`'s attack for up to `rounds` rounds
fn run_battle(attacker: &mut Unit, defender: &mut Unit, rounds: u32) -> PiecesResult<()> {
    info!("Starting: {} vs {}", attacker, defender);

    for round in 1..=rounds {
        if !attacker.is_alive() || !defender.is_alive() {
            info!("Battle over after {} rounds", round - 1);
            break;
        }
        attacker.attack(defender)?;
        info!("Round {}: {} | {}", round, attacker, defender);
    }

    Ok(())
}
