//! Terminal front end: animates the board until interrupted.

mod telemetry;

use anyhow::Result;
use crossterm::{cursor, execute, style::ResetColor};
use selection_core::SimulationConfig;
use selection_world::Simulation;
use std::io::{self, Stdout, Write};
use tokio::signal;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let config = SimulationConfig::default();
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut simulation = Simulation::new(config)?;

    info!(
        interval_ms = tick_interval.as_millis() as u64,
        "Starting natural selection"
    );

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let outcome = tokio::select! {
        result = run_loop(&mut simulation, &mut stdout, tick_interval) => result,
        _ = shutdown_signal() => Ok(()),
    };

    execute!(stdout, ResetColor, cursor::Show)?;

    let summary = simulation.summary();
    info!(
        ticks = summary.ticks,
        total_meals = summary.total_meals,
        total_deaths = summary.total_deaths,
        extinct_at = ?summary.extinct_at,
        survivors = simulation.board().population(),
        "Shutting down"
    );

    outcome
}

/// Tick, draw, and wait; only returns if writing a frame fails
async fn run_loop(
    simulation: &mut Simulation,
    stdout: &mut Stdout,
    tick_interval: Duration,
) -> Result<()> {
    let mut ticker = interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut frame = Vec::new();

    loop {
        ticker.tick().await;

        frame.clear();
        simulation.tick(&mut frame)?;
        stdout.write_all(&frame)?;
        stdout.flush()?;
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
