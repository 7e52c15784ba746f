//! sim-runner: runs the turtle-and-yoke simulation to completion.
//!
//! Usage:
//!   sim-runner
//!   sim-runner --seed 12345 --max-years 10000000
//!   sim-runner --seed 12345 --json
//!   sim-runner --pace-ms 10

use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use turtle_yoke_core::{
    config::SimConfig,
    engine::{RunState, SimEngine},
    event::SimEvent,
    report,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed")?.unwrap_or_else(entropy_seed);
    let max_years = parse_arg(&args, "--max-years")?;
    let pace_ms = parse_arg(&args, "--pace-ms")?.unwrap_or(0u64);
    let mode = if args.iter().any(|a| a == "--json") {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    log::info!("seed={seed} max_years={max_years:?} pace_ms={pace_ms}");

    let config = SimConfig::default().with_max_years(max_years);
    let mut engine = SimEngine::build(seed, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if mode == OutputMode::Text {
        writeln!(out, "{}", report::BANNER)?;
    }
    emit(&mut out, mode, &engine.initial_event())?;

    'run: loop {
        for event in engine.tick()? {
            emit(&mut out, mode, &event)?;
            if event.is_terminal() {
                break 'run;
            }
            if pace_ms > 0 && matches!(event, SimEvent::Breath { .. }) {
                out.flush()?;
                thread::sleep(Duration::from_millis(pace_ms));
            }
        }
    }
    out.flush()?;

    match engine.state() {
        RunState::LimitReached { year } => anyhow::bail!(
            "no reunion after {year} simulated years (seed {})",
            engine.seed()
        ),
        _ => Ok(()),
    }
}

fn emit(out: &mut impl Write, mode: OutputMode, event: &SimEvent) -> Result<()> {
    match mode {
        OutputMode::Json => writeln!(out, "{}", event.to_json()?)?,
        OutputMode::Text => {
            if let Some(text) = report::render(event) {
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}

/// Value of `flag`, if given. A flag that is present but missing or
/// malformed is an error rather than a silent default.
fn parse_arg<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let raw = args
        .get(pos + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    let value = raw
        .parse::<T>()
        .with_context(|| format!("invalid value for {flag}: '{raw}'"))?;
    Ok(Some(value))
}

fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ (u64::from(std::process::id()) << 32)
}
