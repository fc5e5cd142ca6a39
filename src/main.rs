//! Crypto chart simulator - main binary.
//!
//! Headless driver for the two chart generators: streams synthetic live
//! prices for an asset, then runs a Monte Carlo forward-price simulation
//! from the same starting price. The loop below stands in for the hosting
//! UI runtime's timers (reference cadences: 500 ms stream ticks, regime
//! switches every 20 ticks).

mod config;

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use sim_core::{ChartSeries, ChartSession, MonteCarloSimulator};
use types::parse_num_or;

pub use config::AppConfig;

/// Crypto chart simulator - synthetic live stream and Monte Carlo forecast.
#[derive(Parser, Debug)]
#[command(name = "crypto-chart-sim")]
#[command(about = "Synthetic crypto price charts: live stream + Monte Carlo forward paths")]
#[command(version)]
struct Args {
    /// Asset symbol to display
    #[arg(long, default_value = "BTC")]
    symbol: String,

    /// Asset price in USD, string-encoded as the price API delivers it
    #[arg(long, default_value = "30000")]
    price_usd: String,

    /// Stream ticks to run
    #[arg(long, env = "SIM_TICKS")]
    ticks: Option<u64>,

    /// Delay between stream ticks in milliseconds
    #[arg(long, env = "SIM_TICK_DELAY")]
    tick_delay: Option<u64>,

    /// Stream ticks between regime switches (0 = never)
    #[arg(long)]
    regime_interval: Option<u64>,

    /// Monte Carlo steps per path
    #[arg(long)]
    steps: Option<usize>,

    /// Monte Carlo path count
    #[arg(long)]
    paths: Option<usize>,

    /// Monte Carlo per-step volatility as a fraction of the start price
    #[arg(long)]
    volatility: Option<f64>,

    /// Seed for reproducible runs
    #[arg(long, env = "SIM_SEED")]
    seed: Option<u64>,

    /// Emit chart series as JSON on stdout instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = build_config(&args);
    run(config);
}

/// Merge CLI arguments into the default configuration.
fn build_config(args: &Args) -> AppConfig {
    let mut config = AppConfig::default();

    config.symbol = args.symbol.clone();
    // The price API string-encodes numbers; empty or malformed input falls
    // back to the reference price instead of aborting.
    config.base_price = parse_num_or(&args.price_usd, 30000.0);

    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }
    if let Some(delay) = args.tick_delay {
        config.tick_delay_ms = delay;
    }
    if let Some(interval) = args.regime_interval {
        config.regime_interval = interval;
    }
    if let Some(steps) = args.steps {
        config.simulation.steps = steps;
    }
    if let Some(paths) = args.paths {
        config.simulation.path_count = paths;
    }
    if let Some(volatility) = args.volatility {
        config.simulation.volatility = volatility;
    }
    config.simulation.start_price = config.base_price;
    config.seed = args.seed;
    config.json = args.json;

    config
}

fn run(config: AppConfig) {
    // ── Live stream ──────────────────────────────────────────────────────
    let mut session = match config.seed {
        Some(seed) => ChartSession::with_seed(
            config.base_price,
            config.stream.clone(),
            config.regime.clone(),
            seed,
        ),
        None => ChartSession::new(config.base_price, config.stream.clone(), config.regime.clone()),
    };

    eprintln!(
        "Streaming {} ticks for {} (base ${:.2})...",
        config.total_ticks, config.symbol, config.base_price
    );
    let start = Instant::now();

    for tick in 0..config.total_ticks {
        if config.regime_interval > 0 && tick > 0 && tick % config.regime_interval == 0 {
            let regime = session.switch_regime();
            let bias = if regime.is_bull { "bull" } else { "bear" };
            eprintln!(
                "  regime switch at tick {}: {} (volatility {:.0})",
                tick, bias, regime.volatility
            );
        }

        session.advance();

        if config.tick_delay_ms > 0 {
            thread::sleep(Duration::from_millis(config.tick_delay_ms));
        }

        // Progress every 10%
        if tick > 0 && tick % (config.total_ticks / 10).max(1) == 0 {
            let pct = (tick * 100) / config.total_ticks;
            eprintln!("  {}% ({}/{} ticks)", pct, tick, config.total_ticks);
        }
    }

    let elapsed = start.elapsed();
    let window = session.window();
    let regime = session.regime();

    eprintln!();
    eprintln!("╔═══════════════════════════════════════════════════════════╗");
    eprintln!("║  Live Stream Complete                                     ║");
    eprintln!("╠═══════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Ticks: {:8}  │  Elapsed: {:6.2}s  │  Window: {:5}    ║",
        config.total_ticks,
        elapsed.as_secs_f64(),
        window.len()
    );
    eprintln!(
        "║  Last: ${:<11.2}  Range: ${:<10.2} - ${:<11.2}  ║",
        window.newest().map_or(0.0, |p| p.value),
        window.min_value().unwrap_or(0.0),
        window.max_value().unwrap_or(0.0)
    );
    eprintln!(
        "║  Regime: {:4}  │  Volatility: {:<8.0}                    ║",
        if regime.is_bull { "bull" } else { "bear" },
        regime.volatility
    );
    eprintln!("╚═══════════════════════════════════════════════════════════╝");

    // ── Monte Carlo forecast ─────────────────────────────────────────────
    let mut simulator = match config.seed {
        Some(seed) => MonteCarloSimulator::with_seed(seed),
        None => MonteCarloSimulator::new(),
    };

    match simulator.run(&config.simulation) {
        Ok(result) => {
            let terminals = result.terminal_prices();
            let mean = terminals.iter().sum::<f64>() / terminals.len() as f64;
            let min = terminals.iter().copied().fold(f64::INFINITY, f64::min);
            let max = terminals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            eprintln!();
            eprintln!(
                "Simulated {} paths x {} steps from ${:.2}",
                result.path_count(),
                result.steps(),
                config.simulation.start_price
            );
            eprintln!(
                "Terminal price: mean ${:.2}, min ${:.2}, max ${:.2}",
                mean, min, max
            );

            if config.json {
                let payload = serde_json::json!({
                    "symbol": config.symbol,
                    "live": session.series(),
                    "forecast": ChartSeries::from_result(&result),
                });
                println!("{payload}");
            }
        }
        Err(err) => {
            // Invalid parameters reject the whole run; the stream above is
            // unaffected.
            eprintln!();
            eprintln!("Simulation rejected: {err}");
        }
    }
}
