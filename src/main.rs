//! Pi Lowpass - LC Filter Calculator
//!
//! Computes component values for Butterworth, Chebyshev and Bessel
//! Pi-topology low-pass filters.
//!
//! # Usage
//!
//! ```bash
//! pi-lowpass -t butterworth -f 10MHz -z 50 -n 5
//! pi-lowpass -t chebyshev -f 100MHz -z 50 -r 0.5 -n 5 --format json
//! ```

use clap::Parser;
use log::info;
use pi_lowpass::{
    design,
    error::Result,
    logging,
    report::{self, OutputFormat},
    units, FilterFamily, FilterSpec, DEFAULT_ORDER, DEFAULT_RIPPLE_DB,
};

/// Pi LC low pass filter calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filter type: butterworth, chebyshev or bessel
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    family: FilterFamily,

    /// Cutoff frequency (e.g. 100MHz, 1.5GHz, 500kHz)
    #[arg(short, long, required_unless_present = "explain")]
    frequency: Option<String>,

    /// Characteristic impedance (e.g. 50, 75ohm, 1kohm)
    #[arg(short = 'z', long, default_value = "50")]
    impedance: String,

    /// Passband ripple in dB (Chebyshev only)
    #[arg(short, long, default_value_t = DEFAULT_RIPPLE_DB, allow_negative_numbers = true)]
    ripple: f64,

    /// Number of components (filter order)
    #[arg(short = 'n', long = "components", default_value_t = DEFAULT_ORDER)]
    order: usize,

    /// Print raw values in Farads and Henries
    #[arg(long)]
    raw: bool,

    /// Explain how the selected filter type works
    #[arg(long)]
    explain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.explain {
        println!("{}", report::explain(args.family));
        return Ok(());
    }

    // clap enforces the frequency unless --explain was given
    let frequency = args.frequency.as_deref().unwrap_or_default();
    let spec = FilterSpec {
        family: args.family,
        order: args.order,
        cutoff_hz: units::parse_frequency(frequency)?,
        impedance_ohms: units::parse_impedance(&args.impedance)?,
        ripple_db: args.ripple,
    };
    info!("designing {:?}", spec);

    let result = design(&spec)?;
    print!("{}", report::render(&result, args.format, args.raw)?);

    Ok(())
}
