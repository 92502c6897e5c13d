use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use shm_app::{
    AppResult, ComparisonReport, DEFAULT_STEPS, compare, convergence, load_scenario, series_table,
    summarize, validate_scenario, write_csv,
};
use shm_sim::Method;

#[derive(Parser)]
#[command(name = "shm-cli")]
#[command(about = "Damped harmonic oscillator lab - compare integration schemes", long_about = None)]
struct Cli {
    /// Log debug events (per-method timing, refinement levels)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run the selected methods and compare them with the exact solution
    Compare {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export one method's samples as CSV
    ExportSeries {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Method name (e.g., analytic, explicit-euler, verlet, euler-cromer)
        method: Method,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Measure the error of a method as the step size shrinks
    Convergence {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Method name
        method: Method,
        /// Comma separated step sizes (default 0.1,0.05,0.025,0.0125)
        #[arg(long, value_delimiter = ',')]
        steps: Vec<f64>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries command output only.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Compare {
            scenario_path,
            json,
        } => cmd_compare(&scenario_path, json),
        Commands::ExportSeries {
            scenario_path,
            method,
            output,
        } => cmd_export_series(&scenario_path, method, output.as_deref()),
        Commands::Convergence {
            scenario_path,
            method,
            steps,
        } => cmd_convergence(&scenario_path, method, &steps),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    validate_scenario(&scenario)?;
    let summary = summarize(&scenario)?;

    println!("✓ Scenario is valid");
    println!("  Name:     {}", summary.name);
    println!(
        "  Regime:   {:?} (damping ratio {:.4})",
        summary.regime, summary.damping_ratio
    );
    println!("  Samples:  {} (h = {})", summary.samples, summary.step);
    let methods: Vec<&str> = summary.methods.iter().map(|m| m.name()).collect();
    println!("  Methods:  {}", methods.join(", "));
    if let Some(step) = summary.impulse_step {
        println!("  Impulse:  step {}", step);
    }
    Ok(())
}

fn cmd_compare(scenario_path: &Path, json: bool) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let report = compare(&scenario)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ComparisonReport) {
    println!("Scenario: {}", report.scenario);
    println!(
        "  {:?}, b = {} (half {:.4}, critical {:.4}, twice {:.4})",
        report.regime,
        report.damping,
        report.markers.half,
        report.markers.critical,
        report.markers.twice
    );
    println!(
        "  {} samples, h = {}{}",
        report.samples,
        report.step,
        if report.forced { ", forced" } else { "" }
    );
    println!();
    println!(
        "  {:<26} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Method", "RMS error", "Max error", "Final x", "Energy drift", "Energy chi2"
    );
    for m in &report.methods {
        let chi = m
            .energy_chi_square
            .map(|c| format!("{:.4e}", c))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<26} {:>12.4e} {:>12.4e} {:>12.6} {:>12.4e} {:>12}",
            m.label, m.rms_error, m.max_abs_error, m.final_position, m.energy_drift, chi
        );
    }
    if let Some(best) = report.most_accurate() {
        println!();
        println!("✓ Most accurate: {}", best.label);
    }
}

fn cmd_export_series(scenario_path: &Path, method: Method, output: Option<&Path>) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let table = series_table(&scenario, method)?;

    // Write to file or stdout
    if let Some(path) = output {
        let file = std::fs::File::create(path)?;
        write_csv(&table, io::BufWriter::new(file))?;
        println!(
            "✓ Exported {} samples of {} to {}",
            table.rows.len(),
            method.label(),
            path.display()
        );
    } else {
        let stdout = io::stdout();
        write_csv(&table, stdout.lock())?;
    }

    Ok(())
}

fn cmd_convergence(scenario_path: &Path, method: Method, steps: &[f64]) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let steps = if steps.is_empty() {
        &DEFAULT_STEPS[..]
    } else {
        steps
    };
    let points = convergence(&scenario, method, steps)?;

    println!("Convergence of {} (unforced):", method.label());
    println!("  {:>10} {:>10} {:>14} {:>8}", "h", "samples", "RMS error", "order");
    for p in &points {
        let order = p
            .observed_order
            .map(|o| format!("{:.3}", o))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>10} {:>10} {:>14.6e} {:>8}",
            p.step, p.samples, p.rms_error, order
        );
    }
    io::stdout().flush()?;
    Ok(())
}
