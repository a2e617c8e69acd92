use anyhow::{bail, Context, Result};
use clap::Parser;
use linalgkit::{conv1d, multiply};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "linalgkit")]
#[command(about = "Multiply matrices and convolve sequences")]
#[command(version)]
struct Cli {
    /// Left matrix, rows separated by `;` (e.g. "1 2 3; 4 5 6")
    #[arg(long, default_value = "1 2 3; 4 5 6")]
    a: String,

    /// Right matrix
    #[arg(long, default_value = "7 8; 9 10; 11 12")]
    b: String,

    /// Input signal (e.g. "1 2 3 4 5")
    #[arg(long, default_value = "1 2 3 4 5")]
    input: String,

    /// Convolution kernel
    #[arg(long, default_value = "1 0 -1")]
    kernel: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    let a = parse_matrix(&cli.a).context("invalid --a")?;
    let b = parse_matrix(&cli.b).context("invalid --b")?;
    let product = multiply(&a, &b).context("matmul failed")?;
    println!("Result of matmul:");
    for row in &product {
        println!("{}", join(row));
    }

    let input = parse_sequence(&cli.input).context("invalid --input")?;
    let kernel = parse_sequence(&cli.kernel).context("invalid --kernel")?;
    let output = conv1d(&input, &kernel).context("conv1d failed")?;
    println!("Result of conv1d:");
    println!("{}", join(&output));

    Ok(())
}

// falls back to info when unset or unparsable
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>> {
    let rows: Vec<&str> = text.split(';').map(str::trim).collect();
    if rows.len() == 1 && rows[0].is_empty() {
        return Ok(Vec::new());
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_sequence(row).with_context(|| format!("row {}", i + 1)))
        .collect()
}

fn parse_sequence(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => bail!("not a number: {:?}", token),
        }
    }
    Ok(values)
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
