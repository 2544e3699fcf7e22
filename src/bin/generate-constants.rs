#![forbid(unsafe_code)]
use anyhow::Result;
#[cfg(feature = "serde")]
use australians_calendar::{CsvRenderer, JsonRenderer};
use australians_calendar::{emit, supported_years, Arrangement, Renderer, RustSource};
use clap::{Parser, ValueEnum};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Génère la table des jours fériés australiens
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Fichier généré
    #[arg(long, default_value = "constants.rs")]
    out: String,

    /// Format de sortie
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    format: Format,

    /// Affiche le résultat au lieu d'écrire le fichier
    #[arg(long)]
    stdout: bool,

    /// Liste les années disponibles et quitte
    #[arg(long)]
    years: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Rust,
    Json,
    Csv,
}

impl Format {
    fn renderer(self) -> Result<Box<dyn Renderer>> {
        match self {
            Format::Rust => Ok(Box::new(RustSource)),
            #[cfg(feature = "serde")]
            Format::Json => Ok(Box::new(JsonRenderer)),
            #[cfg(feature = "serde")]
            Format::Csv => Ok(Box::new(CsvRenderer)),
            #[cfg(not(feature = "serde"))]
            other => anyhow::bail!("format {other:?} requires the `serde` feature"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    if cli.years {
        for year in supported_years() {
            println!("{year}");
        }
        return Ok(());
    }

    let renderer = cli.format.renderer()?;
    if cli.stdout {
        let arrangement = Arrangement::new()?;
        print!("{}", renderer.render(&arrangement)?);
        return Ok(());
    }

    let arrangement = emit::generate(&cli.out, renderer.as_ref())?;
    println!(
        "{} written: {} holiday(s), {} workday(s), {} in-lieu day(s)",
        cli.out,
        arrangement.holidays().len(),
        arrangement.workdays().len(),
        arrangement.in_lieu_days().len()
    );
    Ok(())
}
