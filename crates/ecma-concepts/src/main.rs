use clap::Parser;
use ecma_concepts::{Config, Result, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecma-concepts",
    version,
    about = "Compare function forms and destructure a sequence with a hole",
    long_about = "Prints add(1, 2), the closure form of addition on (3, 4), multiply(4, 5) and the first three slots of [1, <hole>, 2, 3]."
)]
struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print default configuration
    #[arg(long, value_name = "OPTION")]
    print_config: Option<PrintConfig>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PrintConfig {
    Default,
    Current,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        if cli.verbose {
            eprintln!("Loading config from: {}", config_path.display());
        }
        Config::from_file(config_path)?
    } else {
        match Config::load() {
            Ok(config) => {
                if cli.verbose {
                    eprintln!("Using loaded configuration");
                }
                config
            }
            Err(e) => {
                if cli.verbose {
                    eprintln!("Using default configuration ({e})");
                }
                Config::default()
            }
        }
    };

    if let Some(print_config_option) = cli.print_config {
        match print_config_option {
            PrintConfig::Default => print!("{}", Config::default_toml()),
            PrintConfig::Current => print!("{}", toml::to_string_pretty(&config)?),
        }
        return Ok(());
    }

    run(&config, std::io::stdout().lock())
}
