use clap::{Parser, Subcommand, ValueEnum};
use upbot_action::AppError;

#[derive(Parser)]
#[command(name = "upbot-action")]
#[command(version)]
#[command(
    about = "Validate the environment and resolve Upbot launch settings",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that Maven Central is reachable from this runner
    #[clap(visible_alias = "c")]
    Check,
    /// Resolve launch settings from the action inputs
    #[clap(visible_alias = "r")]
    Resolve {
        /// Output format for the resolved settings
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable confirmations only
    Text,
    /// Compact JSON report on the last stdout line
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Check => upbot_action::check(),
        Commands::Resolve { format } => match format {
            OutputFormat::Text => upbot_action::resolve().map(|_| ()),
            OutputFormat::Json => upbot_action::resolve_with_report().map(|_| ()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
