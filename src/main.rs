use anyhow::Result;
use clap::Parser;
use quicklook::cli::{Cli, Commands};
use quicklook::commands::analyze::{handle_analyze, AnalyzeConfig};
use quicklook::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            ignore,
            no_default_ignores,
            jobs,
            no_parallel,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);

            let config = AnalyzeConfig {
                path,
                format,
                output,
                ignore,
                no_default_ignores,
                jobs,
                parallel: should_use_parallel(no_parallel),
                formatting_config: create_formatting_config(plain),
            };
            handle_analyze(config)
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

// Pure function to determine parallel mode
fn should_use_parallel(no_parallel: bool) -> bool {
    !no_parallel
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
