use anyhow::Result;
use clap::Parser;
use copilot_roi::cli::{Cli, Commands};
use copilot_roi::commands::{self, AppContext, CalculateConfig, ReportConfig};
use copilot_roi::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    if let Commands::Init { force } = cli.command {
        commands::init_config(force)?;
        return Ok(());
    }

    let ctx = AppContext::load(cli.config.as_deref(), cli.color)?;

    match cli.command {
        Commands::Calculate {
            inputs,
            format,
            output,
        } => commands::run_calculate(
            &ctx,
            CalculateConfig {
                inputs,
                format,
                output,
            },
        ),
        Commands::Report {
            inputs,
            format,
            output,
        } => commands::run_report(
            &ctx,
            ReportConfig {
                inputs,
                format,
                output,
            },
        )
        .map(|_| ()),
        Commands::Session { strict } => {
            let stdin = std::io::stdin();
            commands::run_session(&ctx, strict, stdin.lock(), std::io::stdout().lock())
        }
        Commands::Ranges => commands::show_ranges(&ctx, &mut std::io::stdout().lock()),
        Commands::Init { .. } => Ok(()),
    }
}
