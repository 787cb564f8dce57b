use clap::Parser;
use form_autofill::cli::commands::{build_sink, cmd_fill, cmd_inspect};
use form_autofill::cli::config::{Cli, Commands, load_config, resolve_trace_level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let level = resolve_trace_level(cli.verbose, &config.trace.level);
    let sink = build_sink(level, config.trace.path.as_deref());

    match cli.command {
        Commands::Fill {
            snapshot,
            profile,
            output,
            events,
        } => {
            cmd_fill(
                &snapshot,
                profile.as_deref(),
                output.as_deref(),
                events,
                sink,
                &config,
            )?;
        }
        Commands::Inspect { snapshot, profile } => {
            cmd_inspect(&snapshot, profile.as_deref(), sink, &config)?;
        }
    }

    Ok(())
}
