use clap::Parser;
use contact_relay::cli::commands::{cmd_preview, cmd_send};
use contact_relay::cli::config::{Cli, Commands, load_config, resolve_endpoint};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve endpoint: CLI > config > default
    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), &config);

    match cli.command {
        Commands::Send {
            fields,
            source,
            format,
            output,
        } => {
            let delivered = cmd_send(
                &fields,
                &source,
                &format,
                output.as_deref(),
                &endpoint,
                &config,
                cli.verbose,
            )?;
            if !delivered {
                std::process::exit(1);
            }
        }
        Commands::Preview { fields, source } => {
            cmd_preview(&fields, &source, cli.verbose)?;
        }
    }

    Ok(())
}
