use clap::Parser;

use projectboard::ProjectClient;

#[derive(Parser)]
#[command(name = "projectboard")]
#[command(about = "Desktop client for a project-management backend")]
struct Cli {
    /// Base URL of the project-management API
    #[arg(long, value_name = "URL", default_value = "http://localhost:8000")]
    server_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "projectboard=debug"
    } else {
        "projectboard=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

#[cfg(feature = "gui")]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    tracing::debug!(server_url = %args.server_url, "starting projectboard");
    let client = ProjectClient::new(args.server_url);
    projectboard::gui::run(client)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    anyhow::bail!("projectboard was built without the gui feature");
}
