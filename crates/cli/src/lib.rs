mod app;
pub mod commands;
mod session;

pub use app::*;
pub use session::*;
use tracing::debug;

pub fn run_cli(cli: App) -> miette::Result<()> {
    debug!(root = ?cli.root, "Running nodeboot");

    let session = CliSession::load(&cli)?;

    match cli.command {
        Commands::Base => commands::base(&session),
        Commands::Info(args) => commands::info(&session, args),
        Commands::NodePath => commands::node_path(&session),
        Commands::NodeUrl => commands::node_url(&session),
        Commands::NpmPath => commands::npm_path(&session),
        Commands::NpmUrl => commands::npm_url(&session),
        Commands::TmpDir(args) => commands::tmp_dir(&session, args),
    }
}
