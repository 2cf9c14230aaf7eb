use clap::Parser;
use nodeboot_cli::{App as CLI, run_cli};
use starbase::App;
use starbase::tracing::TracingOptions;
use starbase_utils::string_vec;

fn main() -> miette::Result<()> {
    let app = App::default();
    app.setup_diagnostics();

    let _guard = app.setup_tracing(TracingOptions {
        filter_modules: string_vec!["nodeboot", "schematic", "starbase"],
        log_env: "NODEBOOT_LOG".into(),
        ..TracingOptions::default()
    });

    run_cli(CLI::parse())
}
