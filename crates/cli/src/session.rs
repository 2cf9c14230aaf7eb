use crate::app::App;
use nodeboot_client::{Client, Platform};
use nodeboot_config::ConfigLoader;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct CliSession {
    pub client: Client,
}

impl CliSession {
    /// Load configuration from the root, then apply command line overrides.
    #[instrument(skip_all)]
    pub fn load(cli: &App) -> miette::Result<Self> {
        let config = ConfigLoader.load_config(&cli.root)?;
        let mut client = Client::from_config(&cli.root, &config);

        if let Some(version) = &cli.node_version {
            client.node_version = version.to_owned();
        }

        if let Some(version) = &cli.npm_version {
            client.npm_version = version.to_owned();
        }

        if let Some(registry) = &cli.registry {
            client.registry = Some(registry.to_owned());
        }

        if cli.os.is_some() || cli.arch.is_some() {
            let platform = Platform::new(
                cli.os.clone().unwrap_or(client.platform.os.clone()),
                cli.arch.clone().unwrap_or(client.platform.arch.clone()),
            );

            debug!(platform = %platform, "Targeting a custom platform");

            client = client.with_platform(platform);
        }

        Ok(Self { client })
    }
}
