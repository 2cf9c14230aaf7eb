use crate::session::CliSession;
use clap::Args;
use miette::IntoDiagnostic;
use nodeboot_client::Client;
use nodeboot_common::color;
use serde::Serialize;
use std::path::PathBuf;
use tracing::instrument;

#[derive(Args, Clone, Debug)]
pub struct InfoArgs {
    #[arg(long, help = "Print in JSON format")]
    pub json: bool,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub root: PathBuf,
    pub platform: String,
    pub node_version: String,
    pub npm_version: String,
    pub registry: Option<String>,
    pub node_base: String,
    pub node_url: String,
    pub node_path: PathBuf,
    pub npm_url: String,
    pub npm_path: PathBuf,
}

impl From<&Client> for ClientInfo {
    fn from(client: &Client) -> Self {
        Self {
            root: client.root_path.clone(),
            platform: client.platform.to_string(),
            node_version: client.node_version.clone(),
            npm_version: client.npm_version.clone(),
            registry: client.registry.clone(),
            node_base: client.node_base(),
            node_url: client.node_url(),
            node_path: client.node_path(),
            npm_url: client.npm_url(),
            npm_path: client.npm_path(),
        }
    }
}

#[instrument(skip(session))]
pub fn info(session: &CliSession, args: InfoArgs) -> miette::Result<()> {
    let info = ClientInfo::from(&session.client);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);

        return Ok(());
    }

    let rows = [
        ("Root", color::path(&info.root)),
        ("Platform", info.platform),
        ("io.js", info.node_version),
        ("npm", info.npm_version),
        (
            "Registry",
            info.registry
                .map(color::url)
                .unwrap_or_else(|| color::muted_light("default")),
        ),
        ("Install dir", color::file(info.node_base)),
        ("io.js URL", color::url(info.node_url)),
        ("io.js binary", color::path(&info.node_path)),
        ("npm URL", color::url(info.npm_url)),
        ("npm script", color::path(&info.npm_path)),
    ];

    for (label, value) in rows {
        println!("{} {value}", color::label(format!("{label:<13}")));
    }

    Ok(())
}
