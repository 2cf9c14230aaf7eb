use crate::commands::{InfoArgs, TmpDirArgs};
use clap::{Parser, Subcommand};
use nodeboot_client::{HostArch, HostOs};
use nodeboot_common::consts::BIN_NAME;
use std::path::PathBuf;

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        name = "base",
        about = "Print the name of the io.js install directory."
    )]
    Base,

    #[command(
        name = "info",
        about = "Print every computed location and URL."
    )]
    Info(InfoArgs),

    #[command(
        name = "node-path",
        about = "Print the path to the node binary."
    )]
    NodePath,

    #[command(
        name = "node-url",
        about = "Print the URL the io.js distribution is downloaded from."
    )]
    NodeUrl,

    #[command(
        name = "npm-path",
        about = "Print the path to the npm entry script."
    )]
    NpmPath,

    #[command(
        name = "npm-url",
        about = "Print the URL the npm archive is downloaded from."
    )]
    NpmUrl,

    #[command(
        name = "tmp-dir",
        about = "Create a uniquely named scratch directory and print its path."
    )]
    TmpDir(TmpDirArgs),
}

#[derive(Clone, Debug, Parser)]
#[command(
    bin_name = BIN_NAME,
    name = "nodeboot",
    about = "Compute io.js and npm install locations and download URLs.",
    version,
    disable_help_subcommand = true,
    propagate_version = true,
    next_line_help = false,
)]
pub struct App {
    #[arg(
        long,
        global = true,
        env = "NODEBOOT_ROOT",
        default_value = ".",
        help = "Directory to install io.js into"
    )]
    pub root: PathBuf,

    #[arg(long, global = true, help = "io.js version to target")]
    pub node_version: Option<String>,

    #[arg(long, global = true, help = "npm version to target")]
    pub npm_version: Option<String>,

    #[arg(long, global = true, help = "Custom package registry")]
    pub registry: Option<String>,

    #[arg(long, global = true, help = "Operating system to target instead of the host")]
    pub os: Option<HostOs>,

    #[arg(long, global = true, help = "Architecture to target instead of the host")]
    pub arch: Option<HostArch>,

    #[command(subcommand)]
    pub command: Commands,
}
