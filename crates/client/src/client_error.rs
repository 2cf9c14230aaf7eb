use miette::Diagnostic;
use nodeboot_common::{Style, Stylize};
use starbase_utils::fs::FsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ClientError {
    #[diagnostic(code(client::tmp_dir::create_root))]
    #[error(
        "Failed to create scratch directory root {}.",
        .path.style(Style::Path),
    )]
    CreateTmpRoot {
        path: PathBuf,
        #[source]
        error: Box<FsError>,
    },

    #[diagnostic(code(client::tmp_dir::create))]
    #[error(
        "Failed to create scratch directory {}.",
        .path.style(Style::Path),
    )]
    CreateTmpDir {
        path: PathBuf,
        #[source]
        error: Box<std::io::Error>,
    },

    #[diagnostic(code(client::tmp_dir::invalid_prefix))]
    #[error(
        "Scratch directory prefix {} must be a plain name, without path separators.",
        .prefix.style(Style::Symbol),
    )]
    InvalidTmpPrefix { prefix: String },

    #[diagnostic(code(client::tmp_dir::exhausted))]
    #[error(
        "Unable to find an unused scratch directory name for prefix {} within {} after {} attempts.",
        .prefix.style(Style::Symbol),
        .root.style(Style::Path),
        .attempts,
    )]
    TmpDirExhausted {
        root: PathBuf,
        prefix: String,
        attempts: usize,
    },
}
