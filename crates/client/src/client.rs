use crate::client_error::ClientError;
use nodeboot_common::consts::{
    DEFAULT_NODE_VERSION, DEFAULT_NPM_VERSION, NODE_DIST_HOST, NODE_DIST_PREFIX,
    NPM_ARCHIVE_HOST, TMP_DIRNAME,
};
use nodeboot_config::NodebootConfig;
use nodeboot_platform::{HostArch, Platform};
use starbase_utils::fs;
use std::fs::DirBuilder;
use std::io;
use std::path::{self, Component, Path, PathBuf};
use tracing::{debug, instrument, trace};
use uuid::Uuid;

const TMP_DIR_ATTEMPTS: usize = 10_000;

const TMP_DIR_SUFFIX_LENGTH: usize = 10;

/// Computes where io.js and npm are installed within a root directory,
/// and where their distributions are downloaded from.
///
/// Nothing is cached, so every method reflects the current field values.
#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    /// Directory that io.js is installed into.
    pub root_path: PathBuf,

    /// The io.js version to install.
    pub node_version: String,

    /// The npm version to install.
    pub npm_version: String,

    /// Custom package registry. Not used by any method here.
    pub registry: Option<String>,

    /// Operating system and architecture to compute names for.
    pub platform: Platform,
}

impl Client {
    pub fn new(root_path: impl AsRef<Path>) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
            node_version: DEFAULT_NODE_VERSION.to_owned(),
            npm_version: DEFAULT_NPM_VERSION.to_owned(),
            registry: None,
            platform: Platform::current(),
        }
    }

    pub fn from_config(root_path: impl AsRef<Path>, config: &NodebootConfig) -> Self {
        Self {
            node_version: config.node_version.clone(),
            npm_version: config.npm_version.clone(),
            registry: config.registry.clone(),
            ..Self::new(root_path)
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Return the name of the directory io.js is installed into,
    /// relative to the root path.
    pub fn node_base(&self) -> String {
        let version = &self.node_version;
        let os = &self.platform.os;

        match self.platform.arch {
            HostArch::Arm => format!("{NODE_DIST_PREFIX}{version}-{os}-armv7l"),
            HostArch::X86 => format!("{NODE_DIST_PREFIX}{version}-{os}-x86"),
            _ => format!("{NODE_DIST_PREFIX}{version}-{os}-x64"),
        }
    }

    /// Return the URL of the io.js distribution to download.
    /// Windows always receives the 32-bit executable.
    pub fn node_url(&self) -> String {
        let version = &self.node_version;
        let os = &self.platform.os;

        if self.platform.is_windows() {
            return format!("{NODE_DIST_HOST}/v{version}/win-x86/iojs.exe");
        }

        match self.platform.arch {
            HostArch::X86 => {
                format!("{NODE_DIST_HOST}/v{version}/{NODE_DIST_PREFIX}{version}-{os}-x86.tar.gz")
            }
            HostArch::Arm => {
                format!(
                    "{NODE_DIST_HOST}/v{version}/{NODE_DIST_PREFIX}{version}-{os}-armv7l.tar.gz"
                )
            }
            _ => format!("{NODE_DIST_HOST}/v{version}/{}.tar.gz", self.node_base()),
        }
    }

    /// Return a path to the `node` binary within the root. The file may not exist.
    pub fn node_path(&self) -> PathBuf {
        let bin_name = if self.platform.is_windows() {
            "node.exe"
        } else {
            "node"
        };

        self.root_path
            .join(self.node_base())
            .join("bin")
            .join(bin_name)
    }

    pub fn npm_url(&self) -> String {
        format!("{NPM_ARCHIVE_HOST}/v{}.zip", self.npm_version)
    }

    /// Return a path to the `cli.js` entry script of npm. The file may not exist.
    pub fn npm_path(&self) -> PathBuf {
        self.root_path
            .join(self.node_base())
            .join("lib")
            .join("node_modules")
            .join("npm")
            .join("cli.js")
    }

    /// Create a new uniquely named directory within `<root>/tmp`,
    /// whose name starts with the provided prefix. The prefix must be a
    /// plain name, as separators would nest or escape the tmp root.
    ///
    /// Failing to create the directory is an unrecoverable setup error,
    /// so this panics with the underlying error. Use [`Client::try_tmp_dir`]
    /// to handle the failure instead.
    pub fn tmp_dir(&self, prefix: &str) -> PathBuf {
        match self.try_tmp_dir(prefix) {
            Ok(dir) => dir,
            Err(error) => match std::error::Error::source(&error) {
                Some(source) => panic!("{error} {source}"),
                None => panic!("{error}"),
            },
        }
    }

    #[instrument(skip(self))]
    pub fn try_tmp_dir(&self, prefix: &str) -> Result<PathBuf, ClientError> {
        if is_invalid_prefix(prefix) {
            return Err(ClientError::InvalidTmpPrefix {
                prefix: prefix.to_owned(),
            });
        }

        let root = self.root_path.join(TMP_DIRNAME);

        fs::create_dir_all(&root).map_err(|error| ClientError::CreateTmpRoot {
            path: root.clone(),
            error: Box::new(error),
        })?;

        // The create must fail when the directory already exists,
        // so that concurrent callers never share a directory
        for _ in 0..TMP_DIR_ATTEMPTS {
            let dir = root.join(format!("{prefix}{}", create_suffix()));

            match create_private_dir(&dir) {
                Ok(_) => {
                    debug!(dir = ?dir, "Created scratch directory");

                    return Ok(dir);
                }
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                    trace!(dir = ?dir, "Scratch directory already exists, trying another name");
                }
                Err(error) => {
                    return Err(ClientError::CreateTmpDir {
                        path: dir,
                        error: Box::new(error),
                    });
                }
            }
        }

        Err(ClientError::TmpDirExhausted {
            root,
            prefix: prefix.to_owned(),
            attempts: TMP_DIR_ATTEMPTS,
        })
    }
}

// A prefix is a single name segment, otherwise joining it would
// place the directory outside of the tmp root
fn is_invalid_prefix(prefix: &str) -> bool {
    prefix.contains(path::is_separator)
        || Path::new(prefix)
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    DirBuilder::new().mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    DirBuilder::new().create(dir)
}

fn create_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(TMP_DIR_SUFFIX_LENGTH);
    suffix
}
