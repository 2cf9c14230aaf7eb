/// The io.js version to install when none is configured.
pub const DEFAULT_NODE_VERSION: &str = "1.1.0";

/// The npm version to install when none is configured.
pub const DEFAULT_NPM_VERSION: &str = "2.4.1";

/// Prefix of every io.js distribution directory. The download host names its
/// archives this way, and install paths are matched against it.
pub const NODE_DIST_PREFIX: &str = "iojs-v";

pub const NODE_DIST_HOST: &str = "https://iojs.org/dist";

pub const NPM_ARCHIVE_HOST: &str = "http://github.com/npm/npm/archive";

pub const CONFIG_FILENAME: &str = ".nodeboot.yml";

pub const TMP_DIRNAME: &str = "tmp";

#[cfg(windows)]
pub const BIN_NAME: &str = "nodeboot.exe";

#[cfg(not(windows))]
pub const BIN_NAME: &str = "nodeboot";
