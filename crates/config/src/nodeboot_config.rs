use schematic::Config;

/// Configures which io.js and npm releases are bootstrapped.
/// Loaded from `.nodeboot.yml` within the install root.
#[derive(Clone, Config, Debug, PartialEq)]
#[config(rename_all = "camelCase")]
pub struct NodebootConfig {
    /// The version of io.js to download and install.
    #[setting(default = "1.1.0", env = "NODEBOOT_NODE_VERSION")]
    pub node_version: String,

    /// The version of npm to download and install.
    #[setting(default = "2.4.1", env = "NODEBOOT_NPM_VERSION")]
    pub npm_version: String,

    /// Custom package registry. Stored for consumers, not used
    /// when computing distribution URLs.
    #[setting(env = "NODEBOOT_REGISTRY")]
    pub registry: Option<String>,
}
