mod host_arch;
mod host_os;

pub use host_arch::*;
pub use host_os::*;
use std::fmt;
use tracing::trace;

/// An operating system and architecture pair that distribution
/// names and paths are computed against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: HostOs,
    pub arch: HostArch,
}

impl Platform {
    pub fn new(os: HostOs, arch: HostArch) -> Self {
        Self { os, arch }
    }

    /// Detect the platform the current process was compiled for.
    pub fn current() -> Self {
        let platform = Self::new(HostOs::from_os(), HostArch::from_os_arch());

        trace!(os = %platform.os, arch = %platform.arch, "Detected host platform");

        platform
    }

    pub fn is_windows(&self) -> bool {
        self.os == HostOs::Windows
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
