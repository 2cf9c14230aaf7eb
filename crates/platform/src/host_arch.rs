use std::convert::Infallible;
use std::env::consts;
use std::fmt;
use std::str::FromStr;

// Only the architectures io.js published builds for are named,
// everything else falls back to the 64-bit build.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostArch {
    /// 32-bit ARM.
    Arm,
    /// 64-bit x86.
    X64,
    /// 32-bit x86.
    X86,
    Other(String),
}

impl HostArch {
    // https://doc.rust-lang.org/std/env/consts/constant.ARCH.html
    pub fn from_os_arch() -> HostArch {
        Self::from_rust_arch(consts::ARCH)
    }

    pub fn from_rust_arch(arch: &str) -> HostArch {
        match arch {
            "arm" => HostArch::Arm,
            "x86_64" => HostArch::X64,
            "x86" => HostArch::X86,
            unknown => HostArch::Other(unknown.to_owned()),
        }
    }
}

impl FromStr for HostArch {
    type Err = Infallible;

    // Accepts both Rust names and distribution names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();

        Ok(match value.as_str() {
            "armv7l" => HostArch::Arm,
            "x64" | "amd64" => HostArch::X64,
            "386" | "i686" | "ia32" => HostArch::X86,
            _ => Self::from_rust_arch(&value),
        })
    }
}

impl fmt::Display for HostArch {
    // https://iojs.org/dist/v1.1.0/
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HostArch::Arm => "armv7l",
                HostArch::X64 => "x64",
                HostArch::X86 => "x86",
                HostArch::Other(arch) => arch,
            }
        )
    }
}
