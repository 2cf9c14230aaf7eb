use std::convert::Infallible;
use std::env::consts;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostOs {
    FreeBSD,
    Linux,
    MacOS,
    Windows,
    Other(String),
}

impl HostOs {
    // https://doc.rust-lang.org/std/env/consts/constant.OS.html
    pub fn from_os() -> HostOs {
        Self::from_rust_os(consts::OS)
    }

    pub fn from_rust_os(os: &str) -> HostOs {
        match os {
            "freebsd" => HostOs::FreeBSD,
            "linux" => HostOs::Linux,
            "macos" => HostOs::MacOS,
            "windows" => HostOs::Windows,
            unknown => HostOs::Other(unknown.to_owned()),
        }
    }
}

impl FromStr for HostOs {
    type Err = Infallible;

    // Accepts both Rust names and distribution names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();

        Ok(match value.as_str() {
            "darwin" | "mac" | "macos" => HostOs::MacOS,
            "win" | "win32" | "windows" => HostOs::Windows,
            _ => Self::from_rust_os(&value),
        })
    }
}

impl fmt::Display for HostOs {
    // to io.js file name segments
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HostOs::FreeBSD => "freebsd",
                HostOs::Linux => "linux",
                HostOs::MacOS => "darwin",
                HostOs::Windows => "windows",
                HostOs::Other(os) => os,
            }
        )
    }
}
