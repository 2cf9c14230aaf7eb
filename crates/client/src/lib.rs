mod client;
mod client_error;

pub use client::*;
pub use client_error::*;
pub use nodeboot_platform::{HostArch, HostOs, Platform};
