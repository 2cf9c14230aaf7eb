mod info;
mod paths;
mod tmp_dir;

pub use info::*;
pub use paths::*;
pub use tmp_dir::*;
