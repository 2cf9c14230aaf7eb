pub mod consts;

pub use starbase_styles::*;
