pub mod api;
pub mod domain;
mod util;

pub use api::*;
pub use domain::*;
pub use util::*;
