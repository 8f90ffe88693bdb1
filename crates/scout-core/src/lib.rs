mod error;
mod path;
mod policy;

pub use error::{Error, Result};
pub use path::*;
pub use policy::*;
