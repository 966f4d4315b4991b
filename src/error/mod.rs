mod types;

pub use types::{CenterError, Result};
