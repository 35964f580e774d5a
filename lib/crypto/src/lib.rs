mod cbc;
pub use cbc::decrypt;

mod error;
pub use error::Error;

pub const BLOCK_SIZE: usize = 16;
