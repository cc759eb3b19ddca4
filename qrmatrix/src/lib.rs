pub mod error;
pub mod state;
pub mod scan;
pub mod matrix;
#[cfg(feature = "serde")]
pub mod config;

pub use error::{MatrixError, ParseError};
pub use matrix::{Cells, Matrix};
pub use scan::ScanDirection;
pub use state::{combine_xor, states_match, State};
