pub mod difficulty;
pub mod filter_state;
pub mod macros;
pub mod practice;

pub use difficulty::*;
pub use filter_state::*;
pub use practice::*;
