pub mod floor;
pub mod rules;
pub mod sweep;
pub mod types;

pub use floor::*;
pub use rules::*;
pub use sweep::*;
pub use types::*;
