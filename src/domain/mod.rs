pub mod reservoir;
pub mod scenario;
pub mod schedule;
pub mod trajectory;

pub use reservoir::*;
pub use scenario::*;
pub use schedule::*;
pub use trajectory::*;
