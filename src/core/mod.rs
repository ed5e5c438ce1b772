pub mod artwork;
pub mod catalog;
pub mod constants;
pub mod schedule;
pub mod stage;
pub mod style;

pub use catalog::*;
pub use schedule::Coalescer;
pub use stage::*;
