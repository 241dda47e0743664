mod chain;
mod enumerate;
mod filter;
mod flatten;
mod intersperse;
mod map;
mod peekable;
mod scan;
mod skip;
mod step_by;
mod take;
mod zip;

pub use chain::*;
pub use enumerate::*;
pub use filter::*;
pub use flatten::*;
pub use intersperse::*;
pub use map::*;
pub use peekable::*;
pub use scan::*;
pub use skip::*;
pub use step_by::*;
pub use take::*;
pub use zip::*;
