mod date;
mod point;
mod window;

pub use date::NavDate;
pub use point::{Point, RawRecord, Series};
pub use window::LookbackWindow;
