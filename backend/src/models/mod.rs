pub mod chart;
pub mod houses;
pub mod query;
pub mod time;
pub mod zodiac;

pub use chart::*;
pub use houses::*;
pub use query::*;
pub use time::*;
pub use zodiac::*;
