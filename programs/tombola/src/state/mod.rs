pub mod lottery;
pub mod vault;

pub use lottery::*;
pub use vault::*;
