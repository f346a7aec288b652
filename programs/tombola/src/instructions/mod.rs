pub mod initialize;
pub mod buy_ticket;
pub mod end_game;
pub mod change_cost;
pub mod change_max;

pub use initialize::*;
pub use buy_ticket::*;
pub use end_game::*;
pub use change_cost::*;
pub use change_max::*;
