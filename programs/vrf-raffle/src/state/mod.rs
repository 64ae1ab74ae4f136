pub use config::*;
pub use draw_clock::*;
pub use ledger::*;
pub use raffle::*;
pub use request::*;
pub use treasury::*;

pub mod config;
pub mod draw_clock;
pub mod ledger;
pub mod raffle;
pub mod request;
pub mod treasury;
