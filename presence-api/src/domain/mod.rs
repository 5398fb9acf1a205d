mod overtime;
mod user;
mod weekday;

pub use overtime::*;
pub use user::*;
pub use weekday::*;
