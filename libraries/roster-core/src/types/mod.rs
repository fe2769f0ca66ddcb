mod fields;
mod ids;
mod timestamp;
mod user;

pub use fields::{UserField, UserFields};
pub use ids::UserId;
pub use timestamp::parse_timestamp;
pub use user::{Address, User};
