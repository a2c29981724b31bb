pub mod bottle;
pub mod coupon;
pub mod leaderboard;
pub mod user;

pub use bottle::*;
pub use coupon::*;
pub use leaderboard::*;
pub use user::*;
