pub mod bottle_history;
pub mod coupons_catalog;
pub mod login_attempts;
pub mod redeemed_coupons;
pub mod user_points;
pub mod user_sessions;
pub mod users;

pub use bottle_history as bottle_history_entity;
pub use bottle_history::BottleStatus;
pub use coupons_catalog as coupon_entity;
pub use login_attempts as login_attempt_entity;
pub use redeemed_coupons as redeemed_coupon_entity;
pub use redeemed_coupons::RedemptionStatus;
pub use user_points as user_point_entity;
pub use user_sessions as user_session_entity;
pub use users as user_entity;
