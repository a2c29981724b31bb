pub mod auth;
pub mod leaderboard;
pub mod monitoring;
pub mod redemption;
pub mod student;

pub use auth::auth_config;
pub use leaderboard::leaderboard_config;
pub use monitoring::monitoring_config;
pub use redemption::redemption_config;
pub use student::student_config;
