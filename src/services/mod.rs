pub mod auth_service;
pub mod classifier;
pub mod leaderboard_service;
pub mod monitoring_service;
pub mod redemption_service;
pub mod student_service;

pub use auth_service::*;
pub use classifier::{InsertionClassifier, NoopClassifier};
pub use leaderboard_service::*;
pub use monitoring_service::*;
pub use redemption_service::*;
pub use student_service::*;
