pub mod code_generator;
pub mod password;
pub mod validation;

pub use code_generator::{generate_redemption_code, generate_session_token};
pub use password::*;
pub use validation::*;
