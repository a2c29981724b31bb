use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// 对 PIN 码进行哈希
pub fn hash_pin(pin: &str) -> AppResult<String> {
    hash(pin, DEFAULT_COST).map_err(|e| AppError::InternalError(format!("PIN 哈希失败: {}", e)))
}

/// 验证 PIN 码（bcrypt 内部为常数时间比较）
pub fn verify_pin(pin: &str, pin_hash: &str) -> AppResult<bool> {
    verify(pin, pin_hash).map_err(|e| AppError::InternalError(format!("PIN 验证失败: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_pin() {
        let pin = "1234";
        let hashed = hash_pin(pin).unwrap();

        assert!(verify_pin(pin, &hashed).unwrap());
        assert!(!verify_pin("4321", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let h1 = hash_pin("1234").unwrap();
        let h2 = hash_pin("1234").unwrap();
        assert_ne!(h1, h2);
    }
}
