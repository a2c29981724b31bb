use crate::error::{AppError, AppResult};
use regex::Regex;

/// 验证 RFID 卡号格式（4-32 位字母数字与连字符）
pub fn validate_rfid(rfid: &str) -> AppResult<()> {
    let rfid_regex = Regex::new(r"^[A-Za-z0-9-]{4,32}$").unwrap();

    if !rfid_regex.is_match(rfid) {
        return Err(AppError::ValidationError(
            "RFID must be 4-32 alphanumeric characters".to_string(),
        ));
    }

    Ok(())
}

/// 验证用户名格式
pub fn validate_username(username: &str) -> AppResult<()> {
    let username_regex = Regex::new(r"^\w{3,20}$").unwrap();

    if !username_regex.is_match(username) {
        return Err(AppError::ValidationError(
            "Username must be 3-20 letters, digits or underscores".to_string(),
        ));
    }

    Ok(())
}

/// 验证 PIN 码格式（4-6 位数字）
pub fn validate_pin(pin: &str) -> AppResult<()> {
    if pin.len() < 4 || pin.len() > 6 || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::ValidationError(
            "PIN must be 4-6 digits".to_string(),
        ));
    }

    Ok(())
}

/// 验证邮箱格式（可选字段, 只做基本形状检查）
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationError("Invalid email format".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rfid() {
        assert!(validate_rfid("RFID1").is_ok());
        assert!(validate_rfid("04-A3-F2-1B").is_ok());
        assert!(validate_rfid("abc").is_err()); // 太短
        assert!(validate_rfid("card with spaces").is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("eco_fan_42").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_validate_pin() {
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("123456").is_ok());
        assert!(validate_pin("123").is_err()); // 太短
        assert!(validate_pin("1234567").is_err());
        assert!(validate_pin("12a4").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@campus.edu").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b").is_err());
    }
}
