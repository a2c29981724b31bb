use crate::entities::{user_point_entity as user_points, user_entity as users};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "RFID1")]
    pub rfid: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "1234")]
    pub pin: String,
    #[schema(example = "Alice Tan")]
    pub name: String,
    #[schema(example = "S2024001")]
    pub student_id: String,
    #[schema(example = "alice@campus.edu")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "1234")]
    pub pin: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifySessionRequest {
    pub session_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogoutRequest {
    pub session_token: String,
}

/// 账户的对外投影。绝不包含 PIN 哈希与锁定计数字段，
/// 在数据访问边界一次性构造。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub rfid_id: String,
    pub username: String,
    pub name: String,
    pub student_id: String,
    pub email: Option<String>,
    pub total_points: i64,
    pub total_bottles: i64,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn new(user: users::Model, points: Option<user_points::Model>) -> Self {
        let (total_points, total_bottles) = points
            .map(|p| (p.total_points, p.total_bottles))
            .unwrap_or((0, 0));

        Self {
            id: user.id,
            rfid_id: user.rfid_id,
            username: user.username,
            name: user.name,
            student_id: user.student_id,
            email: user.email,
            total_points,
            total_bottles,
            last_login: user.last_login,
            created_at: user.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> users::Model {
        users::Model {
            id: 1,
            rfid_id: "RFID1".to_string(),
            username: "alice".to_string(),
            pin_hash: "$2b$12$secret-hash".to_string(),
            name: "Alice Tan".to_string(),
            student_id: "S2024001".to_string(),
            email: None,
            login_attempts: 2,
            account_locked: true,
            locked_until: Some(Utc::now()),
            last_login: None,
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn test_public_view_strips_secret_fields() {
        let view = UserResponse::new(sample_account(), None);
        let json = serde_json::to_value(&view).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("pin_hash"));
        assert!(!obj.contains_key("login_attempts"));
        assert!(!obj.contains_key("account_locked"));
        assert!(!obj.contains_key("locked_until"));
        assert_eq!(obj["rfid_id"], "RFID1");
    }

    #[test]
    fn test_public_view_totals_default_to_zero() {
        let view = UserResponse::new(sample_account(), None);
        assert_eq!(view.total_points, 0);
        assert_eq!(view.total_bottles, 0);
    }

    #[test]
    fn test_public_view_carries_point_totals() {
        let points = user_points::Model {
            rfid_id: "RFID1".to_string(),
            total_points: 50,
            total_bottles: 5,
            last_updated: None,
        };
        let view = UserResponse::new(sample_account(), Some(points));
        assert_eq!(view.total_points, 50);
        assert_eq!(view.total_bottles, 5);
    }
}
