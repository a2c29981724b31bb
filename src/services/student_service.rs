use crate::entities::{user_entity as users, user_point_entity as user_points};
use crate::error::{AppError, AppResult};
use crate::models::UserResponse;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

#[derive(Clone)]
pub struct StudentService {
    pool: DatabaseConnection,
}

impl StudentService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 按 RFID 卡号查询学生（含积分汇总）
    pub async fn by_rfid(&self, rfid: &str) -> AppResult<UserResponse> {
        let user = users::Entity::find()
            .filter(users::Column::RfidId.eq(rfid))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        self.with_points(user).await
    }

    /// 按学号查询学生
    pub async fn by_student_id(&self, student_id: &str) -> AppResult<UserResponse> {
        let user = users::Entity::find()
            .filter(users::Column::StudentId.eq(student_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        self.with_points(user).await
    }

    async fn with_points(&self, user: users::Model) -> AppResult<UserResponse> {
        let points = user_points::Entity::find_by_id(user.rfid_id.clone())
            .one(&self.pool)
            .await?;
        Ok(UserResponse::new(user, points))
    }
}
