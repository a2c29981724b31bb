use crate::config::AuthConfig;
use crate::entities::{
    login_attempt_entity as login_attempts, user_entity as users, user_point_entity as user_points,
    user_session_entity as user_sessions,
};
use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::utils::{
    generate_session_token, hash_pin, validate_email, validate_pin, validate_rfid,
    validate_username, verify_pin,
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    /// 注册新账户: 校验输入, 检查 RFID/用户名冲突,
    /// 同一事务内写入账户与清零的积分行。
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        validate_rfid(&request.rfid)?;
        validate_username(&request.username)?;
        validate_pin(&request.pin)?;
        if let Some(email) = &request.email {
            validate_email(email)?;
        }

        let existing_rfid = users::Entity::find()
            .filter(users::Column::RfidId.eq(&request.rfid))
            .one(&self.pool)
            .await?;
        if existing_rfid.is_some() {
            return Err(AppError::Conflict("RFID already registered".to_string()));
        }

        let existing_username = users::Entity::find()
            .filter(users::Column::Username.eq(&request.username))
            .one(&self.pool)
            .await?;
        if existing_username.is_some() {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let pin_hash = hash_pin(&request.pin)?;

        let txn = self.pool.begin().await?;

        let user = users::ActiveModel {
            rfid_id: Set(request.rfid.clone()),
            username: Set(request.username.clone()),
            pin_hash: Set(pin_hash),
            name: Set(request.name.clone()),
            student_id: Set(request.student_id.clone()),
            email: Set(request.email.clone()),
            login_attempts: Set(0),
            account_locked: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let points = user_points::ActiveModel {
            rfid_id: Set(request.rfid.clone()),
            total_points: Set(0),
            total_bottles: Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(UserResponse::new(user, Some(points)))
    }

    /// 登录
    ///
    /// 逻辑:
    /// 1. 按用户名查找账户, 不存在也记一条失败流水
    /// 2. 锁定中 (locked_until 未过) 直接拒绝, 不消耗尝试次数
    /// 3. bcrypt 校验 PIN
    /// 4. 失败: 原子自增失败计数, 达到阈值则锁定 30 分钟
    /// 5. 成功: 清零计数/解锁, 更新 last_login, 签发 24 小时会话
    pub async fn login(&self, request: LoginRequest, ip: Option<String>) -> AppResult<AuthResponse> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(&request.username))
            .one(&self.pool)
            .await?;

        let Some(user) = user else {
            // 用户名不存在: 只留流水, 对外统一报无效凭证
            self.record_attempt(&self.pool, None, ip, false).await?;
            return Err(AppError::InvalidCredentials);
        };

        if let Some(locked_until) = active_lock(user.account_locked, user.locked_until, Utc::now())
        {
            return Err(AppError::AccountLocked { locked_until });
        }

        if !verify_pin(&request.pin, &user.pin_hash)? {
            return self.handle_failed_pin(user, ip).await;
        }

        self.complete_login(user, ip).await
    }

    /// 按令牌验证会话, 过期视同不存在。有效期在创建时固定, 不滑动。
    pub async fn verify_session(&self, token: &str) -> AppResult<UserResponse> {
        let session = user_sessions::Entity::find()
            .filter(user_sessions::Column::SessionToken.eq(token))
            .filter(user_sessions::Column::ExpiresAt.gt(Utc::now()))
            .one(&self.pool)
            .await?
            .ok_or(AppError::InvalidSession)?;

        let user = users::Entity::find_by_id(session.user_id)
            .one(&self.pool)
            .await?
            .ok_or(AppError::InvalidSession)?;

        let points = user_points::Entity::find_by_id(user.rfid_id.clone())
            .one(&self.pool)
            .await?;

        Ok(UserResponse::new(user, points))
    }

    /// 注销: 无条件删除会话行, 幂等（行不存在不算错误）。
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        user_sessions::Entity::delete_many()
            .filter(user_sessions::Column::SessionToken.eq(token))
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    /// PIN 校验失败: 计数自增与阈值判断在同一事务内完成,
    /// 事务在返回业务错误之前提交（失败也必须落库）。
    async fn handle_failed_pin(
        &self,
        user: users::Model,
        ip: Option<String>,
    ) -> AppResult<AuthResponse> {
        let txn = self.pool.begin().await?;

        // 原子自增, 避免并发登录丢失计数
        users::Entity::update_many()
            .col_expr(
                users::Column::LoginAttempts,
                Expr::col(users::Column::LoginAttempts).add(1),
            )
            .filter(users::Column::Id.eq(user.id))
            .exec(&txn)
            .await?;

        let updated = users::Entity::find_by_id(user.id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::InternalError("Account vanished during login".to_string()))?;

        self.record_attempt(&txn, Some(user.id), ip, false).await?;

        if updated.login_attempts >= self.config.max_login_attempts {
            let locked_until = Utc::now() + Duration::minutes(self.config.lockout_minutes);
            let mut am = updated.into_active_model();
            am.account_locked = Set(true);
            am.locked_until = Set(Some(locked_until));
            am.update(&txn).await?;

            txn.commit().await?;
            return Err(AppError::AccountLocked { locked_until });
        }

        txn.commit().await?;
        Err(AppError::InvalidCredentials)
    }

    /// PIN 校验通过: 清零计数并签发会话。
    async fn complete_login(
        &self,
        user: users::Model,
        ip: Option<String>,
    ) -> AppResult<AuthResponse> {
        let now = Utc::now();
        let user_id = user.id;
        let rfid_id = user.rfid_id.clone();

        let txn = self.pool.begin().await?;

        let mut am = user.into_active_model();
        am.login_attempts = Set(0);
        am.account_locked = Set(false);
        am.locked_until = Set(None);
        am.last_login = Set(Some(now));
        let user = am.update(&txn).await?;

        self.record_attempt(&txn, Some(user_id), ip.clone(), true)
            .await?;

        let session_token = generate_session_token();
        let expires_at = now + Duration::hours(self.config.session_expires_hours);

        user_sessions::ActiveModel {
            user_id: Set(user_id),
            session_token: Set(session_token.clone()),
            expires_at: Set(expires_at),
            ip_address: Set(ip),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        let points = user_points::Entity::find_by_id(rfid_id).one(&self.pool).await?;

        Ok(AuthResponse {
            session_token,
            expires_at,
            user: UserResponse::new(user, points),
        })
    }

    async fn record_attempt<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Option<i64>,
        ip: Option<String>,
        success: bool,
    ) -> AppResult<()> {
        login_attempts::ActiveModel {
            user_id: Set(user_id),
            ip_address: Set(ip),
            success: Set(success),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(())
    }
}

/// 锁定仍然生效时返回解锁时间; 锁已过期或未锁定返回 None。
fn active_lock(
    account_locked: bool,
    locked_until: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if !account_locked {
        return None;
    }
    locked_until.filter(|until| *until > now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocked_account_has_no_active_lock() {
        assert_eq!(active_lock(false, None, Utc::now()), None);
        // 残留的 locked_until 在 flag 清掉后不再生效
        assert_eq!(
            active_lock(false, Some(Utc::now() + Duration::hours(1)), Utc::now()),
            None
        );
    }

    #[test]
    fn test_lock_active_until_deadline_passes() {
        let now = Utc::now();
        let until = now + Duration::minutes(30);
        assert_eq!(active_lock(true, Some(until), now), Some(until));

        // 到点之后视为已解锁
        assert_eq!(active_lock(true, Some(until), until + Duration::seconds(1)), None);
    }

    #[test]
    fn test_lock_flag_without_deadline_is_inert() {
        assert_eq!(active_lock(true, None, Utc::now()), None);
    }
}
