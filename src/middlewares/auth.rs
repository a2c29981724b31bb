use crate::error::AppError;
use crate::models::UserResponse;
use crate::services::AuthService;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

/// 通过会话验证的请求身份。
///
/// 需要身份的 handler 把它声明为参数, 提取时解析 Bearer 令牌并查会话表;
/// 身份是显式传入的值, 不挂在请求扩展上。
pub struct AuthContext {
    pub user: UserResponse,
}

/// 提取 Authorization 头中的 Bearer 令牌
fn bearer_token(req: &HttpRequest) -> Option<String> {
    let auth_header = req.headers().get("Authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ").map(|t| t.to_string())
}

impl FromRequest for AuthContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let auth_service = req.app_data::<web::Data<AuthService>>().cloned();

        Box::pin(async move {
            let auth_service = auth_service.ok_or_else(|| {
                actix_web::Error::from(AppError::InternalError(
                    "AuthService not configured".to_string(),
                ))
            })?;
            let token = token.ok_or_else(|| actix_web::Error::from(AppError::InvalidSession))?;
            let user = auth_service.verify_session(&token).await?;
            Ok(AuthContext { user })
        })
    }
}
