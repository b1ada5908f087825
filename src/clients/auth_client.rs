/// 认证 API 客户端
///
/// 封装管理员注册、登录与会话校验三个接口
use crate::clients::{decode_failed, ensure_success};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{AdminProfile, AdminRegistration, TokenResponse};
use tracing::debug;

/// 认证 API 客户端
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// 创建新的认证客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.api_base_url.clone(),
        }
    }

    /// 管理员注册
    ///
    /// # 参数
    /// - `email`: 管理员邮箱
    /// - `password`: 密码
    ///
    /// # 返回
    /// 返回注册成功的管理员信息
    pub async fn register_admin(&self, email: &str, password: &str) -> AppResult<AdminProfile> {
        let endpoint = format!("{}/api/auth/admin/register", self.base_url);
        let body = AdminRegistration {
            email: email.to_string(),
            password: password.to_string(),
        };

        let resp = self
            .http
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }

    /// 管理员登录
    ///
    /// 登录接口要求 form 编码的 username/password 字段
    ///
    /// # 返回
    /// 返回访问令牌
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse> {
        let endpoint = format!("{}/api/auth/admin/login", self.base_url);

        let resp = self
            .http
            .post(&endpoint)
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        let token: TokenResponse = resp.json().await.map_err(decode_failed)?;

        debug!("登录成功，令牌类型: {}", token.token_type);

        Ok(token)
    }

    /// 获取当前管理员信息（校验令牌是否仍然有效）
    pub async fn current_admin(&self, token: &str) -> AppResult<AdminProfile> {
        let endpoint = format!("{}/api/auth/admin/me", self.base_url);

        let resp = self
            .http
            .get(&endpoint)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }
}
