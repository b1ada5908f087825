//! 身份相关的数据结构

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 管理员信息
#[derive(Debug, Clone, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// 登录成功后返回的令牌
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// 管理员注册请求体
#[derive(Debug, Clone, Serialize)]
pub struct AdminRegistration {
    pub email: String,
    pub password: String,
}

/// 匿名用户邮箱注册请求体
#[derive(Debug, Clone, Serialize)]
pub struct UserRegistration {
    pub email: String,
}

/// 匿名用户信息
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}
