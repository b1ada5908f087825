//! 管理员会话存储
//!
//! 令牌落盘在独立的状态文件中，进程启动时尝试复验；
//! 复验失败一律静默丢弃令牌，不向上层抛错。

use crate::clients::AuthClient;
use crate::error::{AppError, AppResult};
use crate::models::AdminProfile;
use crate::stores::kv_store::KvStore;
use std::path::Path;
use tracing::{debug, info};

const ADMIN_TOKEN_KEY: &str = "admin_token";

/// 管理员会话存储
pub struct AuthStore {
    kv: KvStore,
    admin: Option<AdminProfile>,
}

impl AuthStore {
    /// 打开会话存储文件
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self {
            kv: KvStore::open(path)?,
            admin: None,
        })
    }

    /// 初始化会话：存在历史令牌时向服务端复验
    ///
    /// 复验失败（令牌过期或网络不可达，不作区分）时静默清除令牌，
    /// 视为未登录状态
    pub async fn initialize(&mut self, client: &AuthClient) -> AppResult<()> {
        let Some(token) = self.kv.get(ADMIN_TOKEN_KEY).map(str::to_string) else {
            return Ok(());
        };

        let outcome = client.current_admin(&token).await;
        self.apply_revalidation(outcome)
    }

    /// 应用复验结果
    ///
    /// 拆出来是为了能在没有服务端的情况下测试复验语义
    pub fn apply_revalidation(&mut self, outcome: AppResult<AdminProfile>) -> AppResult<()> {
        match outcome {
            Ok(profile) => {
                info!("✓ 会话复验成功: {}", profile.email);
                self.admin = Some(profile);
                Ok(())
            }
            Err(e) => {
                debug!("会话复验失败，丢弃历史令牌: {}", e);
                self.kv.remove(ADMIN_TOKEN_KEY)?;
                self.admin = None;
                Ok(())
            }
        }
    }

    /// 管理员登录
    ///
    /// 任何一步失败都返回 AuthError（携带服务端 detail 或兜底信息），
    /// 且不改动已有会话状态
    pub async fn login(
        &mut self,
        client: &AuthClient,
        email: &str,
        password: &str,
    ) -> AppResult<()> {
        let token = client
            .login(email, password)
            .await
            .map_err(|e| AppError::login_failed(e.server_detail().map(str::to_string)))?;

        // 先确认令牌可用，再落盘，避免失败时留下半截状态
        let profile = client
            .current_admin(&token.access_token)
            .await
            .map_err(|e| AppError::login_failed(e.server_detail().map(str::to_string)))?;

        self.kv.set(ADMIN_TOKEN_KEY, &token.access_token)?;
        self.admin = Some(profile);

        Ok(())
    }

    /// 登出：无条件清除令牌与管理员信息
    pub fn logout(&mut self) -> AppResult<()> {
        self.kv.remove(ADMIN_TOKEN_KEY)?;
        self.admin = None;
        Ok(())
    }

    /// 当前是否为已登录状态
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    /// 当前管理员信息
    pub fn admin(&self) -> Option<&AdminProfile> {
        self.admin.as_ref()
    }

    /// 当前令牌（仅在已登录时有意义）
    pub fn token(&self) -> Option<&str> {
        self.kv.get(ADMIN_TOKEN_KEY)
    }
}
