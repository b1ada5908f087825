//! 匿名用户邮箱存储
//!
//! 邮箱只用于标记答卷归属和放行答题入口，不对应任何账号体系。

use crate::error::{AppError, AppResult, ValidationError};
use crate::stores::kv_store::KvStore;
use crate::utils::validation::is_valid_email;
use std::path::Path;

const USER_EMAIL_KEY: &str = "user_email";

/// 匿名用户邮箱存储
pub struct UserStore {
    kv: KvStore,
    email: Option<String>,
}

impl UserStore {
    /// 打开邮箱存储文件并读取历史邮箱
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let kv = KvStore::open(path)?;
        let email = kv.get(USER_EMAIL_KEY).map(str::to_string);
        Ok(Self { kv, email })
    }

    /// 保存邮箱（先持久化，成功后再更新内存）
    pub fn save(&mut self, email: &str) -> AppResult<()> {
        if !is_valid_email(email) {
            return Err(AppError::Validation(ValidationError::InvalidEmail {
                email: email.to_string(),
            }));
        }

        self.kv.set(USER_EMAIL_KEY, email)?;
        self.email = Some(email.to_string());
        Ok(())
    }

    /// 清除邮箱（持久化与内存一起清）
    pub fn clear(&mut self) -> AppResult<()> {
        self.kv.remove(USER_EMAIL_KEY)?;
        self.email = None;
        Ok(())
    }

    /// 当前邮箱
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// 是否已记录邮箱
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }
}
