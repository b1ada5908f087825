//! 键值持久化层
//!
//! 浏览器 localStorage 的文件版替身：一个 JSON 文件对应一个存储容器。
//! 写入顺序固定为"先落盘、后改内存"，落盘失败时内存保持原值。

use crate::error::{AppError, AppResult, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 文件级键值存储
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl KvStore {
    /// 打开一个存储文件，文件不存在时以空内容开始
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let map: BTreeMap<String, String> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                AppError::Storage(StorageError::ReadFailed {
                    path: path.display().to_string(),
                    source: Box::new(e),
                })
            })?;
            serde_json::from_str(&content).map_err(|e| {
                AppError::Storage(StorageError::ParseFailed {
                    path: path.display().to_string(),
                    source: Box::new(e),
                })
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, map })
    }

    /// 读取一个键
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// 写入一个键（先持久化，成功后再更新内存）
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut next = self.map.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        self.map = next;
        Ok(())
    }

    /// 删除一个键
    pub fn remove(&mut self, key: &str) -> AppResult<()> {
        if !self.map.contains_key(key) {
            return Ok(());
        }
        let mut next = self.map.clone();
        next.remove(key);
        self.persist(&next)?;
        self.map = next;
        Ok(())
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::storage_write_failed(parent.display().to_string(), e))?;
            }
        }

        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)
            .map_err(|e| AppError::storage_write_failed(self.path.display().to_string(), e))
    }
}
