/// 测验 API 客户端
///
/// 封装测验的管理端 CRUD、公开端查询与答卷提交接口，
/// 路径与后端保持逐字一致
use crate::clients::{decode_failed, ensure_success};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{
    QuizCreate, QuizListItem, QuizPublic, QuizResponse, QuizUpdate, SubmissionRequest,
    SubmissionResult, UserProfile, UserRegistration,
};
use tracing::debug;

/// 测验 API 客户端
pub struct QuizClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuizClient {
    /// 创建新的测验客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.api_base_url.clone(),
        }
    }

    // ========== 匿名用户 ==========

    /// 注册用户邮箱（无需认证）
    pub async fn register_user_email(&self, email: &str) -> AppResult<UserProfile> {
        let endpoint = format!("{}/api/users/register", self.base_url);
        let body = UserRegistration {
            email: email.to_string(),
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

    // ========== 管理端（需要令牌） ==========

    /// 创建测验
    pub async fn create_quiz(&self, token: &str, quiz: &QuizCreate) -> AppResult<QuizResponse> {
        let endpoint = format!("{}/api/quizzes", self.base_url);

        debug!("创建测验 Payload: {}", serde_json::to_string(quiz)?);

        let resp = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .json(quiz)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }

    /// 分页获取管理端测验列表
    pub async fn list_quizzes(
        &self,
        token: &str,
        skip: u32,
        limit: u32,
    ) -> AppResult<Vec<QuizListItem>> {
        let endpoint = format!("{}/api/quizzes", self.base_url);

        let resp = self
            .http
            .get(&endpoint)
            .bearer_auth(token)
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }

    /// 获取单个测验详情（携带答案）
    pub async fn get_quiz(&self, token: &str, quiz_id: &str) -> AppResult<QuizResponse> {
        let endpoint = format!("{}/api/quizzes/{}", self.base_url, quiz_id);

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

    /// 更新测验元信息
    pub async fn update_quiz(
        &self,
        token: &str,
        quiz_id: &str,
        update: &QuizUpdate,
    ) -> AppResult<QuizResponse> {
        let endpoint = format!("{}/api/quizzes/{}", self.base_url, quiz_id);

        let resp = self
            .http
            .put(&endpoint)
            .bearer_auth(token)
            .json(update)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }

    /// 删除测验
    pub async fn delete_quiz(&self, token: &str, quiz_id: &str) -> AppResult<()> {
        let endpoint = format!("{}/api/quizzes/{}", self.base_url, quiz_id);

        let resp = self
            .http
            .delete(&endpoint)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        ensure_success(&endpoint, resp).await?;
        Ok(())
    }

    // ========== 公开端（无需认证） ==========

    /// 分页获取公开测验列表（只含已激活的测验）
    pub async fn list_public_quizzes(&self, skip: u32, limit: u32) -> AppResult<Vec<QuizListItem>> {
        let endpoint = format!("{}/api/public/quizzes", self.base_url);

        let resp = self
            .http
            .get(&endpoint)
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }

    /// 获取公开测验详情（服务端不会返回答案字段）
    pub async fn get_public_quiz(&self, quiz_id: &str) -> AppResult<QuizPublic> {
        let endpoint = format!("{}/api/public/quizzes/{}", self.base_url, quiz_id);

        let resp = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }

    /// 提交答卷并获取评分结果
    pub async fn submit_quiz(
        &self,
        quiz_id: &str,
        submission: &SubmissionRequest,
    ) -> AppResult<SubmissionResult> {
        let endpoint = format!("{}/api/public/quizzes/{}/submit", self.base_url, quiz_id);

        debug!("提交答卷 Payload: {}", serde_json::to_string(submission)?);

        let resp = self
            .http
            .post(&endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let resp = ensure_success(&endpoint, resp).await?;
        resp.json().await.map_err(decode_failed)
    }
}
