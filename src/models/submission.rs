//! 答卷提交与评分结果的数据结构
//!
//! 评分完全由服务端完成，客户端只负责展示。

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 提交答卷的请求体
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub email: String,
    /// 题目ID → 用户答案
    pub answers: BTreeMap<String, String>,
}

/// 单题评分结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub question_text: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// 整卷评分结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub submission_id: String,
    pub quiz_id: String,
    pub quiz_title: String,
    pub user_email: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub submitted_at: NaiveDateTime,
    pub results: Vec<QuestionResult>,
}
