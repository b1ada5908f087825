//! 测验相关的数据结构
//!
//! 与后端 schema 保持一致：管理端视图携带答案，公开视图在类型层面
//! 就不存在答案字段，保证答案永远不会出现在答题端。

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    /// 选择题
    #[serde(rename = "mcq")]
    Mcq,
    /// 判断题
    #[serde(rename = "true_false")]
    TrueFalse,
    /// 简答题
    #[serde(rename = "text")]
    Text,
}

impl QuestionType {
    /// 从界面字符串解析题目类型
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mcq" => Some(QuestionType::Mcq),
            "true_false" => Some(QuestionType::TrueFalse),
            "text" => Some(QuestionType::Text),
            _ => None,
        }
    }
}

/// 创建题目时的答案数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCreate {
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// 创建测验时的题目数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCreate {
    pub question_type: QuestionType,
    pub question_text: String,
    /// 选择题的选项映射（如 {"A": "...", "B": "..."}），非选择题必须为 null
    pub options: Option<BTreeMap<String, String>>,
    pub order: u32,
    pub answer: AnswerCreate,
}

/// 创建测验的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub questions: Vec<QuestionCreate>,
}

/// 更新测验的请求体（只更新元信息，不动题目）
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// 答案数据（管理端视图）
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    pub id: String,
    pub question_id: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// 题目数据（管理端视图，携带答案）
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub quiz_id: String,
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Option<BTreeMap<String, String>>,
    pub order: u32,
    pub answer: Option<AnswerResponse>,
}

/// 测验数据（管理端视图）
#[derive(Debug, Clone, Deserialize)]
pub struct QuizResponse {
    pub id: String,
    pub admin_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub questions: Vec<QuestionResponse>,
}

/// 测验列表项（摘要）
#[derive(Debug, Clone, Deserialize)]
pub struct QuizListItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub question_count: u32,
}

/// 题目数据（公开视图，没有答案字段）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPublic {
    pub id: String,
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Option<BTreeMap<String, String>>,
    pub order: u32,
}

/// 测验数据（公开视图，用于答题）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPublic {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub questions: Vec<QuestionPublic>,
}

/// 构造一套空白的 A-D 选项
pub fn blank_mcq_options() -> BTreeMap<String, String> {
    ["A", "B", "C", "D"]
        .iter()
        .map(|k| (k.to_string(), String::new()))
        .collect()
}
