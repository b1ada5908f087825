//! 答题流程 - 流程层
//!
//! 管理一次答题的完整状态机：
//!
//! 加载中 → 就绪（作答） → 提交中 → 已提交
//!
//! 拉取失败进入终态 Failed，提交失败退回就绪态并保留已填答案。
//! 每次拉取携带代数计数，过期响应直接丢弃，避免把旧结果写进
//! 已经翻篇的状态。

use crate::clients::QuizClient;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{QuizPublic, SubmissionRequest, SubmissionResult};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// 答题流程所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// 正在拉取测验定义
    Loading,
    /// 测验就绪，可作答
    Ready,
    /// 正在提交答卷
    Submitting,
    /// 已提交（终态）
    Submitted,
    /// 拉取失败（终态，恢复手段是重新开一个流程）
    Failed,
}

/// 一次答题的流程状态机
pub struct TakeQuizFlow {
    quiz_id: String,
    user_email: String,
    phase: FlowPhase,
    /// 拉取代数，apply_loaded 只接受当前代的响应
    generation: u64,
    quiz: Option<QuizPublic>,
    /// 题目ID → 已填答案
    answers: BTreeMap<String, String>,
    last_error: Option<String>,
}

impl TakeQuizFlow {
    /// 创建新的答题流程
    ///
    /// 前置条件（是否已记录用户邮箱）由导航层把关，这里假定
    /// email 一定存在
    pub fn new(quiz_id: impl Into<String>, user_email: impl Into<String>) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            user_email: user_email.into(),
            phase: FlowPhase::Loading,
            generation: 0,
            quiz: None,
            answers: BTreeMap::new(),
            last_error: None,
        }
    }

    /// 开始一次拉取，返回本次拉取的代数
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FlowPhase::Loading;
        self.generation
    }

    /// 应用拉取结果
    ///
    /// # 返回
    /// 响应代数已过期时返回 false（结果被丢弃），否则返回 true
    pub fn apply_loaded(&mut self, generation: u64, outcome: AppResult<QuizPublic>) -> bool {
        if generation != self.generation {
            warn!("丢弃过期的拉取响应 (代数 {} ≠ {})", generation, self.generation);
            return false;
        }

        match outcome {
            Ok(quiz) => {
                info!("✓ 测验就绪: {} (共 {} 题)", quiz.title, quiz.questions.len());
                self.quiz = Some(quiz);
                self.phase = FlowPhase::Ready;
            }
            Err(e) => {
                warn!("⚠️ 拉取测验失败: {}", e);
                self.last_error = Some(e.to_string());
                self.phase = FlowPhase::Failed;
            }
        }
        true
    }

    /// 拉取公开测验定义
    pub async fn load(&mut self, client: &QuizClient) -> AppResult<()> {
        let generation = self.begin_load();
        let outcome = client.get_public_quiz(&self.quiz_id).await;
        self.apply_loaded(generation, outcome);
        Ok(())
    }

    /// 记录一道题的答案（同题覆盖旧值）
    ///
    /// 答案内容不做题型校验，真正的校验在服务端
    pub fn record_answer(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(question_id.into(), value.into());
    }

    /// 已作答题数
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// 总题数
    pub fn total_questions(&self) -> usize {
        self.quiz.as_ref().map_or(0, |q| q.questions.len())
    }

    /// 完成比例（0.0 - 1.0）
    pub fn progress(&self) -> f64 {
        let total = self.total_questions();
        if total == 0 {
            return 0.0;
        }
        self.answered_count() as f64 / total as f64
    }

    /// 是否已答完所有题目
    pub fn is_complete(&self) -> bool {
        let total = self.total_questions();
        total > 0 && self.answered_count() >= total
    }

    /// 当前是否允许提交
    pub fn can_submit(&self) -> bool {
        self.phase == FlowPhase::Ready && self.is_complete()
    }

    /// 提交答卷
    ///
    /// 未答完时直接返回校验错误，不发起网络请求；
    /// 提交失败退回就绪态，答案保留，可重新触发提交
    pub async fn submit(&mut self, client: &QuizClient) -> AppResult<SubmissionResult> {
        if !self.is_complete() {
            return Err(AppError::Validation(ValidationError::IncompleteAnswers {
                answered: self.answered_count(),
                total: self.total_questions(),
            }));
        }

        self.phase = FlowPhase::Submitting;

        let request = SubmissionRequest {
            email: self.user_email.clone(),
            answers: self.answers.clone(),
        };

        match client.submit_quiz(&self.quiz_id, &request).await {
            Ok(result) => {
                info!(
                    "✓ 答卷提交成功: {}/{} ({:.1}%)",
                    result.score, result.total_questions, result.percentage
                );
                self.phase = FlowPhase::Submitted;
                Ok(result)
            }
            Err(e) => {
                warn!("⚠️ 答卷提交失败: {}", e);
                self.last_error = Some(e.to_string());
                self.phase = FlowPhase::Ready;
                Err(e)
            }
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// 已加载的测验定义
    pub fn quiz(&self) -> Option<&QuizPublic> {
        self.quiz.as_ref()
    }

    /// 最近一次错误信息
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
