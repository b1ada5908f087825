//! 测验编辑器
//!
//! 维护一份有序的题目草稿列表，支持增删、字段编辑、提交前校验
//! 与创建请求体的构造。题型用带标签的枚举表达，切换题型时整体
//! 重置形态，不存在"残留字段"。

use crate::error::{AppError, AppResult, ValidationError};
use crate::models::loaders::QuizDraftFile;
use crate::models::quiz::{
    blank_mcq_options, AnswerCreate, QuestionCreate, QuestionType, QuizCreate,
};
use std::collections::BTreeMap;

/// 题型形态：每种题型只携带自己需要的数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionShape {
    /// 选择题：选项键 → 选项文本
    Mcq { options: BTreeMap<String, String> },
    /// 判断题：答案只能是 "true" / "false"
    TrueFalse,
    /// 简答题：答案为任意非空文本
    Text,
}

impl QuestionShape {
    /// 当前形态对应的题目类型
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionShape::Mcq { .. } => QuestionType::Mcq,
            QuestionShape::TrueFalse => QuestionType::TrueFalse,
            QuestionShape::Text => QuestionType::Text,
        }
    }
}

/// 答案草稿
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerDraft {
    pub correct_answer: String,
    pub explanation: String,
}

/// 题目草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question_text: String,
    /// 1 起始的展示序号，删除后由编辑器统一重排
    pub order: u32,
    pub shape: QuestionShape,
    pub answer: AnswerDraft,
}

impl QuestionDraft {
    /// 默认草稿：空白选择题，选项 A-D
    fn blank_mcq(order: u32) -> Self {
        Self {
            question_text: String::new(),
            order,
            shape: QuestionShape::Mcq {
                options: blank_mcq_options(),
            },
            answer: AnswerDraft::default(),
        }
    }
}

/// 测验编辑器
#[derive(Debug, Clone)]
pub struct QuizEditor {
    pub title: String,
    pub description: String,
    pub is_active: bool,
    questions: Vec<QuestionDraft>,
}

impl Default for QuizEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEditor {
    /// 创建新编辑器，初始带一道空白选择题
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            is_active: true,
            questions: vec![QuestionDraft::blank_mcq(1)],
        }
    }

    /// 从 TOML 草稿文件构建编辑器
    ///
    /// 题目序号按文件中的出现顺序重新编号
    pub fn from_draft(draft: &QuizDraftFile) -> Self {
        let questions = draft
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let shape = match q.question_type {
                    QuestionType::Mcq => QuestionShape::Mcq {
                        options: q.options.clone().unwrap_or_else(blank_mcq_options),
                    },
                    QuestionType::TrueFalse => QuestionShape::TrueFalse,
                    QuestionType::Text => QuestionShape::Text,
                };
                QuestionDraft {
                    question_text: q.question_text.clone(),
                    order: (i + 1) as u32,
                    shape,
                    answer: AnswerDraft {
                        correct_answer: q.answer.correct_answer.clone(),
                        explanation: q.answer.explanation.clone().unwrap_or_default(),
                    },
                }
            })
            .collect();

        Self {
            title: draft.title.clone(),
            description: draft.description.clone().unwrap_or_default(),
            is_active: draft.is_active,
            questions,
        }
    }

    /// 当前题目草稿列表
    pub fn questions(&self) -> &[QuestionDraft] {
        &self.questions
    }

    /// 追加一道空白选择题，序号为当前长度 + 1
    pub fn add_question(&mut self) {
        let order = (self.questions.len() + 1) as u32;
        self.questions.push(QuestionDraft::blank_mcq(order));
    }

    /// 删除指定位置的题目，随后将剩余题目重排为连续的 1 起始序号
    ///
    /// 索引越界时不做任何事；允许删到 0 题，题目数量在提交时才校验
    pub fn remove_question(&mut self, index: usize) {
        if index >= self.questions.len() {
            return;
        }
        self.questions.remove(index);
        for (i, q) in self.questions.iter_mut().enumerate() {
            q.order = (i + 1) as u32;
        }
    }

    /// 按字段路径编辑题目
    ///
    /// # 参数
    /// - `index`: 题目位置（0 起始）
    /// - `field`: 字段路径，支持 `question_text`、`question_type`、
    ///   `answer.correct_answer`、`answer.explanation`、`options.<选项键>`
    /// - `value`: 新值
    pub fn update_question(&mut self, index: usize, field: &str, value: &str) -> AppResult<()> {
        let len = self.questions.len();
        let question = self.questions.get_mut(index).ok_or(AppError::Validation(
            ValidationError::IndexOutOfRange { index, len },
        ))?;

        if let Some(option_key) = field.strip_prefix("options.") {
            return match &mut question.shape {
                QuestionShape::Mcq { options } => {
                    options.insert(option_key.to_string(), value.to_string());
                    Ok(())
                }
                _ => Err(AppError::Validation(ValidationError::OptionsNotAvailable {
                    number: index + 1,
                })),
            };
        }

        if let Some(answer_field) = field.strip_prefix("answer.") {
            return match answer_field {
                "correct_answer" => {
                    question.answer.correct_answer = value.to_string();
                    Ok(())
                }
                "explanation" => {
                    question.answer.explanation = value.to_string();
                    Ok(())
                }
                _ => Err(AppError::Validation(ValidationError::UnknownField {
                    field: field.to_string(),
                })),
            };
        }

        match field {
            "question_text" => {
                question.question_text = value.to_string();
                Ok(())
            }
            "question_type" => {
                let question_type = QuestionType::parse(value).ok_or(AppError::Validation(
                    ValidationError::UnknownQuestionType {
                        value: value.to_string(),
                    },
                ))?;
                Self::switch_type(question, question_type);
                Ok(())
            }
            _ => Err(AppError::Validation(ValidationError::UnknownField {
                field: field.to_string(),
            })),
        }
    }

    /// 切换题型并重置形态
    ///
    /// - 切到选择题：重装空白 A-D 选项，清空正确答案
    /// - 切到判断题：去掉选项，正确答案默认为 "true"
    /// - 切到简答题：去掉选项，清空正确答案
    fn switch_type(question: &mut QuestionDraft, question_type: QuestionType) {
        match question_type {
            QuestionType::Mcq => {
                question.shape = QuestionShape::Mcq {
                    options: blank_mcq_options(),
                };
                question.answer.correct_answer.clear();
            }
            QuestionType::TrueFalse => {
                question.shape = QuestionShape::TrueFalse;
                question.answer.correct_answer = "true".to_string();
            }
            QuestionType::Text => {
                question.shape = QuestionShape::Text;
                question.answer.correct_answer.clear();
            }
        }
    }

    /// 提交前校验
    ///
    /// 按固定顺序检查，返回第一个不满足项：
    /// 标题 → 题目数量 → 逐题检查题干、正确答案、（选择题）选项
    pub fn validate_for_submit(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation(ValidationError::EmptyTitle));
        }

        if self.questions.is_empty() {
            return Err(AppError::Validation(ValidationError::NoQuestions));
        }

        for (i, question) in self.questions.iter().enumerate() {
            let number = i + 1;

            if question.question_text.trim().is_empty() {
                return Err(AppError::Validation(ValidationError::EmptyQuestionText {
                    number,
                }));
            }

            if question.answer.correct_answer.trim().is_empty() {
                return Err(AppError::Validation(ValidationError::EmptyCorrectAnswer {
                    number,
                }));
            }

            if let QuestionShape::Mcq { options } = &question.shape {
                if options.values().any(|text| text.trim().is_empty()) {
                    return Err(AppError::Validation(ValidationError::EmptyOption {
                        number,
                    }));
                }
            }
        }

        Ok(())
    }

    /// 构造创建测验的请求体
    ///
    /// 非选择题的 options 一律为 null；带标签的形态保证不会把
    /// 残留选项带进请求体
    pub fn build_payload(&self) -> QuizCreate {
        let questions = self
            .questions
            .iter()
            .map(|q| {
                let options = match &q.shape {
                    QuestionShape::Mcq { options } => Some(options.clone()),
                    QuestionShape::TrueFalse | QuestionShape::Text => None,
                };
                QuestionCreate {
                    question_type: q.shape.question_type(),
                    question_text: q.question_text.clone(),
                    options,
                    order: q.order,
                    answer: AnswerCreate {
                        correct_answer: q.answer.correct_answer.clone(),
                        explanation: if q.answer.explanation.trim().is_empty() {
                            None
                        } else {
                            Some(q.answer.explanation.clone())
                        },
                    },
                }
            })
            .collect();

        QuizCreate {
            title: self.title.clone(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            is_active: self.is_active,
            questions,
        }
    }
}
