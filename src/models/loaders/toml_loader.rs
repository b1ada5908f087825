use crate::models::quiz::QuestionType;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// TOML 草稿文件中的答案数据
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerDraftFile {
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// TOML 草稿文件中的题目数据
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraftFile {
    pub question_type: QuestionType,
    pub question_text: String,
    #[serde(default)]
    pub options: Option<BTreeMap<String, String>>,
    pub answer: AnswerDraftFile,
}

/// TOML 测验草稿文件
///
/// 题目顺序以文件中出现的顺序为准，order 字段由编辑器统一编号
#[derive(Debug, Clone, Deserialize)]
pub struct QuizDraftFile {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub questions: Vec<QuestionDraftFile>,
    #[serde(skip)]
    pub file_path: Option<String>,
}

fn default_is_active() -> bool {
    true
}

/// 从 TOML 文件加载数据并转换为 QuizDraftFile 对象
pub async fn load_toml_to_quiz_draft(toml_file_path: &Path) -> Result<QuizDraftFile> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let mut draft: QuizDraftFile = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    draft.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(draft)
}

/// 从文件夹中加载所有 TOML 文件并转换为 QuizDraftFile 对象列表
pub async fn load_all_toml_files(folder_path: &str) -> Result<Vec<QuizDraftFile>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut drafts = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_toml_to_quiz_draft(&path).await {
                Ok(draft) => {
                    tracing::info!("成功加载 {} 个题目", draft.questions.len());
                    drafts.push(draft);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(drafts)
}
