use crate::clients::{AuthClient, QuizClient};
use crate::config::Config;
use crate::editor::QuizEditor;
use crate::error::{AppError, AuthError};
use crate::models::loaders::{load_all_toml_files, QuizDraftFile};
use crate::utils::logging::{init_log_file, log_drafts_loaded, log_startup, print_final_stats, truncate_text};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::stores::AuthStore;

/// 应用主结构
///
/// 批量创建模式：扫描草稿目录，逐个校验并提交到后端
pub struct App {
    config: Config,
    auth_client: AuthClient,
    quiz_client: QuizClient,
    auth_store: AuthStore,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config.api_base_url);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let auth_client = AuthClient::new(&config, http.clone());
        let quiz_client = QuizClient::new(&config, http);

        // 打开会话存储并复验历史令牌
        let state_dir = PathBuf::from(&config.state_dir);
        let mut auth_store = AuthStore::open(state_dir.join("admin_session.json"))?;
        auth_store.initialize(&auth_client).await?;

        Ok(Self {
            config,
            auth_client,
            quiz_client,
            auth_store,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<()> {
        self.ensure_session().await?;

        // 加载所有待创建的测验草稿
        info!("\n📁 正在扫描待创建的测验草稿...");
        let drafts = load_all_toml_files(&self.config.draft_folder).await?;

        if drafts.is_empty() {
            warn!("⚠️ 没有找到待创建的TOML草稿，程序结束");
            return Ok(());
        }

        let total = drafts.len();
        log_drafts_loaded(total);

        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (idx, draft) in drafts.iter().enumerate() {
            match self.process_draft(draft, idx + 1).await {
                Ok(true) => stats.success += 1,
                Ok(false) => stats.failed += 1,
                Err(e) => {
                    error!("[草稿 {}] ❌ 处理过程中发生错误: {}", idx + 1, e);
                    stats.failed += 1;
                }
            }
        }

        // 回显仪表盘视角的测验列表
        self.log_dashboard().await;

        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(())
    }

    /// 确保存在有效的管理员会话
    ///
    /// 复验失败且配置了登录凭据时自动登录，否则报错退出
    async fn ensure_session(&mut self) -> Result<()> {
        if self.auth_store.is_authenticated() {
            return Ok(());
        }

        if self.config.admin_email.is_empty() {
            return Err(AppError::Auth(AuthError::SessionRequired).into());
        }

        info!("🔑 正在登录管理员账号: {}", self.config.admin_email);
        let email = self.config.admin_email.clone();
        let password = self.config.admin_password.clone();
        self.auth_store
            .login(&self.auth_client, &email, &password)
            .await?;
        info!("✓ 登录成功");

        Ok(())
    }

    /// 处理单个草稿：装入编辑器 → 校验 → 构造请求体 → 创建
    async fn process_draft(&self, draft: &QuizDraftFile, index: usize) -> Result<bool> {
        info!(
            "[草稿 {}] 标题: {}",
            index,
            truncate_text(&draft.title, 80)
        );

        let editor = QuizEditor::from_draft(draft);

        if let Err(e) = editor.validate_for_submit() {
            warn!("[草稿 {}] ⚠️ 校验未通过: {}", index, e);
            return Ok(false);
        }

        let payload = editor.build_payload();

        let Some(token) = self.auth_store.token() else {
            return Err(AppError::Auth(AuthError::SessionRequired).into());
        };

        info!(
            "[草稿 {}] 📤 正在创建测验 (共 {} 题)...",
            index,
            payload.questions.len()
        );

        match self.quiz_client.create_quiz(token, &payload).await {
            Ok(quiz) => {
                info!("[草稿 {}] ✓ 创建成功: {}", index, quiz.id);
                Ok(true)
            }
            Err(e) => {
                warn!("[草稿 {}] ⚠️ 创建失败: {}", index, e);
                Ok(false)
            }
        }
    }

    /// 回显管理端测验列表
    async fn log_dashboard(&self) {
        let Some(token) = self.auth_store.token() else {
            return;
        };

        match self.quiz_client.list_quizzes(token, 0, 100).await {
            Ok(quizzes) => {
                info!("\n📋 当前共有 {} 个测验:", quizzes.len());
                for quiz in quizzes {
                    let state = if quiz.is_active { "已激活" } else { "未激活" };
                    info!(
                        "  - {} ({} 题, {})",
                        truncate_text(&quiz.title, 60),
                        quiz.question_count,
                        state
                    );
                }
            }
            Err(e) => {
                warn!("⚠️ 获取测验列表失败: {}", e);
            }
        }
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}
