/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端 API 地址
    pub api_base_url: String,
    /// 测验草稿 TOML 文件存放目录
    pub draft_folder: String,
    /// 本地状态文件存放目录（管理员会话 / 用户邮箱）
    pub state_dir: String,
    /// 管理员登录邮箱
    pub admin_email: String,
    /// 管理员登录密码
    pub admin_password: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            draft_folder: "quiz_drafts".to_string(),
            state_dir: ".quiz_client".to_string(),
            admin_email: String::new(),
            admin_password: String::new(),
            request_timeout_secs: 30,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("QUIZ_API_BASE_URL").unwrap_or(default.api_base_url),
            draft_folder: std::env::var("QUIZ_DRAFT_FOLDER").unwrap_or(default.draft_folder),
            state_dir: std::env::var("QUIZ_STATE_DIR").unwrap_or(default.state_dir),
            admin_email: std::env::var("QUIZ_ADMIN_EMAIL").unwrap_or(default.admin_email),
            admin_password: std::env::var("QUIZ_ADMIN_PASSWORD").unwrap_or(default.admin_password),
            request_timeout_secs: std::env::var("QUIZ_REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
