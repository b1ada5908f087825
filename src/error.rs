use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 提交前校验错误（本地检查，未发起任何网络请求）
    Validation(ValidationError),
    /// 登录 / 会话错误
    Auth(AuthError),
    /// API 调用错误
    Api(ApiError),
    /// 本地状态存储错误
    Storage(StorageError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Auth(e) => write!(f, "认证错误: {}", e),
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Storage(e) => write!(f, "存储错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Auth(e) => Some(e),
            AppError::Api(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 提交前校验错误
///
/// 校验按固定顺序进行，只返回第一个不满足的项
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// 测验标题为空
    EmptyTitle,
    /// 测验没有任何题目
    NoQuestions,
    /// 题干为空
    EmptyQuestionText { number: usize },
    /// 正确答案为空
    EmptyCorrectAnswer { number: usize },
    /// 选择题存在空白选项
    EmptyOption { number: usize },
    /// 题目索引超出范围
    IndexOutOfRange { index: usize, len: usize },
    /// 未知的字段路径
    UnknownField { field: String },
    /// 未知的题目类型
    UnknownQuestionType { value: String },
    /// 非选择题不能编辑选项
    OptionsNotAvailable { number: usize },
    /// 答题未完成，不允许提交
    IncompleteAnswers { answered: usize, total: usize },
    /// 邮箱格式不合法
    InvalidEmail { email: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "测验标题不能为空"),
            ValidationError::NoQuestions => write!(f, "至少需要一道题目"),
            ValidationError::EmptyQuestionText { number } => {
                write!(f, "第 {} 题: 题干不能为空", number)
            }
            ValidationError::EmptyCorrectAnswer { number } => {
                write!(f, "第 {} 题: 正确答案不能为空", number)
            }
            ValidationError::EmptyOption { number } => {
                write!(f, "第 {} 题: 选择题所有选项都必须填写", number)
            }
            ValidationError::IndexOutOfRange { index, len } => {
                write!(f, "题目索引 {} 超出范围 (共 {} 题)", index, len)
            }
            ValidationError::UnknownField { field } => {
                write!(f, "未知的字段路径: {}", field)
            }
            ValidationError::UnknownQuestionType { value } => {
                write!(f, "未知的题目类型: {}", value)
            }
            ValidationError::OptionsNotAvailable { number } => {
                write!(f, "第 {} 题: 当前题型没有选项可编辑", number)
            }
            ValidationError::IncompleteAnswers { answered, total } => {
                write!(f, "请先回答所有题目 ({}/{})", answered, total)
            }
            ValidationError::InvalidEmail { email } => {
                write!(f, "邮箱格式不合法: {}", email)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 登录 / 会话错误
#[derive(Debug)]
pub enum AuthError {
    /// 登录失败（携带服务端 detail 或兜底信息）
    LoginFailed { detail: String },
    /// 操作需要已登录的管理员会话
    SessionRequired,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::LoginFailed { detail } => write!(f, "登录失败: {}", detail),
            AuthError::SessionRequired => write!(f, "该操作需要管理员登录"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回非 2xx 状态
    BadStatus {
        endpoint: String,
        status: u16,
        detail: Option<String>,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadStatus {
                endpoint,
                status,
                detail,
            } => {
                write!(
                    f,
                    "API返回错误响应 ({}): status={}, detail={:?}",
                    endpoint, status, detail
                )
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 本地状态存储错误
#[derive(Debug)]
pub enum StorageError {
    /// 读取状态文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入状态文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 状态文件解析失败
    ParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed { path, source } => {
                write!(f, "读取状态文件失败 ({}): {}", path, source)
            }
            StorageError::WriteFailed { path, source } => {
                write!(f, "写入状态文件失败 ({}): {}", path, source)
            }
            StorageError::ParseFailed { path, source } => {
                write!(f, "状态文件解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::ReadFailed { source, .. }
            | StorageError::WriteFailed { source, .. }
            | StorageError::ParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(StorageError::ReadFailed {
            path: String::new(), // IO错误通常不携带路径信息
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建API错误响应错误
    pub fn api_bad_status(
        endpoint: impl Into<String>,
        status: u16,
        detail: Option<String>,
    ) -> Self {
        AppError::Api(ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
            detail,
        })
    }

    /// 创建状态文件写入错误
    pub fn storage_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建登录失败错误
    ///
    /// 优先使用服务端返回的 detail，没有则使用兜底信息
    pub fn login_failed(detail: Option<String>) -> Self {
        AppError::Auth(AuthError::LoginFailed {
            detail: detail.unwrap_or_else(|| "登录失败".to_string()),
        })
    }

    /// 提取 API 错误响应中的服务端 detail 信息
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            AppError::Api(ApiError::BadStatus { detail, .. }) => detail.as_deref(),
            _ => None,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
