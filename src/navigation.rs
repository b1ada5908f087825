//! 路由与导航守卫
//!
//! 页面路径与前置条件的映射：管理页面要求已登录会话，答题页面
//! 要求已记录邮箱，结果页面要求导航时随手携带评分结果（后端没有
//! 按提交ID查询的接口）。前置条件不满足时静默重定向，不算错误。

/// 页面路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// 落地页（公开测验列表）
    Landing,
    /// 答题页
    Quiz(String),
    /// 结果页
    Results(String),
    /// 管理员登录页
    AdminLogin,
    /// 管理员仪表盘
    AdminDashboard,
    /// 创建测验页
    AdminQuizCreate,
}

impl Route {
    /// 从路径解析路由
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Route::Landing);
        }

        match path {
            "/admin/login" => return Some(Route::AdminLogin),
            "/admin/dashboard" => return Some(Route::AdminDashboard),
            "/admin/quiz/create" => return Some(Route::AdminQuizCreate),
            _ => {}
        }

        if let Some(id) = path.strip_prefix("/quiz/") {
            if !id.is_empty() && !id.contains('/') {
                return Some(Route::Quiz(id.to_string()));
            }
        }

        if let Some(id) = path.strip_prefix("/results/") {
            if !id.is_empty() && !id.contains('/') {
                return Some(Route::Results(id.to_string()));
            }
        }

        None
    }

    /// 路由对应的路径
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Quiz(id) => format!("/quiz/{}", id),
            Route::Results(id) => format!("/results/{}", id),
            Route::AdminLogin => "/admin/login".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::AdminQuizCreate => "/admin/quiz/create".to_string(),
        }
    }
}

/// 守卫判定所需的会话快照
#[derive(Debug, Clone, Copy, Default)]
pub struct NavContext<'a> {
    /// 管理员会话是否有效
    pub authenticated: bool,
    /// 已记录的用户邮箱
    pub user_email: Option<&'a str>,
    /// 导航状态中是否携带了评分结果
    pub has_result: bool,
}

/// 守卫判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 放行
    Allow,
    /// 静默重定向到指定路由
    Redirect(Route),
}

/// 判定路由是否放行
///
/// 必须在发起任何网络请求之前调用
pub fn resolve(route: &Route, ctx: &NavContext) -> Resolution {
    match route {
        Route::Landing | Route::AdminLogin => Resolution::Allow,
        Route::Quiz(_) => {
            if ctx.user_email.is_some() {
                Resolution::Allow
            } else {
                Resolution::Redirect(Route::Landing)
            }
        }
        Route::Results(_) => {
            if ctx.has_result {
                Resolution::Allow
            } else {
                Resolution::Redirect(Route::Landing)
            }
        }
        Route::AdminDashboard | Route::AdminQuizCreate => {
            if ctx.authenticated {
                Resolution::Allow
            } else {
                Resolution::Redirect(Route::AdminLogin)
            }
        }
    }
}
