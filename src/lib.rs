//! # Quiz Client
//!
//! 测验平台的无头客户端：面向 REST 后端的类型化接口封装、
//! 出题编辑器与答题流程状态机
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 与后端 schema 逐字段对应的线上数据结构
//! - 公开视图在类型层面不携带答案字段
//! - `models/loaders` - TOML 测验草稿加载器
//!
//! ### ② 接口层（Clients）
//! - `clients/` - 认证与测验两个 API 客户端，路径与后端保持一致
//! - 不做自动重试，失败直接向上抛
//!
//! ### ③ 状态层（Stores / Editor / Workflow）
//! - `stores/` - 两个互相独立的持久化身份容器（管理员会话 / 用户邮箱）
//! - `editor/` - 出题编辑器（增删、字段编辑、校验、请求体构造）
//! - `workflow/` - 答题流程状态机与评分结果投影
//!
//! ### ④ 导航与编排层（Navigation / App）
//! - `navigation` - 路由解析与前置条件守卫
//! - `app` - 批量创建模式的编排入口

pub mod app;
pub mod clients;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod navigation;
pub mod stores;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{AuthClient, QuizClient};
pub use config::Config;
pub use editor::{QuestionShape, QuizEditor};
pub use error::{AppError, AppResult};
pub use models::{QuestionType, QuizCreate, QuizPublic, SubmissionResult};
pub use navigation::{resolve, NavContext, Resolution, Route};
pub use stores::{AuthStore, UserStore};
pub use workflow::{FlowPhase, TakeQuizFlow};
