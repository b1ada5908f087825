use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// 校验邮箱格式
///
/// 与入口页表单使用同一条宽松规则：非空本地部分 @ 非空域名 . 非空后缀
pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("邮箱正则表达式无效"));
    re.is_match(email)
}
