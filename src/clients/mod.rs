pub mod auth_client;
pub mod quiz_client;

pub use auth_client::AuthClient;
pub use quiz_client::QuizClient;

use crate::error::{ApiError, AppError, AppResult};

/// 检查响应状态，非 2xx 时提取服务端 detail 信息
pub(crate) async fn ensure_success(
    endpoint: &str,
    resp: reqwest::Response,
) -> AppResult<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let detail = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        });

    Err(AppError::api_bad_status(endpoint, status, detail))
}

pub(crate) fn decode_failed(err: reqwest::Error) -> AppError {
    AppError::Api(ApiError::JsonParseFailed {
        source: Box::new(err),
    })
}
