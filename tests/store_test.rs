use quiz_client::error::{AppError, AppResult, ValidationError};
use quiz_client::models::AdminProfile;
use quiz_client::stores::{AuthStore, KvStore, UserStore};
use std::path::PathBuf;

/// 每个测试用独立的临时状态文件，避免互相干扰
fn temp_state_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quiz_client_state_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("创建临时目录失败");
    let path = dir.join(format!("{}.json", name));
    std::fs::remove_file(&path).ok();
    path
}

fn sample_profile() -> AdminProfile {
    AdminProfile {
        id: "admin-1".to_string(),
        email: "admin@example.com".to_string(),
        created_at: chrono::NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
    }
}

fn rejected() -> AppResult<AdminProfile> {
    Err(AppError::api_bad_status(
        "/api/auth/admin/me",
        401,
        Some("Could not validate credentials".to_string()),
    ))
}

#[test]
fn test_kv_store_survives_reopen() {
    let path = temp_state_file("kv_reopen");

    {
        let mut kv = KvStore::open(&path).expect("打开存储失败");
        assert!(kv.get("some_key").is_none());
        kv.set("some_key", "some_value").expect("写入失败");
    }

    let kv = KvStore::open(&path).expect("重新打开存储失败");
    assert_eq!(kv.get("some_key"), Some("some_value"));
}

#[test]
fn test_kv_store_remove_is_idempotent() {
    let path = temp_state_file("kv_remove");

    let mut kv = KvStore::open(&path).expect("打开存储失败");
    kv.set("k", "v").expect("写入失败");
    kv.remove("k").expect("删除失败");
    kv.remove("k").expect("重复删除应该是 no-op");
    assert!(kv.get("k").is_none());
}

#[test]
fn test_user_store_save_and_clear() {
    let path = temp_state_file("user_email");

    {
        let mut store = UserStore::open(&path).expect("打开存储失败");
        assert!(!store.has_email());
        store.save("user@example.com").expect("保存邮箱失败");
        assert_eq!(store.email(), Some("user@example.com"));
    }

    // 重新打开后邮箱仍在
    let mut store = UserStore::open(&path).expect("重新打开存储失败");
    assert!(store.has_email());
    assert_eq!(store.email(), Some("user@example.com"));

    store.clear().expect("清除失败");
    assert!(!store.has_email());

    let store = UserStore::open(&path).expect("再次打开存储失败");
    assert!(store.email().is_none(), "清除必须同时落盘");
}

#[test]
fn test_user_store_rejects_invalid_email() {
    let path = temp_state_file("user_email_invalid");

    let mut store = UserStore::open(&path).expect("打开存储失败");
    let err = store.save("不是邮箱").unwrap_err();
    match err {
        AppError::Validation(ValidationError::InvalidEmail { .. }) => {}
        other => panic!("应该是邮箱格式错误，实际是: {}", other),
    }
    assert!(!store.has_email(), "非法邮箱不应写入任何状态");
}

#[test]
fn test_auth_store_revalidation_rejection_clears_token() {
    let path = temp_state_file("auth_rejected");

    // 预先放一个历史令牌
    {
        let mut kv = KvStore::open(&path).expect("打开存储失败");
        kv.set("admin_token", "stale-token").expect("写入令牌失败");
    }

    let mut store = AuthStore::open(&path).expect("打开会话存储失败");
    store
        .apply_revalidation(rejected())
        .expect("复验失败必须静默处理");

    assert!(!store.is_authenticated());
    assert!(store.token().is_none(), "被拒绝的令牌必须清除");

    // 落盘状态也必须清掉
    let kv = KvStore::open(&path).expect("重新打开存储失败");
    assert!(kv.get("admin_token").is_none());
}

#[test]
fn test_auth_store_revalidation_success_restores_session() {
    let path = temp_state_file("auth_accepted");

    {
        let mut kv = KvStore::open(&path).expect("打开存储失败");
        kv.set("admin_token", "valid-token").expect("写入令牌失败");
    }

    let mut store = AuthStore::open(&path).expect("打开会话存储失败");
    store
        .apply_revalidation(Ok(sample_profile()))
        .expect("复验成功不应报错");

    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("valid-token"));
    assert_eq!(
        store.admin().map(|a| a.email.as_str()),
        Some("admin@example.com")
    );
}

#[test]
fn test_auth_store_logout_clears_everything() {
    let path = temp_state_file("auth_logout");

    {
        let mut kv = KvStore::open(&path).expect("打开存储失败");
        kv.set("admin_token", "valid-token").expect("写入令牌失败");
    }

    let mut store = AuthStore::open(&path).expect("打开会话存储失败");
    store
        .apply_revalidation(Ok(sample_profile()))
        .expect("复验成功不应报错");

    store.logout().expect("登出失败");
    assert!(!store.is_authenticated());
    assert!(store.admin().is_none());
    assert!(store.token().is_none());
}
