use quiz_client::clients::{AuthClient, QuizClient};
use quiz_client::config::Config;
use quiz_client::editor::QuizEditor;
use quiz_client::utils::logging;
use quiz_client::workflow::TakeQuizFlow;

/// 构造一道完整的选择题（正确答案 B）
fn build_single_mcq_editor() -> QuizEditor {
    let mut editor = QuizEditor::new();
    editor.title = "集成测试测验".to_string();
    editor
        .update_question(0, "question_text", "法国的首都是哪里？")
        .expect("设置题干失败");
    for (key, text) in [("A", "柏林"), ("B", "巴黎"), ("C", "马德里"), ("D", "罗马")] {
        editor
            .update_question(0, &format!("options.{}", key), text)
            .expect("设置选项失败");
    }
    editor
        .update_question(0, "answer.correct_answer", "B")
        .expect("设置答案失败");
    editor
}

#[tokio::test]
#[ignore] // 默认忽略，需要本地后端：cargo test -- --ignored
async fn test_create_take_and_grade_quiz_end_to_end() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    let http = reqwest::Client::new();
    let auth_client = AuthClient::new(&config, http.clone());
    let quiz_client = QuizClient::new(&config, http.clone());

    // 管理员登录
    let token = auth_client
        .login(&config.admin_email, &config.admin_password)
        .await
        .expect("登录失败");

    // 编辑器构造并创建测验
    let editor = build_single_mcq_editor();
    editor.validate_for_submit().expect("校验应该通过");
    let quiz = quiz_client
        .create_quiz(&token.access_token, &editor.build_payload())
        .await
        .expect("创建测验失败");

    // 公开端原始响应里绝不能出现答案字段
    let raw: serde_json::Value = http
        .get(format!(
            "{}/api/public/quizzes/{}",
            config.api_base_url, quiz.id
        ))
        .send()
        .await
        .expect("请求公开测验失败")
        .json()
        .await
        .expect("解析公开测验失败");
    let rendered = raw.to_string();
    assert!(
        !rendered.contains("correct_answer"),
        "公开视图泄露了正确答案"
    );

    // 走完整答题流程：选 B 应该拿满分
    let mut flow = TakeQuizFlow::new(quiz.id.clone(), "user@example.com");
    flow.load(&quiz_client).await.expect("拉取测验失败");
    let questions = flow.quiz().expect("测验应已就绪").questions.clone();
    for question in &questions {
        flow.record_answer(question.id.clone(), "B");
    }
    let result = flow.submit(&quiz_client).await.expect("提交答卷失败");
    assert_eq!(result.total_questions, 1);
    assert_eq!(result.score, 1);

    // 清理
    quiz_client
        .delete_quiz(&token.access_token, &quiz.id)
        .await
        .expect("删除测验失败");
}

#[tokio::test]
#[ignore]
async fn test_admin_session_revalidation_round_trip() {
    logging::init();

    let config = Config::from_env();
    let http = reqwest::Client::new();
    let auth_client = AuthClient::new(&config, http);

    let token = auth_client
        .login(&config.admin_email, &config.admin_password)
        .await
        .expect("登录失败");

    // 有效令牌应该复验通过
    let profile = auth_client
        .current_admin(&token.access_token)
        .await
        .expect("复验失败");
    assert_eq!(profile.email, config.admin_email);

    // 伪造令牌应该被拒绝
    let result = auth_client.current_admin("not-a-real-token").await;
    assert!(result.is_err(), "伪造令牌应该复验失败");
}

#[tokio::test]
#[ignore]
async fn test_register_user_email_and_list_public() {
    logging::init();

    let config = Config::from_env();
    let http = reqwest::Client::new();
    let quiz_client = QuizClient::new(&config, http);

    let user = quiz_client
        .register_user_email("user@example.com")
        .await
        .expect("注册邮箱失败");
    assert_eq!(user.email, "user@example.com");

    let quizzes = quiz_client
        .list_public_quizzes(0, 100)
        .await
        .expect("获取公开测验列表失败");
    println!("找到 {} 个公开测验", quizzes.len());
}
