use quiz_client::clients::QuizClient;
use quiz_client::config::Config;
use quiz_client::error::{AppError, ValidationError};
use quiz_client::models::{QuestionPublic, QuestionType, QuizPublic};
use quiz_client::workflow::{FlowPhase, TakeQuizFlow};

fn sample_quiz(question_count: usize) -> QuizPublic {
    let created_at = chrono::NaiveDate::from_ymd_opt(2026, 8, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let questions = (0..question_count)
        .map(|i| QuestionPublic {
            id: format!("q-{}", i + 1),
            question_type: QuestionType::Text,
            question_text: format!("第 {} 题", i + 1),
            options: None,
            order: (i + 1) as u32,
        })
        .collect();

    QuizPublic {
        id: "quiz-1".to_string(),
        title: "欧洲地理小测".to_string(),
        description: None,
        created_at,
        questions,
    }
}

fn quiz_client() -> QuizClient {
    let config = Config::default();
    QuizClient::new(&config, reqwest::Client::new())
}

#[test]
fn test_flow_reaches_ready_after_load() {
    let mut flow = TakeQuizFlow::new("quiz-1", "user@example.com");
    assert_eq!(flow.phase(), FlowPhase::Loading);

    let generation = flow.begin_load();
    assert!(flow.apply_loaded(generation, Ok(sample_quiz(2))));

    assert_eq!(flow.phase(), FlowPhase::Ready);
    assert_eq!(flow.total_questions(), 2);
    assert_eq!(flow.answered_count(), 0);
}

#[test]
fn test_flow_fetch_failure_is_terminal() {
    let mut flow = TakeQuizFlow::new("quiz-1", "user@example.com");

    let generation = flow.begin_load();
    flow.apply_loaded(
        generation,
        Err(AppError::api_bad_status("/api/public/quizzes/quiz-1", 404, None)),
    );

    assert_eq!(flow.phase(), FlowPhase::Failed);
    assert!(flow.last_error().is_some());
}

#[test]
fn test_stale_load_response_is_discarded() {
    let mut flow = TakeQuizFlow::new("quiz-1", "user@example.com");

    let stale = flow.begin_load();
    let current = flow.begin_load();

    // 旧代响应必须被丢弃，状态不变
    assert!(!flow.apply_loaded(stale, Ok(sample_quiz(2))));
    assert_eq!(flow.phase(), FlowPhase::Loading);
    assert!(flow.quiz().is_none());

    assert!(flow.apply_loaded(current, Ok(sample_quiz(3))));
    assert_eq!(flow.phase(), FlowPhase::Ready);
    assert_eq!(flow.total_questions(), 3);
}

#[test]
fn test_submission_gate_is_monotonic_in_answer_count() {
    let mut flow = TakeQuizFlow::new("quiz-1", "user@example.com");
    let generation = flow.begin_load();
    flow.apply_loaded(generation, Ok(sample_quiz(3)));

    assert!(!flow.can_submit());

    flow.record_answer("q-1", "答案一");
    assert_eq!(flow.answered_count(), 1);
    assert!(!flow.can_submit());
    assert!((flow.progress() - 1.0 / 3.0).abs() < 1e-9);

    // 同一题覆盖旧答案，计数不变
    flow.record_answer("q-1", "修改后的答案");
    assert_eq!(flow.answered_count(), 1);

    flow.record_answer("q-2", "答案二");
    assert!(!flow.can_submit());

    flow.record_answer("q-3", "答案三");
    assert!(flow.can_submit());
    assert!((flow.progress() - 1.0).abs() < 1e-9);
}

#[test]
fn test_incomplete_submit_fails_before_any_network_call() {
    // 指向不存在的后端：只要没发请求就不会出网络错误
    tokio_test::block_on(async {
        let mut flow = TakeQuizFlow::new("quiz-1", "user@example.com");
        let generation = flow.begin_load();
        flow.apply_loaded(generation, Ok(sample_quiz(2)));
        flow.record_answer("q-1", "只答了一题");

        let err = flow.submit(&quiz_client()).await.unwrap_err();
        match err {
            AppError::Validation(v) => {
                assert_eq!(v, ValidationError::IncompleteAnswers { answered: 1, total: 2 })
            }
            other => panic!("应该是校验错误，实际是: {}", other),
        }

        // 提交被拦下后仍停留在就绪态，答案保留
        assert_eq!(flow.phase(), FlowPhase::Ready);
        assert_eq!(flow.answered_count(), 1);
    });
}

#[test]
fn test_zero_question_quiz_never_completes() {
    let mut flow = TakeQuizFlow::new("quiz-1", "user@example.com");
    let generation = flow.begin_load();
    flow.apply_loaded(generation, Ok(sample_quiz(0)));

    assert_eq!(flow.progress(), 0.0);
    assert!(!flow.is_complete());
    assert!(!flow.can_submit());
}
