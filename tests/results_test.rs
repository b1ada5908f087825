use quiz_client::models::{QuestionResult, QuizPublic, SubmissionResult};
use quiz_client::workflow::{is_passing, render_result, PASS_THRESHOLD};

fn sample_result() -> SubmissionResult {
    let submitted_at = chrono::NaiveDate::from_ymd_opt(2026, 8, 1)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();

    SubmissionResult {
        submission_id: "sub-1".to_string(),
        quiz_id: "quiz-1".to_string(),
        quiz_title: "欧洲地理小测".to_string(),
        user_email: "user@example.com".to_string(),
        score: 1,
        total_questions: 2,
        percentage: 50.0,
        submitted_at,
        results: vec![
            QuestionResult {
                question_id: "q-1".to_string(),
                question_text: "法国的首都是哪里？".to_string(),
                user_answer: "B".to_string(),
                correct_answer: "B".to_string(),
                is_correct: true,
                explanation: None,
            },
            QuestionResult {
                question_id: "q-2".to_string(),
                question_text: "多瑙河流经维也纳。".to_string(),
                user_answer: "false".to_string(),
                correct_answer: "true".to_string(),
                is_correct: false,
                explanation: Some("多瑙河穿过维也纳市区".to_string()),
            },
        ],
    }
}

#[test]
fn test_pass_threshold_is_display_only_constant() {
    assert_eq!(PASS_THRESHOLD, 60.0);
    assert!(is_passing(60.0), "正好踩线算通过");
    assert!(is_passing(87.5));
    assert!(!is_passing(59.9));
}

#[test]
fn test_render_reveals_correct_answer_only_on_mismatch() {
    let rendered = render_result(&sample_result());

    // 答错的题展示正确答案和解析
    assert!(rendered.contains("正确答案: true"));
    assert!(rendered.contains("解析: 多瑙河穿过维也纳市区"));

    // 答对的题不展示"正确答案"行
    assert_eq!(rendered.matches("正确答案:").count(), 1);
    assert!(rendered.contains("答对 1/2 题"));
}

#[test]
fn test_render_headline_follows_pass_state() {
    let mut result = sample_result();

    result.percentage = 80.0;
    assert!(render_result(&result).contains("🎉"));

    result.percentage = 40.0;
    assert!(render_result(&result).contains("📚"));
}

/// 公开视图的反序列化：服务端响应里不存在任何答案字段
#[test]
fn test_public_quiz_deserializes_without_answer_fields() {
    let body = r#"{
        "id": "3f0c8f1e-0000-0000-0000-000000000001",
        "title": "欧洲地理小测",
        "description": null,
        "created_at": "2026-08-01T09:00:00",
        "questions": [
            {
                "id": "3f0c8f1e-0000-0000-0000-000000000002",
                "question_type": "mcq",
                "question_text": "法国的首都是哪里？",
                "options": {"A": "柏林", "B": "巴黎", "C": "马德里", "D": "罗马"},
                "order": 1
            },
            {
                "id": "3f0c8f1e-0000-0000-0000-000000000003",
                "question_type": "true_false",
                "question_text": "多瑙河流经维也纳。",
                "options": null,
                "order": 2
            }
        ]
    }"#;

    let quiz: QuizPublic = serde_json::from_str(body).expect("公开视图反序列化失败");
    assert_eq!(quiz.questions.len(), 2);

    // 公开视图序列化后也不可能出现答案字段（类型层面就没有）
    let round_trip = serde_json::to_value(&quiz).expect("序列化失败");
    let rendered = round_trip.to_string();
    assert!(!rendered.contains("correct_answer"));
    assert!(!rendered.contains("\"answer\""));
}
