//! 评分结果展示
//!
//! 纯投影：客户端不计算任何对错，只把服务端返回的结果渲染成文本。

use crate::models::SubmissionResult;
use std::fmt::Write;

/// 及格线（百分比）
///
/// 只影响展示样式，不是评分规则
pub const PASS_THRESHOLD: f64 = 60.0;

/// 按展示用的及格线判断样式
pub fn is_passing(percentage: f64) -> bool {
    percentage >= PASS_THRESHOLD
}

/// 把评分结果渲染为多行文本
pub fn render_result(result: &SubmissionResult) -> String {
    let mut out = String::new();

    let headline = if is_passing(result.percentage) {
        "🎉 成绩不错！"
    } else {
        "📚 继续加油！"
    };

    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "{}  {:.1}%", headline, result.percentage);
    let _ = writeln!(
        out,
        "测验: {} | 答对 {}/{} 题",
        result.quiz_title, result.score, result.total_questions
    );
    let _ = writeln!(
        out,
        "提交时间: {}",
        result.submitted_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "{}", "=".repeat(60));

    for (i, item) in result.results.iter().enumerate() {
        let mark = if item.is_correct { "✓" } else { "✗" };
        let _ = writeln!(out, "\n第 {} 题 {} {}", i + 1, mark, item.question_text);
        let _ = writeln!(out, "  你的答案: {}", item.user_answer);

        // 只有答错时才展示正确答案
        if !item.is_correct {
            let _ = writeln!(out, "  正确答案: {}", item.correct_answer);
        }

        if let Some(explanation) = &item.explanation {
            let _ = writeln!(out, "  解析: {}", explanation);
        }
    }

    out
}
