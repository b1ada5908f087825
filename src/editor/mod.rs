pub mod quiz_editor;

pub use quiz_editor::{AnswerDraft, QuestionDraft, QuestionShape, QuizEditor};
