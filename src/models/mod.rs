pub mod admin;
pub mod loaders;
pub mod quiz;
pub mod submission;

pub use admin::{AdminProfile, AdminRegistration, TokenResponse, UserProfile, UserRegistration};
pub use loaders::{load_all_toml_files, load_toml_to_quiz_draft, QuizDraftFile};
pub use quiz::{
    blank_mcq_options, AnswerCreate, AnswerResponse, QuestionCreate, QuestionPublic,
    QuestionResponse, QuestionType, QuizCreate, QuizListItem, QuizPublic, QuizResponse, QuizUpdate,
};
pub use submission::{QuestionResult, SubmissionRequest, SubmissionResult};
