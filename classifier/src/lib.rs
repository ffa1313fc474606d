pub mod backend;
pub mod classify;
pub mod prompt;

pub use backend::{CompletionBackend, KeywordBackend, OpenAiBackend};
pub use classify::{
    parse_classification, Classification, ClassifierError, CompletionClassifier, SkillClassifier,
    MAX_SKILL_LEVEL,
};
pub use prompt::{build_project_prompt, SKILL_VOCABULARY, TOO_SPECIFIC_SENTINEL};
