pub mod answer_synthesizer;
pub mod response_parser;

pub use answer_synthesizer::{generate_answers_for_question, AnswerSynthesizer, MOCK_ANSWERS};
pub use response_parser::extract_answers;
