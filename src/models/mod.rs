pub mod answer;
pub mod loaders;
pub mod question;

pub use answer::{AnswerSet, MAX_ANSWERS};
pub use loaders::{load_question_sheet, save_question_sheet};
pub use question::{QuestionSheet, TextQuestion};
