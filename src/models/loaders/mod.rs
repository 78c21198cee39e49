pub mod toml_loader;

pub use toml_loader::{load_question_sheet, save_question_sheet};
