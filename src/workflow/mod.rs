pub mod sheet_flow;

pub use sheet_flow::{ProcessResult, SheetFlow, SheetStats};
