//! UI Labels
//!
//! Fixed display text. Priority labels live on `Priority::label`.

pub const TITLE_FIELD: &str = "タイトル";
pub const PRIORITY_FIELD: &str = "優先度";
pub const CREATE_BUTTON: &str = "作成";
pub const EMPTY_PROMPT: &str = "アイテムを作成してください";
pub const DELETE_BUTTON: &str = "×";
