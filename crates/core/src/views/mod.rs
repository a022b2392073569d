pub mod form_message;
pub mod project_detail;
