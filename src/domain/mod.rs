pub mod email;
pub mod form;
pub mod reader;
pub mod request_result;
