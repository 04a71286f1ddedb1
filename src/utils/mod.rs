pub mod duration_utils;
pub mod keyword_utils;
