pub mod est_text;
pub mod excel_read;
pub mod excel_write;
