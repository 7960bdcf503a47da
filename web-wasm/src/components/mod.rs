pub mod header;
pub mod upload_area;
pub mod label_form;
pub mod save_button;
