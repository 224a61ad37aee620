pub mod bulk_json;
pub mod delete_record;
pub mod error_response;
pub mod get_session;
pub mod move_record;
pub mod reset_content;
pub mod select_record;
pub mod select_tab;
pub mod submit_draft;
pub mod update_draft;

pub use bulk_json::{apply_bulk_json_handler, edit_bulk_json_handler, enter_bulk_json_handler};
pub use delete_record::{cancel_delete_handler, confirm_delete_handler, request_delete_handler};
pub use get_session::get_session_handler;
pub use move_record::{move_record_handler, move_section_handler};
pub use reset_content::reset_content_handler;
pub use select_record::select_record_handler;
pub use select_tab::select_tab_handler;
pub use submit_draft::submit_draft_handler;
pub use update_draft::update_draft_handler;
