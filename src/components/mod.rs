//! View components, one per panel plus small shared pieces.

pub mod document_manager;
pub mod nav_bar;
pub mod ocr_panel;
pub mod plan_form;
pub mod plan_timeline;
pub mod query_panel;
pub mod sources_list;
