pub mod auth_form;
pub mod candidate_list;
pub mod chatbot;
pub mod client_history;
pub mod contact_modal;
pub mod fault_boundary;
pub mod language_selector;
pub mod search_bar;
pub mod sidebar;
pub mod sort_toggles;
