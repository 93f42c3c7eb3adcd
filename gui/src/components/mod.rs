// GUI components module
pub mod advisory_list;
pub mod balance_banner;
pub mod budget_form;
pub mod region_picker;
