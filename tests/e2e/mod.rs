mod display_only;
mod menu_navigation;
mod session_flow;
mod storage_errors;
