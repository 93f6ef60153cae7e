mod search_flow_tests;
mod session_tests;
