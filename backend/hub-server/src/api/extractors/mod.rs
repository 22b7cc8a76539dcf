pub mod api_caller;
