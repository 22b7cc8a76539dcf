mod api_caller;
