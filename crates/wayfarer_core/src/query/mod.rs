pub mod algorithm;
pub mod route_request;
pub mod route_response;
