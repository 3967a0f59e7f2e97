pub mod export;
pub mod latest_request;
pub mod plotly;
