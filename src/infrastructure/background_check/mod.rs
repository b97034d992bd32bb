mod http;
mod in_memory;

pub use http::HttpBackgroundCheckService;
pub use in_memory::StaticBackgroundCheckService;
