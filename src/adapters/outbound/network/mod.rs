/// Network adapters for mirror access
mod http_index_source;

pub use http_index_source::HttpIndexSource;
