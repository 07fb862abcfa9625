pub mod http_client;
pub mod pacer;

pub use http_client::ReqwestFetcher;
pub use pacer::ThreadPacer;
