//! HTTP Adapter Modules
//!
//! シート取得のためのHTTPアダプター

pub mod reqwest_getter;

pub use reqwest_getter::ReqwestHttpGetter;
