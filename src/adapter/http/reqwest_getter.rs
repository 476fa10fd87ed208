//! Reqwest HTTP Getter
//!
//! HttpGetterのreqwest実装

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::domain::error::UtilsResult;
use crate::domain::repositories::sheet_repository::{HttpGetter, HttpResponse};

/// reqwestによるHTTP GET
///
/// タイムアウトやリトライはクライアントの既定値のまま
pub struct ReqwestHttpGetter {
    client: Client,
}

impl ReqwestHttpGetter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpGetter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpGetter for ReqwestHttpGetter {
    async fn get(&self, url: &str) -> UtilsResult<HttpResponse> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
