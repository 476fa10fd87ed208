//! # HTTP Getter Trait
//!
//! シートのダウンロード（単一のHTTP GET）を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::error::UtilsResult;

/// GETレスポンス
///
/// ステータスは検査せずにそのまま返す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GETを行うリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpGetter: Send + Sync {
    /// URLを取得する
    ///
    /// # Errors
    ///
    /// 通信レベルで失敗した場合のみ `UtilsError::Network` を返す。
    /// 非2xxのステータスはエラーにしない
    async fn get(&self, url: &str) -> UtilsResult<HttpResponse>;
}
