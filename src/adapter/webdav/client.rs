//! ownCloud WebDAV Client
//!
//! StorageConnector / StorageSessionのWebDAV実装

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::header::ETAG;
use reqwest::{Client, Method, RequestBuilder, Url};
use std::path::Path;

use super::status::{
    is_auth_failure, is_collection_exists, is_insufficient_storage, is_missing_parent, is_success,
};
use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::upload::CollectionStatus;
use crate::domain::error::{UtilsError, UtilsResult};
use crate::domain::repositories::storage_repository::{
    PutReceipt, StorageConnector, StorageSession,
};

/// 既定のownCloudインスタンス
pub const DEFAULT_ENDPOINT: &str = "https://oeawcloud.oeaw.ac.at";

/// エンドポイントからのWebDAVルートの相対パス
pub const WEBDAV_ROOT: &str = "remote.php/webdav/";

fn webdav_method(name: &'static str) -> UtilsResult<Method> {
    Method::from_bytes(name.as_bytes())
        .map_err(|e| UtilsError::invalid_input(format!("invalid method {}: {}", name, e)))
}

/// エンドポイントURLからWebDAVルートURLを作る
pub fn webdav_root(endpoint: &str) -> UtilsResult<Url> {
    let base = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    };

    Url::parse(&base)
        .and_then(|url| url.join(WEBDAV_ROOT))
        .map_err(|e| UtilsError::invalid_input(format!("invalid endpoint {}: {}", endpoint, e)))
}

/// WebDAVルートからの相対パスをURLにする（各セグメントはパーセントエンコード）
pub fn resource_url(root: &Url, remote_path: &str, collection: bool) -> UtilsResult<Url> {
    let mut url = root.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            UtilsError::invalid_input(format!("endpoint cannot carry a path: {}", root))
        })?;
        segments.pop_if_empty();
        for segment in remote_path.split('/').filter(|s| !s.is_empty()) {
            segments.push(segment);
        }
        if collection {
            segments.push("");
        }
    }
    Ok(url)
}

/// WebDAVセッションのファクトリ
pub struct WebDavConnector {
    endpoint: String,
    client: Client,
}

impl WebDavConnector {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for WebDavConnector {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl StorageConnector for WebDavConnector {
    async fn connect(&self, credentials: &Credentials) -> UtilsResult<Box<dyn StorageSession>> {
        let root = webdav_root(&self.endpoint)?;
        debug!("PROPFIND {} as {}", root, credentials.user);

        let response = self
            .client
            .request(webdav_method("PROPFIND")?, root.clone())
            .basic_auth(&credentials.user, Some(&credentials.password))
            .header("Depth", "0")
            .send()
            .await?;

        let status = response.status().as_u16();
        if is_auth_failure(status) {
            return Err(UtilsError::Auth(format!(
                "{} rejected credentials for {} (status {})",
                self.endpoint, credentials.user, status
            )));
        }
        if !is_success(status) {
            return Err(UtilsError::Network(format!(
                "unexpected status {} from {}",
                status, root
            )));
        }

        info!("Logged in to {} as {}", self.endpoint, credentials.user);

        Ok(Box::new(WebDavSession {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            root,
            credentials: credentials.clone(),
        }))
    }
}

/// 認証済みWebDAVセッション
pub struct WebDavSession {
    client: Client,
    endpoint: String,
    root: Url,
    credentials: Credentials,
}

impl WebDavSession {
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
    }
}

#[async_trait]
impl StorageSession for WebDavSession {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn create_collection(&self, name: &str) -> UtilsResult<CollectionStatus> {
        let url = resource_url(&self.root, name, true)?;
        debug!("MKCOL {}", url);

        let response = self.request(webdav_method("MKCOL")?, url).send().await?;
        let status = response.status().as_u16();

        if is_success(status) {
            info!("Created collection {}", name);
            Ok(CollectionStatus::Created)
        } else if is_collection_exists(status) {
            debug!("Collection {} already exists", name);
            Ok(CollectionStatus::AlreadyExisted)
        } else {
            if is_missing_parent(status) {
                warn!("Parent of collection {} does not exist", name);
            }
            Err(UtilsError::remote("MKCOL", name, status))
        }
    }

    async fn put_file(&self, remote_path: &str, local_path: &Path) -> UtilsResult<PutReceipt> {
        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|e| UtilsError::not_found(local_path, e))?;
        let size = bytes.len() as u64;

        let mtime = tokio::fs::metadata(local_path)
            .await
            .ok()
            .and_then(|m| m.modified().ok())
            .map(|t| DateTime::<Utc>::from(t).timestamp());

        let url = resource_url(&self.root, remote_path, false)?;
        debug!("PUT {} ({} bytes)", url, size);

        let mut request = self.request(Method::PUT, url).body(bytes);
        if let Some(mtime) = mtime {
            request = request.header("X-OC-Mtime", mtime.to_string());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        if !is_success(status) {
            if is_insufficient_storage(status) {
                warn!("Remote storage is full while writing {}", remote_path);
            }
            return Err(UtilsError::remote("PUT", remote_path, status));
        }

        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(PutReceipt {
            bytes: size,
            status,
            etag,
        })
    }

    async fn close(&self) {
        debug!("Closing WebDAV session on {}", self.endpoint);
    }
}
