//! Log Diagnostic Sink
//!
//! 診断イベントを `log` ファサードに流す

use log::{debug, info};

use crate::domain::entities::diagnostic::{Diagnostic, DiagnosticSink};
use crate::domain::entities::upload::CollectionStatus;

/// `log` に書き出すシンク
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, event: &Diagnostic) {
        match event {
            Diagnostic::HttpStatus { url, status } => {
                info!("GET {} returned {}", url, status);
            }
            Diagnostic::SessionOpened { endpoint, user } => {
                info!("Opened session on {} as {}", endpoint, user);
            }
            Diagnostic::Collection { name, status } => match status {
                CollectionStatus::Created => info!("Created collection {}", name),
                CollectionStatus::AlreadyExisted => info!("Using existing collection {}", name),
            },
            Diagnostic::FileUploading {
                index,
                local,
                remote,
            } => {
                info!("[{}] uploading {} to {}", index, local.display(), remote);
            }
            Diagnostic::FileUploaded {
                index,
                remote,
                bytes,
            } => {
                debug!("[{}] uploaded {} ({} bytes)", index, remote, bytes);
            }
            Diagnostic::SessionClosed { endpoint } => {
                debug!("Closed session on {}", endpoint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_log_sink_handles_every_event() {
        let sink = LogSink;
        let events = vec![
            Diagnostic::HttpStatus {
                url: "https://example.org".to_string(),
                status: 200,
            },
            Diagnostic::SessionOpened {
                endpoint: "https://example.org".to_string(),
                user: "alice".to_string(),
            },
            Diagnostic::Collection {
                name: "pfp-data".to_string(),
                status: CollectionStatus::AlreadyExisted,
            },
            Diagnostic::FileUploading {
                index: 0,
                local: PathBuf::from("/tmp/a.txt"),
                remote: "pfp-data/a.txt".to_string(),
            },
            Diagnostic::FileUploaded {
                index: 0,
                remote: "pfp-data/a.txt".to_string(),
                bytes: 3,
            },
            Diagnostic::SessionClosed {
                endpoint: "https://example.org".to_string(),
            },
        ];

        for event in &events {
            sink.emit(event);
        }
    }
}
