//! WebDAV Status Classification
//!
//! WebDAVレスポンスのステータス分類

/// 2xx
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// 認証情報が拒否された
pub fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}

/// MKCOLの対象が既に存在する（RFC 4918: 405 Method Not Allowed）
pub fn is_collection_exists(status: u16) -> bool {
    status == 405
}

/// 親コレクションが存在しない（RFC 4918: 409 Conflict）
pub fn is_missing_parent(status: u16) -> bool {
    status == 409
}

/// ストレージ容量不足
pub fn is_insufficient_storage(status: u16) -> bool {
    status == 507
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(204));
        assert!(is_success(207));
        assert!(!is_success(301));
        assert!(!is_success(405));
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(is_auth_failure(401));
        assert!(is_auth_failure(403));
        assert!(!is_auth_failure(404));
        assert!(!is_auth_failure(500));
    }

    #[test]
    fn test_is_collection_exists() {
        assert!(is_collection_exists(405));
        assert!(!is_collection_exists(201));
        assert!(!is_collection_exists(409));
    }

    #[test]
    fn test_other_classifiers() {
        assert!(is_missing_parent(409));
        assert!(!is_missing_parent(405));
        assert!(is_insufficient_storage(507));
        assert!(!is_insufficient_storage(500));
    }
}
