//! # Sheet URL Service
//!
//! 公開シートのCSVエクスポートURLを組み立てる

use crate::domain::error::UtilsError;

/// CSVエクスポートの既定ベースURL
pub const DEFAULT_SHEET_BASE_URL: &str = "https://docs.google.com/spreadsheet/ccc?key=";

/// シートURLの組み立て
pub struct SheetUrlService;

impl SheetUrlService {
    /// `<base><id>&output=csv` 形式のURLを返す
    ///
    /// # Errors
    ///
    /// IDが空、または空白を含む場合は `UtilsError::InvalidInput`
    ///
    /// # 例
    ///
    /// ```
    /// use csae_utils::domain::services::sheet_url::{SheetUrlService, DEFAULT_SHEET_BASE_URL};
    ///
    /// let url = SheetUrlService::build(DEFAULT_SHEET_BASE_URL, "1BxiMVs0XRA5").unwrap();
    /// assert_eq!(
    ///     url,
    ///     "https://docs.google.com/spreadsheet/ccc?key=1BxiMVs0XRA5&output=csv"
    /// );
    /// ```
    pub fn build(base_url: &str, sheet_id: &str) -> Result<String, UtilsError> {
        let sheet_id = sheet_id.trim();
        if sheet_id.is_empty() {
            return Err(UtilsError::invalid_input("sheet id must not be empty"));
        }
        if sheet_id.chars().any(char::is_whitespace) {
            return Err(UtilsError::invalid_input(format!(
                "sheet id must not contain whitespace: {:?}",
                sheet_id
            )));
        }

        Ok(format!("{}{}&output=csv", base_url, sheet_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        let a = SheetUrlService::build(DEFAULT_SHEET_BASE_URL, "abc").unwrap();
        let b = SheetUrlService::build(DEFAULT_SHEET_BASE_URL, "abc").unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a,
            "https://docs.google.com/spreadsheet/ccc?key=abc&output=csv"
        );
    }

    #[test]
    fn test_build_trims_id() {
        let url = SheetUrlService::build("http://127.0.0.1/csv?key=", "  abc \n").unwrap();
        assert_eq!(url, "http://127.0.0.1/csv?key=abc&output=csv");
    }

    #[test]
    fn test_build_rejects_empty_id() {
        assert!(matches!(
            SheetUrlService::build(DEFAULT_SHEET_BASE_URL, "   "),
            Err(UtilsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_rejects_inner_whitespace() {
        assert!(matches!(
            SheetUrlService::build(DEFAULT_SHEET_BASE_URL, "ab cd"),
            Err(UtilsError::InvalidInput(_))
        ));
    }
}
