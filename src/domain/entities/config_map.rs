//! # Configuration Mapping
//!
//! JSONファイルから読み込んだキー/値マッピングと、その文字エンコーディング

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UtilsError;

/// 設定マッピング
///
/// トップレベルのキー順序はソーステキストの順序と一致する
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// ファイルの文字エンコーディング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8（BOM付きは不正）
    #[default]
    Utf8,
    /// UTF-8（先頭のBOMを除去）
    Utf8Sig,
    /// ISO-8859-1
    Latin1,
    /// 7bit ASCII
    Ascii,
}

impl Encoding {
    const BOM: &'static [u8] = &[0xEF, 0xBB, 0xBF];

    /// バイト列を文字列にデコードする
    ///
    /// # Errors
    ///
    /// エンコーディングとして不正なバイトを含む場合は `UtilsError::Parse`
    pub fn decode(self, bytes: &[u8]) -> Result<String, UtilsError> {
        match self {
            Encoding::Utf8 => {
                if bytes.starts_with(Self::BOM) {
                    return Err(UtilsError::Parse(
                        "unexpected UTF-8 BOM (decode using utf-8-sig)".to_string(),
                    ));
                }
                Self::decode_utf8(bytes)
            }
            Encoding::Utf8Sig => {
                Self::decode_utf8(bytes.strip_prefix(Self::BOM).unwrap_or(bytes))
            }
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(UtilsError::Parse(format!(
                    "byte 0x{:02x} at position {} is not valid ascii",
                    bytes[pos], pos
                ))),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
        }
    }

    fn decode_utf8(bytes: &[u8]) -> Result<String, UtilsError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| UtilsError::Parse(format!("invalid utf-8: {}", e)))
    }
}

impl FromStr for Encoding {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(Encoding::Utf8Sig),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Encoding::Latin1),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            other => Err(UtilsError::invalid_input(format!(
                "unsupported encoding: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Latin1 => "latin-1",
            Encoding::Ascii => "ascii",
        };
        f.write_str(name)
    }
}
