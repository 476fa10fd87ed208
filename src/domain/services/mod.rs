//! # Domain Services
//!
//! 外部システムに依存しない純粋なロジック
//!
//! - **sheet_url**: シートのダウンロードURLの組み立て
//! - **remote_name**: アップロード先のリモート名の導出
//! - **table_decoder**: CSVテキストの表へのデコードと列の型推定

pub mod remote_name;
pub mod sheet_url;
pub mod table_decoder;
