//! Check OCR Common Library
//!
//! Web(WASM)フロントエンドとネイティブテストで共有される
//! 型・ワイヤープロトコル・セッション状態機械

pub mod error;
pub mod protocol;
pub mod roi;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use protocol::{
    parse_ocr_response, parse_visualize_response, OcrRequest, OcrResponse, StructuredData,
    VisualizeResponse,
};
pub use roi::{list_rois, NormRect, PixelRect, Roi};
pub use session::CheckSession;
pub use types::Side;
