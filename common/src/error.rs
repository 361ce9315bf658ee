//! エラー型定義
//!
//! 3種類の失敗を区別する:
//! - ローカル検証エラー（NoFrontImage）: ネットワークに到達しない
//! - 通信エラー（Transport / Json）: 部分結果は一切保持しない
//! - サービスエラー（Service）: success=false だが部分結果は保持する

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 表面画像が未撮影のままOCR/可視化を要求した
    #[error("front image not captured")]
    NoFrontImage,

    /// HTTPステータス異常・fetch失敗
    #[error("transport error: {0}")]
    Transport(String),

    /// レスポンスボディが不正（通信エラー扱い）
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// success=false のレスポンスに付随するサービス側メッセージ
    #[error("service error: {0}")]
    Service(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
