//! OCRサービスのワイヤープロトコル
//!
//! バックエンドとの契約（固定）:
//! - `POST /ocr`            リクエスト `{"imageDataUrl": "..."}`
//! - `POST /visualize_rois` リクエストは同形
//!
//! レスポンスのフィールドはsnake_case、リクエストのみcamelCase。
//! 欠けているフィールドはデフォルト値で許容する。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 画像送信リクエスト（/ocr と /visualize_rois で共用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRequest {
    pub image_data_url: String,
}

/// 構造化抽出フィールド
///
/// サービスが読み取れなかったフィールドはNoneになる
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredData {
    pub extraction_success: bool,
    pub payee_name: Option<String>,
    pub date: Option<String>,
    pub amount: Option<String>,
    pub memo: Option<String>,
    pub routing_number: Option<String>,
    pub account_number: Option<String>,
    pub check_number: Option<String>,
}

/// `POST /ocr` のレスポンス
///
/// `success: false` でも raw_text / structured_data は有効なことがある
/// （部分抽出）。HTTPレベルの失敗とは別物。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrResponse {
    pub success: bool,
    pub raw_text: String,
    pub structured_data: Option<StructuredData>,
    pub error: Option<String>,
}

/// `POST /visualize_rois` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizeResponse {
    pub success: bool,
    /// ROI枠を焼き込んだ画像（Data URL）
    pub visualization: Option<String>,
    pub error: Option<String>,
}

/// OCRレスポンスボディをパース
///
/// パース失敗は通信エラー扱い（`Error::Json`）
pub fn parse_ocr_response(body: &str) -> Result<OcrResponse> {
    let resp: OcrResponse = serde_json::from_str(body)?;
    Ok(resp)
}

/// 可視化レスポンスボディをパース
pub fn parse_visualize_response(body: &str) -> Result<VisualizeResponse> {
    let resp: VisualizeResponse = serde_json::from_str(body)?;
    Ok(resp)
}
