//! OCRサービス連携
//!
//! `POST /ocr`（フィールド抽出）と `POST /visualize_rois`（ROI焼き込み
//! デバッグ画像）の2エンドポイントを呼び出す。どちらも表面画像の
//! Data URLを送る同形のリクエスト。

use check_ocr_common::error::{Error, Result};
use check_ocr_common::protocol::{
    parse_ocr_response, parse_visualize_response, OcrRequest, OcrResponse, VisualizeResponse,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 抽出サービスのベースアドレス（固定）
const API_BASE_URL: &str = "http://localhost:8000";

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn js_error(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

/// JSONボディをPOSTしてレスポンスボディ文字列を返す
///
/// 非2xxステータスは通信エラー（サービスレベルのsuccess=falseとは別物）
async fn post_json(path: &str, body: &str) -> Result<String> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(body)));

    let request = Request::new_with_str_and_init(&endpoint(path), &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Transport(format!("API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("empty response body".to_string()))
}

/// フィールド抽出リクエスト
pub async fn request_extraction(image_data_url: &str) -> Result<OcrResponse> {
    let body = serde_json::to_string(&OcrRequest {
        image_data_url: image_data_url.to_string(),
    })?;
    let text = post_json("/ocr", &body).await?;
    parse_ocr_response(&text)
}

/// ROI可視化リクエスト
pub async fn request_visualization(image_data_url: &str) -> Result<VisualizeResponse> {
    let body = serde_json::to_string(&OcrRequest {
        image_data_url: image_data_url.to_string(),
    })?;
    let text = post_json("/visualize_rois", &body).await?;
    parse_visualize_response(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(endpoint("/ocr"), "http://localhost:8000/ocr");
        assert_eq!(
            endpoint("/visualize_rois"),
            "http://localhost:8000/visualize_rois"
        );
    }
}
