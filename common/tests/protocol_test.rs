//! ワイヤープロトコル契約テスト
//!
//! バックエンド（FastAPI）との固定契約をレスポンス例で検証

use check_ocr_common::error::Error;
use check_ocr_common::protocol::{
    parse_ocr_response, parse_visualize_response, OcrRequest, StructuredData,
};
use check_ocr_common::roi::list_rois;

/// リクエストボディはimageDataUrlキーのみのcamelCase JSON
#[test]
fn test_request_body_shape() {
    let request = OcrRequest {
        image_data_url: "data:image/jpeg;base64,/9j/4AAQ".to_string(),
    };
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();

    let obj = value.as_object().expect("オブジェクトでない");
    assert_eq!(obj.len(), 1);
    assert_eq!(
        obj.get("imageDataUrl").and_then(|v| v.as_str()),
        Some("data:image/jpeg;base64,/9j/4AAQ")
    );
}

/// 構造化フィールドはサービスのフィールド名（snake_case）と一致する
#[test]
fn test_structured_data_field_names() {
    let json = serde_json::to_string(&StructuredData {
        extraction_success: true,
        payee_name: Some("Roy Ang".to_string()),
        routing_number: Some("021000021".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert!(json.contains("\"extraction_success\":true"));
    assert!(json.contains("\"payee_name\":\"Roy Ang\""));
    assert!(json.contains("\"routing_number\":\"021000021\""));
}

/// ROIレジストリのidは抽出サービスが返すフィールド名を網羅する
#[test]
fn test_roi_ids_cover_structured_fields() {
    let ids: Vec<&str> = list_rois().iter().map(|r| r.id).collect();
    for field in [
        "date",
        "payee",
        "amount_numeric",
        "amount_words",
        "memo",
        "routing_number",
        "account_number",
        "check_number",
    ] {
        assert!(ids.contains(&field), "{} がレジストリにない", field);
    }
}

/// HTMLエラーページなど非JSONボディはError::Jsonになる
#[test]
fn test_malformed_bodies_are_json_errors() {
    for body in ["", "<html></html>", "{\"success\":", "null and void"] {
        let ocr = parse_ocr_response(body);
        assert!(matches!(ocr, Err(Error::Json(_))), "body={:?}", body);
        let viz = parse_visualize_response(body);
        assert!(matches!(viz, Err(Error::Json(_))), "body={:?}", body);
    }
}

/// JSONとして正しいがオブジェクトでないボディもエラー
#[test]
fn test_non_object_body_is_error() {
    assert!(parse_ocr_response("[1, 2, 3]").is_err());
    assert!(parse_ocr_response("\"just a string\"").is_err());
}

/// 未知のフィールドは無視して受理する（サービス側の拡張に耐える）
#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{
        "success": true,
        "raw_text": "text",
        "structured_data": null,
        "method": "regex_extraction",
        "llm_response": "{}"
    }"#;
    let resp = parse_ocr_response(json).expect("デシリアライズ失敗");
    assert!(resp.success);
    assert_eq!(resp.raw_text, "text");
}
