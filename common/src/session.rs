//! 撮影・抽出セッションの状態機械
//!
//! UI層から呼び出せる操作を begin/finish の同期遷移ペアとして公開する。
//! ネットワーク待ちの間にawaitを挟むのは呼び出し側（wasm層）の責務で、
//! ここは状態遷移の順序だけを保証する:
//!
//! ```text
//! begin_extraction: 前回結果・エラーをクリア → loading=true → ペイロード返却
//! （呼び出し側がfetch）
//! finish_extraction: 結果/エラー反映 → loading=false（全経路で必ず）
//! ```
//!
//! OCRと可視化は結果スロットが独立しているが、loading/errorは共有する。
//! 両方を同時に発火した場合は後に完了した方が共有スロットを上書きする
//! （last-writer-wins）。これは仕様化された挙動であり直列化しない。

use crate::error::{Error, Result};
use crate::protocol::{OcrResponse, StructuredData, VisualizeResponse};
use crate::types::Side;

/// サービスがエラーメッセージを返さなかったときの文言
const GENERIC_SERVICE_ERROR: &str = "extraction service reported a failure";

/// `success: false` の応答をサービスエラーに変換する
fn service_error(message: Option<String>) -> Error {
    Error::Service(message.unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string()))
}

/// セッション状態の集約
///
/// 面ごとに最新1枚の撮影画像、最後の抽出結果、最後の可視化画像を保持する。
/// 履歴は持たない（撮影し直すと上書き）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckSession {
    /// 表面のJPEG Data URL（未撮影ならNone）
    pub front_image: Option<String>,
    /// 裏面のJPEG Data URL
    pub back_image: Option<String>,
    /// 現在撮影対象として選択中の面
    pub selected_side: Side,

    /// OCRの全文テキスト（リクエスト開始時にクリア）
    pub raw_text: String,
    /// 構造化抽出結果
    pub structured: Option<StructuredData>,

    /// ROI焼き込み画像（Data URL）。失敗時も前回分を保持する
    pub visualization: Option<String>,
    /// デバッグパネルの表示状態（画像の有無とは独立）
    pub debug_visible: bool,

    /// OCR・可視化で共有する実行中フラグ
    pub loading: bool,
    /// OCR・可視化で共有する表示用エラー
    pub error: Option<String>,
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定面の撮影画像
    pub fn image(&self, side: Side) -> Option<&str> {
        match side {
            Side::Front => self.front_image.as_deref(),
            Side::Back => self.back_image.as_deref(),
        }
    }

    /// 撮影対象の面を切り替える
    pub fn select_side(&mut self, side: Side) {
        self.selected_side = side;
    }

    /// 撮影結果を格納する
    ///
    /// `frame` がNone（ライブフレームが取れなかった）の場合は黙って何もしない。
    /// オペレーターが撮り直せばよいだけなので、エラーは表示しない。
    pub fn store_capture(&mut self, side: Side, frame: Option<String>) {
        let Some(data_url) = frame else {
            return;
        };
        match side {
            Side::Front => self.front_image = Some(data_url),
            Side::Back => self.back_image = Some(data_url),
        }
    }

    /// OCRリクエストの開始遷移
    ///
    /// 対象は選択中の面に関わらず常に**表面**（固定の業務ルール。
    /// 裏面は抽出に送らない）。表面が未撮影なら`NoFrontImage`を返し、
    /// ネットワークには一切触れない。
    ///
    /// # Returns
    /// 送信すべき画像ペイロード（Data URL）
    pub fn begin_extraction(&mut self) -> Result<String> {
        let Some(payload) = self.front_image.clone() else {
            let err = Error::NoFrontImage;
            self.error = Some(err.to_string());
            return Err(err);
        };
        // 前回結果・エラーをクリアしてからloadingを立てる
        self.raw_text.clear();
        self.structured = None;
        self.error = None;
        self.loading = true;
        Ok(payload)
    }

    /// OCRリクエストの完了遷移
    ///
    /// 通信エラーは結果なし＋エラー表示。整形式のボディは `success` の
    /// 真偽に関わらず raw_text / structured_data を取り込み、
    /// `success: false` なら`Error::Service`として表示する
    /// （部分結果とエラーを両方見せる）。
    /// どの経路でも必ずloadingを下ろす。
    pub fn finish_extraction(&mut self, outcome: Result<OcrResponse>) {
        match outcome {
            Ok(resp) => {
                self.raw_text = resp.raw_text;
                self.structured = resp.structured_data;
                if !resp.success {
                    self.error = Some(service_error(resp.error).to_string());
                }
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    /// 可視化リクエストの開始遷移
    ///
    /// 前提条件はOCRと同じ（表面必須）。前回の可視化画像はクリアしない。
    pub fn begin_visualization(&mut self) -> Result<String> {
        let Some(payload) = self.front_image.clone() else {
            let err = Error::NoFrontImage;
            self.error = Some(err.to_string());
            return Err(err);
        };
        self.error = None;
        self.loading = true;
        Ok(payload)
    }

    /// 可視化リクエストの完了遷移
    ///
    /// 成功時のみ画像を差し替えてパネルを強制表示する。
    /// 失敗時（通信・サービスどちらも）は前回画像とパネル表示状態を
    /// 一切変更しない。
    pub fn finish_visualization(&mut self, outcome: Result<VisualizeResponse>) {
        match outcome {
            Ok(resp) => match (resp.success, resp.visualization) {
                (true, Some(image)) => {
                    self.visualization = Some(image);
                    self.debug_visible = true;
                }
                _ => {
                    self.error = Some(service_error(resp.error).to_string());
                }
            },
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    /// デバッグパネルの表示/非表示を切り替える（画像は保持）
    pub fn toggle_debug_panel(&mut self) {
        self.debug_visible = !self.debug_visible;
    }

    /// デバッグパネルを閉じる（画像は保持）
    pub fn close_debug_panel(&mut self) {
        self.debug_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(tag: &str) -> String {
        format!("data:image/jpeg;base64,{}", tag)
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = CheckSession::new();
        assert_eq!(s.front_image, None);
        assert_eq!(s.back_image, None);
        assert_eq!(s.selected_side, Side::Front);
        assert!(!s.loading);
        assert_eq!(s.error, None);
        assert!(!s.debug_visible);
    }

    #[test]
    fn test_store_capture_none_is_silent_noop() {
        let mut s = CheckSession::new();
        s.store_capture(Side::Front, None);
        assert_eq!(s.front_image, None);
        assert_eq!(s.error, None); // エラーを出さない
    }

    #[test]
    fn test_store_capture_overwrites_same_side_only() {
        let mut s = CheckSession::new();
        s.store_capture(Side::Back, Some(jpeg("back1")));
        s.store_capture(Side::Front, Some(jpeg("front1")));
        s.store_capture(Side::Front, Some(jpeg("front2")));

        assert_eq!(s.front_image, Some(jpeg("front2"))); // 上書き
        assert_eq!(s.back_image, Some(jpeg("back1"))); // 裏面は不変
    }

    #[test]
    fn test_begin_extraction_without_front_image() {
        let mut s = CheckSession::new();
        // 裏面があっても表面がなければ拒否
        s.store_capture(Side::Back, Some(jpeg("back")));

        let result = s.begin_extraction();
        assert!(matches!(result, Err(Error::NoFrontImage)));
        assert_eq!(s.error.as_deref(), Some("front image not captured"));
        assert!(!s.loading); // ネットワークに進まない
    }

    #[test]
    fn test_begin_extraction_always_sends_front() {
        let mut s = CheckSession::new();
        s.store_capture(Side::Front, Some(jpeg("front")));
        s.store_capture(Side::Back, Some(jpeg("back")));
        s.select_side(Side::Back); // 裏面選択中でも

        let payload = s.begin_extraction().expect("開始失敗");
        assert_eq!(payload, jpeg("front"));
        assert!(s.loading);
        assert_eq!(s.error, None);
    }

    #[test]
    fn test_begin_extraction_clears_previous_result() {
        let mut s = CheckSession::new();
        s.store_capture(Side::Front, Some(jpeg("front")));
        s.raw_text = "前回のテキスト".to_string();
        s.structured = Some(StructuredData::default());
        s.error = Some("前回のエラー".to_string());

        s.begin_extraction().expect("開始失敗");
        assert_eq!(s.raw_text, "");
        assert_eq!(s.structured, None);
        assert_eq!(s.error, None);
    }

    #[test]
    fn test_finish_extraction_clears_loading_on_every_path() {
        let mut s = CheckSession::new();
        s.store_capture(Side::Front, Some(jpeg("front")));

        s.begin_extraction().expect("開始失敗");
        s.finish_extraction(Ok(OcrResponse { success: true, ..Default::default() }));
        assert!(!s.loading);

        s.begin_extraction().expect("開始失敗");
        s.finish_extraction(Err(Error::Transport("API error: 500".to_string())));
        assert!(!s.loading);

        // パース失敗（Json）でもスピナーが残らない
        s.begin_extraction().expect("開始失敗");
        let parse_err = serde_json::from_str::<OcrResponse>("not json").unwrap_err();
        s.finish_extraction(Err(Error::Json(parse_err)));
        assert!(!s.loading);
    }

    #[test]
    fn test_service_failure_surfaces_as_service_error() {
        let mut s = CheckSession::new();
        s.store_capture(Side::Front, Some(jpeg("front")));
        s.begin_extraction().expect("開始失敗");
        s.finish_extraction(Ok(OcrResponse {
            success: false,
            error: Some("low confidence".to_string()),
            ..Default::default()
        }));

        // 通信エラーと同じくエラー型のDisplayを経由して表示される
        assert_eq!(s.error, Some(Error::Service("low confidence".to_string()).to_string()));
    }

    #[test]
    fn test_toggle_and_close_debug_panel_keep_image() {
        let mut s = CheckSession::new();
        s.visualization = Some(jpeg("viz"));
        s.debug_visible = true;

        s.close_debug_panel();
        assert!(!s.debug_visible);
        assert_eq!(s.visualization, Some(jpeg("viz"))); // 閉じても破棄しない

        s.toggle_debug_panel();
        assert!(s.debug_visible);
        assert_eq!(s.visualization, Some(jpeg("viz")));
    }
}
