//! カメラ制御
//!
//! getUserMediaでライブ映像を`<video>`に流し込み、撮影時は
//! オフスクリーンcanvasに現在フレームを描いてJPEGのData URLにする。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints,
};

/// カメラを起動してvideo要素に接続する
pub async fn start_camera(video: &HtmlVideoElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let media_devices = window.navigator().media_devices()?;

    let mut constraints = MediaStreamConstraints::new();
    constraints.video(&JsValue::TRUE);
    constraints.audio(&JsValue::FALSE);

    let promise = media_devices.get_user_media_with_constraints(&constraints)?;
    let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;

    video.set_autoplay(true);
    video.set_muted(true);
    // iOS Safariでインライン再生させる
    video.set_attribute("playsinline", "true")?;
    video.set_src_object(Some(&stream));
    let _ = JsFuture::from(video.play()?).await;
    Ok(())
}

/// 現在のライブフレームをJPEG Data URLとして切り出す
///
/// ライブフレームがまだない（ビデオ寸法が0）場合はNoneを返す。
/// 呼び出し側はそのまま握りつぶしてよい（撮り直しで回復する）。
pub fn capture_frame(video: &HtmlVideoElement) -> Option<String> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return None;
    }

    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
        .ok()?;

    canvas.to_data_url_with_type("image/jpeg").ok()
}
