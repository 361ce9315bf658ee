//! ライブ位置合わせオーバーレイ
//!
//! requestAnimationFrameループでROIレジストリの枠とラベルを
//! `<video>`に重ねたcanvasへ毎フレーム描き直す。canvasの実寸は
//! ビデオの内在解像度に毎フレーム合わせるため、回転やレイアウト
//! 変更で映像サイズが変わっても枠は追従する。
//!
//! キャンセルはフレームごとのenabledフラグ確認で効く（次のフレーム
//! 境界まで）。再度有効化するときは`start()`で新しいループを張る。
//! `start()`は共有の世代カウンタを進め、各ループは自分の世代と
//! 一致する間だけ継続する。off→onを1フレーム内で往復しても、
//! 旧ループは世代不一致で止まり、生きるループは常に1本になる。

use check_ocr_common::roi::{list_rois, Roi};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

const STROKE_WIDTH: f64 = 3.0;
const LABEL_ALPHA: f64 = 0.7;
const LABEL_HEIGHT: f64 = 20.0;
const LABEL_PADDING: f64 = 4.0;
const LABEL_FONT: &str = "14px sans-serif";

/// 1フレームでループが取る行動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    /// 次フレームをスケジュールせずループを終える
    Stop,
    /// 描画せず継続（ビデオ未初期化）
    Skip,
    /// 描画して継続
    Draw,
}

/// ビデオの内在寸法が描画可能か
///
/// カメラ初期化前は0×0になる。そのフレームは描画をスキップするが
/// ループ自体は継続する（準備完了はフレーム間に変わり得る）。
fn frame_ready(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

/// フレームごとの継続判定
///
/// 無効化済み、または自分より新しいループが張られた（世代不一致）
/// ならStop。それ以外はビデオ寸法に応じてSkip/Draw。
fn next_tick(
    enabled: bool,
    current_generation: u64,
    loop_generation: u64,
    width: u32,
    height: u32,
) -> Tick {
    if !enabled || current_generation != loop_generation {
        Tick::Stop
    } else if !frame_ready(width, height) {
        Tick::Skip
    } else {
        Tick::Draw
    }
}

/// 描画ループを開始する
///
/// `enabled`がfalseになった後の最初のフレームで、次フレームの
/// スケジュールをやめてループを終える。`generation`は呼び出しごとに
/// 進むため、既存のループが残っていても次フレームで必ず止まる。
pub fn start(
    video: HtmlVideoElement,
    canvas: HtmlCanvasElement,
    enabled: Rc<Cell<bool>>,
    generation: Rc<Cell<u64>>,
) {
    let loop_generation = generation.get().wrapping_add(1);
    generation.set(loop_generation);

    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduler = callback.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match next_tick(
            enabled.get(),
            generation.get(),
            loop_generation,
            video.video_width(),
            video.video_height(),
        ) {
            Tick::Stop => return,
            Tick::Skip => {}
            Tick::Draw => draw_frame(&video, &canvas),
        }
        if let Some(cb) = scheduler.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = callback.borrow().as_ref() {
        request_animation_frame(cb);
    };
}

fn request_animation_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// 1フレーム分の描画
fn draw_frame(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) {
    let width = video.video_width();
    let height = video.video_height();

    // 途中で解像度が変わっても追従できるよう毎フレーム合わせる
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }

    let Ok(Some(obj)) = canvas.get_context("2d") else {
        return;
    };
    let Ok(ctx) = obj.dyn_into::<CanvasRenderingContext2d>() else {
        return;
    };

    // 前フレームの枠を完全に消してから描き直す
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

    for roi in list_rois() {
        draw_roi(&ctx, roi, width as f64, height as f64);
    }
}

fn draw_roi(ctx: &CanvasRenderingContext2d, roi: &Roi, width: f64, height: f64) {
    let px = roi.rect.to_pixels(width, height);

    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_stroke_style_str(&roi.stroke_color());
    ctx.stroke_rect(px.x, px.y, px.w, px.h);

    // 枠の左上の直上にラベル背景（同色・半透明）と白文字
    ctx.set_font(LABEL_FONT);
    let text_width = ctx
        .measure_text(roi.label)
        .map(|m| m.width())
        .unwrap_or(0.0);
    let label_y = (px.y - LABEL_HEIGHT).max(0.0);

    ctx.set_fill_style_str(&roi.fill_color(LABEL_ALPHA));
    ctx.fill_rect(px.x, label_y, text_width + LABEL_PADDING * 2.0, LABEL_HEIGHT);

    ctx.set_fill_style_str("#ffffff");
    let _ = ctx.fill_text(roi.label, px.x + LABEL_PADDING, label_y + LABEL_HEIGHT - 6.0);
}
