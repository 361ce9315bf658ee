//! メインアプリケーションコンポーネント
//!
//! セッション状態（CheckSession）をシグナルとして持ち、
//! begin/finish遷移の間にfetchのawaitを挟む。オーバーレイループは
//! ネットワーク状態と独立に動く。

use leptos::html;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::api::ocr::{request_extraction, request_visualization};
use crate::camera;
use crate::components::{
    camera_panel::CameraPanel, capture_controls::CaptureControls, debug_panel::DebugPanel,
    header::Header, results_panel::ResultsPanel,
};
use crate::overlay;
use check_ocr_common::session::CheckSession;
use check_ocr_common::types::Side;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (session, set_session) = signal(CheckSession::new());
    let (camera_running, set_camera_running) = signal(false);
    let (overlay_on, set_overlay_on) = signal(false);

    let video_ref: NodeRef<html::Video> = NodeRef::new();
    let canvas_ref: NodeRef<html::Canvas> = NodeRef::new();

    // オーバーレイループのキャンセルフラグ（フレームごとに確認される）と
    // ループ世代（start()ごとに進み、残存ループを止める）
    let overlay_enabled = Rc::new(Cell::new(false));
    let overlay_generation = Rc::new(Cell::new(0u64));

    let start_overlay = {
        let overlay_enabled = overlay_enabled.clone();
        let overlay_generation = overlay_generation.clone();
        move || {
            if let (Some(video), Some(canvas)) =
                (video_ref.get_untracked(), canvas_ref.get_untracked())
            {
                overlay_enabled.set(true);
                set_overlay_on.set(true);
                overlay::start(video, canvas, overlay_enabled.clone(), overlay_generation.clone());
            }
        }
    };

    // ガイド表示の切り替え（offはフラグを下ろすだけ、onは新しいループを張る）
    let on_toggle_overlay = {
        let overlay_enabled = overlay_enabled.clone();
        let start_overlay = start_overlay.clone();
        move |on: bool| {
            if on {
                start_overlay();
            } else {
                overlay_enabled.set(false);
                set_overlay_on.set(false);
            }
        }
    };

    // カメラ起動ハンドラ（成功したらガイドも自動で開始）
    let on_start_camera = {
        let start_overlay = start_overlay.clone();
        move |_: ()| {
            let Some(video) = video_ref.get_untracked() else {
                return;
            };
            let start_overlay = start_overlay.clone();
            spawn_local(async move {
                match camera::start_camera(&video).await {
                    Ok(()) => {
                        set_camera_running.set(true);
                        start_overlay();
                    }
                    Err(e) => {
                        gloo::console::error!(format!("カメラ起動失敗: {:?}", e));
                    }
                }
            });
        }
    };

    // 撮影ハンドラ: フレームが取れなければ黙って何もしない
    let on_capture = move |_: ()| {
        let frame = video_ref
            .get_untracked()
            .and_then(|v| camera::capture_frame(&v));
        set_session.update(|s| {
            let side = s.selected_side;
            s.store_capture(side, frame);
        });
    };

    let on_select_side = move |side: Side| {
        set_session.update(|s| s.select_side(side));
    };

    // フィールド抽出ハンドラ（対象は常に表面）
    let on_extract = move |_: ()| {
        let mut payload: Option<String> = None;
        set_session.update(|s| payload = s.begin_extraction().ok());
        let Some(payload) = payload else {
            // ローカル検証エラー: beginがエラー表示済み、fetchしない
            return;
        };
        spawn_local(async move {
            let outcome = request_extraction(&payload).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("フィールド抽出失敗: {}", e));
            }
            set_session.update(|s| s.finish_extraction(outcome));
        });
    };

    // ROI可視化ハンドラ
    let on_visualize = move |_: ()| {
        let mut payload: Option<String> = None;
        set_session.update(|s| payload = s.begin_visualization().ok());
        let Some(payload) = payload else {
            return;
        };
        spawn_local(async move {
            let outcome = request_visualization(&payload).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("ROI可視化失敗: {}", e));
            }
            set_session.update(|s| s.finish_visualization(outcome));
        });
    };

    let on_toggle_debug = move |_: ()| {
        set_session.update(|s| s.toggle_debug_panel());
    };

    let on_close_debug = move |_: ()| {
        set_session.update(|s| s.close_debug_panel());
    };

    view! {
        <div class="container">
            <Header />

            <CameraPanel
                video_ref=video_ref
                canvas_ref=canvas_ref
                camera_running=camera_running
                overlay_on=overlay_on
                on_start_camera=on_start_camera
                on_toggle_overlay=on_toggle_overlay
            />

            <CaptureControls
                session=session
                on_select_side=on_select_side
                on_capture=on_capture
                on_extract=on_extract
                on_visualize=on_visualize
            />

            <ResultsPanel session=session />

            <DebugPanel
                session=session
                on_toggle=on_toggle_debug
                on_close=on_close_debug
            />
        </div>
    }
}
