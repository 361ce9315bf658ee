//! カメラパネルコンポーネント
//!
//! ライブ映像の`<video>`と、その上に重ねる位置合わせガイド用の
//! `<canvas>`。canvasはpointer-events: noneで下のコントロールへの
//! 入力を奪わない。

use leptos::html;
use leptos::prelude::*;

#[component]
pub fn CameraPanel<FS, FT>(
    video_ref: NodeRef<html::Video>,
    canvas_ref: NodeRef<html::Canvas>,
    camera_running: ReadSignal<bool>,
    overlay_on: ReadSignal<bool>,
    on_start_camera: FS,
    on_toggle_overlay: FT,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FT: Fn(bool) + 'static + Clone,
{
    view! {
        <div class="camera-panel">
            <div class="camera-stage" style="position: relative;">
                <video node_ref=video_ref class="camera-video"></video>
                <canvas
                    node_ref=canvas_ref
                    class="alignment-overlay"
                    style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;"
                ></canvas>
            </div>

            <div class="camera-controls">
                <button
                    class="btn btn-primary"
                    disabled=move || camera_running.get()
                    on:click={
                        let on_start_camera = on_start_camera.clone();
                        move |_| on_start_camera(())
                    }
                >
                    {move || if camera_running.get() { "カメラ起動済み" } else { "カメラ起動" }}
                </button>

                <label class="overlay-toggle">
                    <input
                        type="checkbox"
                        checked=move || overlay_on.get()
                        on:change={
                            let on_toggle_overlay = on_toggle_overlay.clone();
                            move |_| on_toggle_overlay(!overlay_on.get_untracked())
                        }
                    />
                    "位置合わせガイドを表示"
                </label>
            </div>
        </div>
    }
}
