//! 撮影・抽出操作コンポーネント
//!
//! 抽出/可視化ボタンはloading中も無効化しない: 2つの操作を重ねて
//! 発火できるのは仕様で、共有のloading/errorは後着が勝つ。

use check_ocr_common::session::CheckSession;
use check_ocr_common::types::Side;
use leptos::prelude::*;

#[component]
pub fn CaptureControls<FS, FC, FE, FV>(
    session: ReadSignal<CheckSession>,
    on_select_side: FS,
    on_capture: FC,
    on_extract: FE,
    on_visualize: FV,
) -> impl IntoView
where
    FS: Fn(Side) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FE: Fn(()) + 'static + Clone,
    FV: Fn(()) + 'static + Clone,
{
    let selected = move || session.get().selected_side;

    view! {
        <div class="capture-controls">
            <div class="side-selector">
                <span class="side-label">"撮影面:"</span>
                <button
                    class="btn btn-small"
                    class:active=move || selected() == Side::Front
                    on:click={
                        let on_select_side = on_select_side.clone();
                        move |_| on_select_side(Side::Front)
                    }
                >
                    "表面"
                </button>
                <button
                    class="btn btn-small"
                    class:active=move || selected() == Side::Back
                    on:click={
                        let on_select_side = on_select_side.clone();
                        move |_| on_select_side(Side::Back)
                    }
                >
                    "裏面"
                </button>
            </div>

            <div class="action-buttons">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_capture = on_capture.clone();
                        move |_| on_capture(())
                    }
                >
                    "撮影"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_extract = on_extract.clone();
                        move |_| on_extract(())
                    }
                >
                    "フィールド抽出"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_visualize = on_visualize.clone();
                        move |_| on_visualize(())
                    }
                >
                    "ROIデバッグ画像"
                </button>
            </div>

            <div class="thumbnails">
                {move || {
                    session.get().front_image.map(|src| view! {
                        <figure class="thumb">
                            <img src=src alt="front" />
                            <figcaption>"表面"</figcaption>
                        </figure>
                    })
                }}
                {move || {
                    session.get().back_image.map(|src| view! {
                        <figure class="thumb">
                            <img src=src alt="back" />
                            <figcaption>"裏面"</figcaption>
                        </figure>
                    })
                }}
            </div>
        </div>
    }
}
