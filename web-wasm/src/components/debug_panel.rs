//! デバッグ可視化パネルコンポーネント
//!
//! サーバーがROI枠を焼き込んだ画像を表示する。閉じても画像は
//! 破棄しないので、再度開けばネットワークなしで前回分が見える。

use check_ocr_common::session::CheckSession;
use leptos::prelude::*;

#[component]
pub fn DebugPanel<FT, FC>(
    session: ReadSignal<CheckSession>,
    on_toggle: FT,
    on_close: FC,
) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let has_image = move || session.get().visualization.is_some();
    let visible = move || session.get().debug_visible;

    view! {
        <div class="debug-panel">
            <Show when=has_image>
                <button
                    class="btn btn-small"
                    on:click={
                        let on_toggle = on_toggle.clone();
                        move |_| on_toggle(())
                    }
                >
                    {move || if visible() { "デバッグ画像を隠す" } else { "デバッグ画像を表示" }}
                </button>
            </Show>

            <Show when=move || visible() && has_image()>
                <div class="debug-viewer">
                    <button
                        class="btn btn-small btn-secondary"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "閉じる"
                    </button>
                    {move || {
                        session.get().visualization.map(|src| view! {
                            <img class="debug-image" src=src alt="ROI visualization" />
                        })
                    }}
                </div>
            </Show>
        </div>
    }
}
