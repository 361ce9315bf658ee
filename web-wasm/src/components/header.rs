//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Check OCR - 小切手撮影・フィールド抽出"</h1>
        </header>
    }
}
