//! 抽出結果パネルコンポーネント
//!
//! サービスレベルの失敗（success=false）でも部分結果は届くので、
//! エラーバナーとOCRテキスト・構造化フィールドは同時に表示する。

use check_ocr_common::protocol::StructuredData;
use check_ocr_common::session::CheckSession;
use leptos::prelude::*;

#[component]
pub fn ResultsPanel(session: ReadSignal<CheckSession>) -> impl IntoView {
    let raw_text = move || session.get().raw_text;

    view! {
        <div class="results-panel">
            <Show when=move || session.get().loading>
                <p class="loading">"サービス応答待ち..."</p>
            </Show>

            {move || {
                session.get().error.map(|msg| view! {
                    <p class="error-banner">{msg}</p>
                })
            }}

            <Show when=move || !session.get().raw_text.is_empty()>
                <div class="raw-text">
                    <h3>"OCRテキスト"</h3>
                    <pre>{raw_text}</pre>
                </div>
            </Show>

            {move || {
                session.get().structured.map(|data| view! {
                    <StructuredFields data=data />
                })
            }}
        </div>
    }
}

#[component]
fn StructuredFields(data: StructuredData) -> impl IntoView {
    let field = |label: &'static str, value: Option<String>| {
        view! {
            <tr>
                <th>{label}</th>
                <td>{value.unwrap_or_else(|| "-".to_string())}</td>
            </tr>
        }
    };

    let badge_class = if data.extraction_success {
        "badge ok"
    } else {
        "badge ng"
    };
    let badge_text = if data.extraction_success {
        "抽出成功"
    } else {
        "抽出失敗"
    };

    view! {
        <div class="structured-fields">
            <h3>
                "抽出フィールド"
                <span class=badge_class>{badge_text}</span>
            </h3>
            <table>
                <tbody>
                    {field("Payee", data.payee_name)}
                    {field("Date", data.date)}
                    {field("Amount", data.amount)}
                    {field("Memo", data.memo)}
                    {field("Routing No.", data.routing_number)}
                    {field("Account No.", data.account_number)}
                    {field("Check No.", data.check_number)}
                </tbody>
            </table>
        </div>
    }
}
