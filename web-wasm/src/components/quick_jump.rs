//! ページ移動ドロップダウンコンポーネント
//!
//! 選択が変わったら選択値をURLとして遷移する。
//! 先頭のプレースホルダ（空値）を選んでも何も起きない。

use leptos::prelude::*;

/// 移動先ページ（表示名, 遷移先）
const PAGES: [(&str, &str); 4] = [
    ("Home", "index.html"),
    ("Gallery", "gallery.html"),
    ("Services", "services.html"),
    ("Contact", "contact.html"),
];

/// 選択値を遷移先として解釈する（プレースホルダの空値はNone）
fn jump_target(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn QuickJump() -> impl IntoView {
    view! {
        <select
            id="quick-jump"
            class="quick-jump"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                if let Some(target) = jump_target(&value) {
                    let window = web_sys::window().unwrap();
                    let _ = window.location().set_href(target);
                }
            }
        >
            <option value="">"Jump to..."</option>
            {PAGES
                .iter()
                .map(|(label, href)| {
                    view! { <option value=*href>{*label}</option> }
                })
                .collect_view()}
        </select>
    }
}
