//! フッターコンポーネント

use leptos::prelude::*;

/// 現在の年の4桁表記
fn year_label() -> String {
    js_sys::Date::new_0().get_full_year().to_string()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© " {year_label()} " Studio Gallery. All rights reserved."</p>
        </footer>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_year_label_is_four_digit_year() {
        let label = year_label();
        assert_eq!(label.len(), 4);
        assert!(label.chars().all(|c| c.is_ascii_digit()));
    }
}
