//! ヘッダーコンポーネント

use leptos::prelude::*;

use crate::components::quick_jump::QuickJump;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Studio Gallery - Selected Work"</h1>
            <nav class="header-nav">
                <QuickJump />
            </nav>
        </header>
    }
}
