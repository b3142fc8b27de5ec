//! ギャラリーグリッドコンポーネント
//!
//! 計算済みビューをカードとして描画する。結果が空のときは
//! カードを出さずに空状態メッセージだけを表示する。

use leptos::prelude::*;

use gallery_common::{format_date, CatalogEntry};

/// カード内の固定リンク先（実コンテンツ差し替えまでのプレースホルダ）
const DETAILS_URL: &str = "https://en.wikipedia.org/wiki/Web_development";

#[component]
pub fn GalleryGrid(entries: Memo<Vec<CatalogEntry>>) -> impl IntoView {
    view! {
        <Show
            when=move || !entries.get().is_empty()
            fallback=|| {
                view! {
                    <p class="empty-state">
                        "No results. Try a different search or category."
                    </p>
                }
            }
        >
            <div class="gallery-grid">
                <For
                    each=move || entries.get()
                    key=|entry| entry.title.clone()
                    children=move |entry| {
                        view! { <GalleryCard entry=entry /> }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn GalleryCard(entry: CatalogEntry) -> impl IntoView {
    view! {
        <article class="card">
            <div class="thumb">
                <img src=entry.image.clone() alt=entry.title.clone() />
                <div class="badge">{entry.category.clone()}</div>
            </div>
            <div class="card-body">
                <h3 class="card-title">{entry.title.clone()}</h3>
                <div class="meta">
                    <span>{format_date(&entry.date)}</span>
                    <span>{entry.category.clone()}</span>
                </div>
                <a
                    class="btn"
                    href=DETAILS_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View details (Placeholder) ↗"
                </a>
            </div>
        </article>
    }
}
