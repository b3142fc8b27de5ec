//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use gallery_common::{catalog, compute_view, ALL_CATEGORIES};

use crate::components::{
    filter_bar::FilterBar,
    footer::Footer,
    gallery_grid::GalleryGrid,
    header::Header,
};

/// 並べ替えの初期値
const DEFAULT_SORT: &str = "newest";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // シードカタログはページセッション中は不変
    let entries = match catalog::load_catalog() {
        Ok(entries) => entries,
        Err(err) => {
            // 読み込みに失敗してもページ全体は落とさず、空のギャラリーを出す
            leptos::logging::warn!("カタログの読み込みに失敗: {err}");
            Vec::new()
        }
    };
    let category_options = catalog::categories(&entries);

    // コントロールの現在値。ビューは保存せず毎回ここから導出する
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());
    let (sort_value, set_sort_value) = signal(DEFAULT_SORT.to_string());

    // 入力が変わるたびに 絞り込み → 並べ替え を全件やり直す
    let view_entries = Memo::new(move |_| {
        compute_view(&entries, &query.get(), &category.get(), &sort_value.get())
    });

    view! {
        <div class="container">
            <Header />

            <FilterBar
                query=query
                set_query=set_query
                category=category
                set_category=set_category
                sort_value=sort_value
                set_sort_value=set_sort_value
                category_options=category_options
            />

            <GalleryGrid entries=view_entries />

            <Footer />
        </div>
    }
}
