//! 検索・絞り込み・並べ替えコントロール

use leptos::prelude::*;

use gallery_common::ALL_CATEGORIES;

#[component]
pub fn FilterBar(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    category: ReadSignal<String>,
    set_category: WriteSignal<String>,
    sort_value: ReadSignal<String>,
    set_sort_value: WriteSignal<String>,
    /// データセット由来のカテゴリ一覧（"all"はここで先頭に足す）
    category_options: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="form-group">
                <label for="search-input">"Search"</label>
                <input
                    type="search"
                    id="search-input"
                    placeholder="Search by title..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        set_query.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="category-select">"Category"</label>
                <select
                    id="category-select"
                    on:change=move |ev| {
                        set_category.set(event_target_value(&ev));
                    }
                >
                    <option
                        value=ALL_CATEGORIES
                        selected=move || category.get() == ALL_CATEGORIES
                    >
                        "All categories"
                    </option>
                    {category_options
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            let selected_value = name.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || category.get() == selected_value
                                >
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="sort-select">"Sort by"</label>
                <select
                    id="sort-select"
                    on:change=move |ev| {
                        set_sort_value.set(event_target_value(&ev));
                    }
                >
                    <option value="newest" selected=move || sort_value.get() == "newest">
                        "Newest first"
                    </option>
                    <option value="oldest" selected=move || sort_value.get() == "oldest">
                        "Oldest first"
                    </option>
                    <option value="title-asc" selected=move || sort_value.get() == "title-asc">
                        "Title A-Z"
                    </option>
                    <option value="title-desc" selected=move || sort_value.get() == "title-desc">
                        "Title Z-A"
                    </option>
                </select>
            </div>
        </div>
    }
}
