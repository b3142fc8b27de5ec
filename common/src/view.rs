//! ビュー計算パイプライン
//!
//! 検索・カテゴリ絞り込み・並べ替えを純粋関数として実装する。
//! DOMへの反映はweb側コンポーネントの責務。

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::types::CatalogEntry;

/// カテゴリフィルタの「すべて」センチネル値
pub const ALL_CATEGORIES: &str = "all";

/// 並べ替えモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    TitleAsc,
    TitleDesc,
    Newest,
    Oldest,
}

impl SortMode {
    /// セレクトボックスの値から変換（未知の値はNone = 並べ替えなし）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title-asc" => Some(SortMode::TitleAsc),
            "title-desc" => Some(SortMode::TitleDesc),
            "newest" => Some(SortMode::Newest),
            "oldest" => Some(SortMode::Oldest),
            _ => None,
        }
    }

    /// セレクトボックスに渡す値
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
        }
    }
}

/// 現在のコントロール値からビューを計算する
///
/// 入力は変更せず、絞り込み・並べ替え済みの新しいVecを返す。
/// - query: トリム＋小文字化した上でタイトル部分一致（空文字は全件一致）
/// - category: ALL_CATEGORIES以外なら完全一致（大文字小文字を区別）
/// - sort_value: SortModeに解釈できない値は絞り込み順をそのまま保つ
pub fn compute_view(
    entries: &[CatalogEntry],
    query: &str,
    category: &str,
    sort_value: &str,
) -> Vec<CatalogEntry> {
    let q = query.trim().to_lowercase();

    let mut filtered: Vec<CatalogEntry> = entries
        .iter()
        .filter(|entry| {
            let matches_text = entry.title.to_lowercase().contains(&q);
            let matches_cat = category == ALL_CATEGORIES || entry.category == category;
            matches_text && matches_cat
        })
        .cloned()
        .collect();

    if let Some(mode) = SortMode::parse(sort_value) {
        sort_entries(&mut filtered, mode);
    }

    filtered
}

/// 絞り込み済みリストを並べ替える（安定ソート）
fn sort_entries(list: &mut [CatalogEntry], mode: SortMode) {
    match mode {
        SortMode::TitleAsc => list.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::TitleDesc => list.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortMode::Newest => list.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date))),
        SortMode::Oldest => list.sort_by(|a, b| parse_date(&a.date).cmp(&parse_date(&b.date))),
    }
}

/// タイトル比較（小文字化して比較し、同値ならバイト順で決める）
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// ISO 8601日付のパース（不正な値はNone）
///
/// NoneはOptionの全順序（None < Some）で比較されるため、
/// 不正な日付が混ざっていてもソートは失敗しない。
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// 表示用の日付フォーマット（例: "Dec 1, 2025"）
///
/// パースできない場合は元の文字列をそのまま返す。
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}
