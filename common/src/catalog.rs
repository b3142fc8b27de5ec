//! シードカタログ
//!
//! 展示する作品データをJSONとして埋め込み、起動時に一度だけ
//! デシリアライズする。実データへの差し替えはJSONの編集のみで済む。

use crate::error::Result;
use crate::types::CatalogEntry;

/// 埋め込みシードデータ
const SEED_JSON: &str = include_str!("../assets/catalog.json");

/// シードカタログを読み込む
pub fn load_catalog() -> Result<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(SEED_JSON)?;
    Ok(entries)
}

/// データセットに現れるカテゴリを出現順・重複なしで返す
///
/// カテゴリセレクタはこのリストから生成するため、
/// 選択肢とデータの食い違いは構造上起きない。
pub fn categories(entries: &[CatalogEntry]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in entries {
        if !seen.contains(&entry.category) {
            seen.push(entry.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog() {
        let entries = load_catalog().expect("シードカタログの読み込み失敗");
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].title, "Mint Foil Business Card");
        assert_eq!(entries[8].title, "Brand Card - Quiet Luxury");
    }

    #[test]
    fn test_load_catalog_entries_are_complete() {
        let entries = load_catalog().expect("シードカタログの読み込み失敗");
        for entry in &entries {
            assert!(!entry.title.is_empty());
            assert!(!entry.category.is_empty());
            assert_eq!(entry.date.len(), 10, "ISO 8601日付でない: {}", entry.date);
            assert!(entry.image.starts_with("https://"));
        }
    }

    #[test]
    fn test_categories_unique_in_order() {
        let entries = load_catalog().expect("シードカタログの読み込み失敗");
        let cats = categories(&entries);
        assert_eq!(cats, vec!["Brand", "Stationery", "Packaging", "Editorial"]);
    }

    #[test]
    fn test_categories_empty_dataset() {
        assert!(categories(&[]).is_empty());
    }
}
