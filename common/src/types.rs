//! カタログエントリの型定義
//!
//! ギャラリーに表示する作品1件分のメタデータ。
//! データセットはページセッション中は不変で、派生ビューは常に再計算される。

use serde::{Deserialize, Serialize};

/// ギャラリーの1エントリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogEntry {
    /// 作品タイトル（実用上データセット内で一意。コードでは強制しない）
    pub title: String,

    /// カテゴリタグ（"Brand" / "Packaging" など）
    pub category: String,

    /// ISO 8601形式の日付（ソートと表示にのみ使用）
    pub date: String,

    /// 外部画像URL（この層では中身を解釈しない）
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_default() {
        let entry = CatalogEntry::default();
        assert_eq!(entry.title, "");
        assert_eq!(entry.category, "");
        assert_eq!(entry.date, "");
        assert_eq!(entry.image, "");
    }

    #[test]
    fn test_catalog_entry_serialize() {
        let entry = CatalogEntry {
            title: "Mint Foil Business Card".to_string(),
            category: "Brand".to_string(),
            date: "2025-11-12".to_string(),
            image: "https://picsum.photos/seed/foilcard/900/700".to_string(),
        };

        let json = serde_json::to_string(&entry).expect("シリアライズ失敗");
        assert!(json.contains("\"title\":\"Mint Foil Business Card\""));
        assert!(json.contains("\"category\":\"Brand\""));
        assert!(json.contains("\"date\":\"2025-11-12\""));
    }

    #[test]
    fn test_catalog_entry_deserialize() {
        let json = r#"{
            "title": "Soft-Touch Packaging Mock",
            "category": "Packaging",
            "date": "2025-12-01",
            "image": "https://picsum.photos/seed/packaging/900/700"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.title, "Soft-Touch Packaging Mock");
        assert_eq!(entry.category, "Packaging");
        assert_eq!(entry.date, "2025-12-01");
    }

    #[test]
    fn test_catalog_entry_deserialize_missing_fields() {
        // 欠けたフィールドはデフォルト値で埋まることを確認
        let json = r#"{"title": "Untitled Study"}"#;

        let entry: CatalogEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.title, "Untitled Study");
        assert_eq!(entry.category, ""); // デフォルト値
        assert_eq!(entry.date, ""); // デフォルト値
    }

    #[test]
    fn test_catalog_entry_roundtrip() {
        let original = CatalogEntry {
            title: "Warm Accent Hang Tag".to_string(),
            category: "Packaging".to_string(),
            date: "2025-08-21".to_string(),
            image: "https://picsum.photos/seed/hangtag/900/700".to_string(),
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: CatalogEntry = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original, restored);
    }
}
