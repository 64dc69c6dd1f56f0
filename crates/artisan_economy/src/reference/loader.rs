//! Reading and parsing the reference data files.
//!
//! Files are lists of records in comment-tolerant JSON (`//` and `/* */`
//! comments, as written by hand-maintained game-data dumps). A `null`
//! document is an empty list.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{EconomyError, EconomyResult};

/// Parses a record list.
///
/// # Errors
///
/// Returns `Parse` if `content` is not a list of `T`.
pub fn parse_records<T: DeserializeOwned>(path: &Path, content: &str) -> EconomyResult<Vec<T>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    json5::from_str::<Option<Vec<T>>>(content)
        .map(Option::unwrap_or_default)
        .map_err(|e| EconomyError::parse(path, e))
}

/// Reads and parses a record list without blocking the runtime.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Parse` if it does not parse.
pub async fn read_records<T: DeserializeOwned>(path: &Path) -> EconomyResult<Vec<T>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| EconomyError::io(path, &e))?;

    parse_records(path, &content)
}

/// [`read_records`], degrading any failure to an empty list.
pub(crate) async fn read_records_or_empty<T: DeserializeOwned>(path: &Path, source: &'static str) -> Vec<T> {
    match read_records(path).await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(source, error = %err, "failed to load reference data, using an empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{JournalMapping, SimpleItemRecord};
    use artisan_core::JournalProfession;

    fn path() -> &'static Path {
        Path::new("GameFiles/test.json")
    }

    #[test]
    fn test_comments_and_string_numbers() {
        let content = r#"
            // exported by the item dump tool
            [
                { "UniqueName": "T4_JOURNAL_MAGE_EMPTY", "Index": "1021" },
                /* enchanted variant */
                { "UniqueName": "T5_2H_BOW@1", "Index": 2048, "LocalizationNameVariable": "@ITEMS_T5_2H_BOW" }
            ]
        "#;

        let items: Vec<SimpleItemRecord> = parse_records(path(), content).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].index, 1021);
        assert_eq!(items[1].index, 2048);
        assert_eq!(items[1].localization_name_variable.as_deref(), Some("@ITEMS_T5_2H_BOW"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let content = r#"[{ "UniqueName": "T4_BAG", "LocalizedNames": { "EN-US": "Adept's Bag" } }]"#;
        let items: Vec<SimpleItemRecord> = parse_records(path(), content).unwrap();
        assert_eq!(items, vec![SimpleItemRecord::new("T4_BAG", 0)]);
    }

    #[test]
    fn test_journal_ids_numeric_or_string() {
        let content = r#"[
            { "Name": "SPRITE_STAFF", "Id": 1 },
            { "Name": "SPRITE_BOW", "Id": "2" },
            { "name": "SPRITE_SWORD", "id": 3 },
            { "Name": "SPRITE_PICKAXE", "Id": " 4 " },
            { "Name": "SPRITE_ODD", "Id": 17 },
        ]"#;

        let mappings: Vec<JournalMapping> = parse_records(path(), content).unwrap();
        let ids: Vec<_> = mappings.iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                JournalProfession::Mage,
                JournalProfession::Hunter,
                JournalProfession::Warrior,
                JournalProfession::ToolMaker,
                JournalProfession::Unknown,
            ]
        );
    }

    #[test]
    fn test_null_document_is_empty() {
        let mappings: Vec<JournalMapping> = parse_records(path(), "null").unwrap();
        assert!(mappings.is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let items: Vec<SimpleItemRecord> = parse_records(path(), "\u{feff}[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_is_parse_error() {
        let result: EconomyResult<Vec<SimpleItemRecord>> = parse_records(path(), "[{ \"UniqueName\": ");
        assert!(matches!(result, Err(EconomyError::Parse { .. })));

        let wrong_shape: EconomyResult<Vec<SimpleItemRecord>> =
            parse_records(path(), r#"{ "UniqueName": "T4_BAG" }"#);
        assert!(matches!(wrong_shape, Err(EconomyError::Parse { .. })));

        let bad_number: EconomyResult<Vec<SimpleItemRecord>> =
            parse_records(path(), r#"[{ "UniqueName": "T4_BAG", "Index": "many" }]"#);
        assert!(matches!(bad_number, Err(EconomyError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result: EconomyResult<Vec<SimpleItemRecord>> =
            read_records(Path::new("/definitely/not/here/Items.json")).await;
        assert!(matches!(result, Err(EconomyError::Io { .. })));
    }

    #[tokio::test]
    async fn test_missing_file_degrades_to_empty() {
        let records: Vec<JournalMapping> =
            read_records_or_empty(Path::new("/definitely/not/here/Journal.json"), "journal mappings").await;
        assert!(records.is_empty());
    }
}
