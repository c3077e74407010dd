use super::*;

#[test]
fn test_rows_save_load_roundtrip() {
    let schema = users_schema();
    let rows = vec![
        vec![Value::Int(1), Value::Str("Alice".to_string())],
        vec![Value::Int(2), Value::Str("Bob".to_string())],
    ];

    let mut storage = DiskStorage::new(temp_root("rows_roundtrip"));
    storage.save_rows("users", &schema, &rows).unwrap();

    let loaded = storage.load_rows("users", &schema).unwrap();
    assert_eq!(loaded, rows);
}

#[test]
fn test_load_rows_missing_store_is_empty() {
    let storage = DiskStorage::new(temp_root("rows_missing"));
    let rows = storage.load_rows("users", &users_schema()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_rows_missing_column_errors() {
    let root = temp_root("rows_missing_column");
    std::fs::create_dir_all(root.join("data")).unwrap();
    std::fs::write(root.join("data").join("users.json"), r#"[{"ID": 1}]"#).unwrap();

    let storage = DiskStorage::new(&root);
    let err = storage.load_rows("users", &users_schema()).unwrap_err();
    assert!(err.to_string().contains("missing column 'name'"));
}

#[test]
fn test_load_rows_type_mismatch_errors() {
    let root = temp_root("rows_bad_type");
    std::fs::create_dir_all(root.join("data")).unwrap();
    std::fs::write(
        root.join("data").join("users.json"),
        r#"[{"ID": 1, "name": 7}]"#,
    )
    .unwrap();

    let storage = DiskStorage::new(&root);
    let err = storage.load_rows("users", &users_schema()).unwrap_err();
    assert!(err.to_string().contains("non-str value in column 'name'"));
}

#[test]
fn test_load_rows_rejects_float_ids() {
    let root = temp_root("rows_float_id");
    std::fs::create_dir_all(root.join("data")).unwrap();
    std::fs::write(
        root.join("data").join("users.json"),
        r#"[{"ID": 1.5, "name": "x"}]"#,
    )
    .unwrap();

    let storage = DiskStorage::new(&root);
    assert!(storage.load_rows("users", &users_schema()).is_err());
}

#[test]
fn test_remove_rows_is_idempotent() {
    let mut storage = DiskStorage::new(temp_root("rows_remove"));
    // Nothing saved yet; removal must still succeed.
    storage.remove_rows("users").unwrap();

    let schema = users_schema();
    storage
        .save_rows("users", &schema, &[vec![Value::Int(1), Value::Str("a".to_string())]])
        .unwrap();
    storage.remove_rows("users").unwrap();
    assert!(storage.load_rows("users", &schema).unwrap().is_empty());
    storage.remove_rows("users").unwrap();
}
