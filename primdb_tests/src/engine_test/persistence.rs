use primdb_core::Database;
use serde_json::Value as JsonValue;

use super::*;

#[test]
fn test_rows_survive_reopen() -> anyhow::Result<()> {
    let root = test_root();
    {
        let mut db = Database::open(&root);
        db.execute("create_table users name:str age:int").unwrap();
        db.execute(r#"insert into users values ("Alice", 30)"#).unwrap();
    }

    let mut db = Database::open(&root);
    let result = db.execute("select from users where ID = 1")?;
    assert!(result.contains("| Alice |"));
    assert!(result.contains("| 30 "));
    Ok(())
}

#[test]
fn test_catalog_file_shape() -> anyhow::Result<()> {
    let root = test_root();
    let mut db = Database::open(&root);
    db.execute("create_table users name:str active:bool").unwrap();

    let content = std::fs::read_to_string(root.join("db_meta.json"))?;
    let meta: JsonValue = serde_json::from_str(&content)?;
    // One object: table name -> ordered {column -> type string}.
    let users = meta.get("users").and_then(JsonValue::as_object).unwrap();
    let keys: Vec<&String> = users.keys().collect();
    assert_eq!(keys, ["ID", "name", "active"]);
    assert_eq!(users["ID"], "int");
    assert_eq!(users["name"], "str");
    assert_eq!(users["active"], "bool");
    Ok(())
}

#[test]
fn test_rows_file_shape() -> anyhow::Result<()> {
    let root = test_root();
    let mut db = Database::open(&root);
    db.execute("create_table users name:str active:bool").unwrap();
    db.execute(r#"insert into users values ("Alice", true)"#).unwrap();

    let content = std::fs::read_to_string(root.join("data").join("users.json"))?;
    let rows: JsonValue = serde_json::from_str(&content)?;
    // Array of objects; values map straight onto JSON scalars.
    let row = &rows.as_array().unwrap()[0];
    assert_eq!(row["ID"], 1);
    assert_eq!(row["name"], "Alice");
    assert_eq!(row["active"], true);
    Ok(())
}

#[test]
fn test_failed_insert_writes_no_rows_file() {
    let root = test_root();
    let mut db = Database::open(&root);
    db.execute("create_table users name:str age:int").unwrap();
    let _ = db.execute(r#"insert into users values ("Alice")"#);
    assert!(!root.join("data").join("users.json").exists());
}

#[test]
fn test_drop_table_removes_rows_file() {
    let root = test_root();
    let mut db = Database::open(&root);
    db.execute("create_table users name:str").unwrap();
    db.execute(r#"insert into users values ("Alice")"#).unwrap();
    assert!(root.join("data").join("users.json").exists());

    db.execute("drop_table users").unwrap();
    assert!(!root.join("data").join("users.json").exists());

    // Re-creating the table starts from a clean slate and ID=1.
    db.execute("create_table users name:str").unwrap();
    assert_eq!(
        db.execute(r#"insert into users values ("Bob")"#).unwrap(),
        "inserted row with ID=1 into users"
    );
}

#[test]
fn test_two_handles_over_same_root_stay_consistent() {
    let root = test_root();
    let mut writer = Database::open(&root);
    let mut reader = Database::open(&root);

    writer.execute("create_table users name:str").unwrap();
    writer.execute(r#"insert into users values ("Alice")"#).unwrap();

    // The catalog is reloaded per command, so the second handle sees the
    // table without being reopened.
    let result = reader.execute("select from users").unwrap();
    assert!(result.contains("Alice"));
}

#[test]
fn test_update_zero_matches_does_not_rewrite_file() -> anyhow::Result<()> {
    let root = test_root();
    let mut db = Database::open(&root);
    db.execute("create_table users name:str age:int").unwrap();
    db.execute(r#"insert into users values ("Alice", 30)"#).unwrap();

    let path = root.join("data").join("users.json");
    let before = std::fs::read_to_string(&path)?;
    db.execute("update users set age = 99 where age = 77").unwrap();
    let after = std::fs::read_to_string(&path)?;
    assert_eq!(before, after);
    Ok(())
}
