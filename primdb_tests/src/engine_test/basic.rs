use super::*;

#[test]
fn test_create_table_synthesizes_id_first() {
    let mut db = test_db();
    let result = db.execute("create_table users name:str age:int").unwrap();
    assert_eq!(result, "created table users (ID:int, name:str, age:int)");
}

#[test]
fn test_create_table_keeps_user_declared_id() {
    let mut db = test_db();
    let result = db.execute("create_table users id:int name:str").unwrap();
    assert_eq!(result, "created table users (id:int, name:str)");
}

#[test]
fn test_create_table_moves_declared_id_first() {
    let mut db = test_db();
    let result = db.execute("create_table users name:str id:int").unwrap();
    assert_eq!(result, "created table users (id:int, name:str)");
}

#[test]
fn test_create_table_rejects_non_int_id() {
    let mut db = test_db();
    let err = db.execute("create_table users id:str name:str").unwrap_err();
    assert!(err.to_string().contains("must be of type int"));
}

#[test]
fn test_create_table_type_names_case_insensitive() {
    let mut db = test_db();
    let result = db.execute("create_table users name:STR age:Int").unwrap();
    assert_eq!(result, "created table users (ID:int, name:str, age:int)");
}

#[test]
fn test_create_duplicate_table() {
    let mut db = test_db();
    db.execute("create_table users name:str").unwrap();
    let err = db.execute("create_table users name:str").unwrap_err();
    assert_eq!(err.to_string(), "Table 'users' already exists");
    // Catalog unchanged: original schema still answers.
    let info = db.execute("info users").unwrap();
    assert!(info.contains("columns: ID:int, name:str"));
}

#[test]
fn test_create_table_bad_spec_no_colon() {
    let mut db = test_db();
    let err = db.execute("create_table users name").unwrap_err();
    assert!(err.to_string().contains("Invalid column spec"));
}

#[test]
fn test_create_table_bad_spec_unknown_type() {
    let mut db = test_db();
    let err = db.execute("create_table users age:float").unwrap_err();
    assert!(err.to_string().contains("Invalid column spec"));
}

#[test]
fn test_create_table_bad_spec_empty_parts() {
    let mut db = test_db();
    assert!(db.execute(r#"create_table users ":int""#).is_err());
    assert!(db.execute(r#"create_table users "name:""#).is_err());
}

#[test]
fn test_create_table_duplicate_column() {
    let mut db = test_db();
    let err = db
        .execute("create_table users name:str name:int")
        .unwrap_err();
    assert_eq!(err.to_string(), "Duplicate column 'name'");
}

#[test]
fn test_create_table_two_id_columns_rejected() {
    let mut db = test_db();
    let err = db.execute("create_table users id:int ID:int").unwrap_err();
    assert!(err.to_string().contains("Duplicate column"));
}

#[test]
fn test_failed_create_leaves_catalog_unchanged() {
    let mut db = test_db();
    let _ = db.execute("create_table users name:str age:float");
    assert_eq!(db.execute("list_tables").unwrap(), "no tables");
}

#[test]
fn test_drop_table() {
    let mut db = test_db();
    db.execute("create_table users name:str").unwrap();
    let result = db.execute("drop_table users").unwrap();
    assert_eq!(result, "dropped table users");
    assert_eq!(db.execute("list_tables").unwrap(), "no tables");
}

#[test]
fn test_drop_missing_table() {
    let mut db = test_db();
    let err = db.execute("drop_table users").unwrap_err();
    assert_eq!(err.to_string(), "Table 'users' does not exist");
}

#[test]
fn test_list_tables_sorted() {
    let mut db = test_db();
    db.execute("create_table zoo animal:str").unwrap();
    db.execute("create_table users name:str").unwrap();
    assert_eq!(db.execute("list_tables").unwrap(), "users\nzoo");
}

#[test]
fn test_info_reports_columns_and_count() {
    let mut db = test_db();
    seed_users(&mut db);
    let info = db.execute("info users").unwrap();
    assert_eq!(info, "table users\ncolumns: ID:int, name:str, age:int\nrows: 2");
}

#[test]
fn test_info_missing_table() {
    let mut db = test_db();
    let err = db.execute("info users").unwrap_err();
    assert_eq!(err.to_string(), "Table 'users' does not exist");
}

#[test]
fn test_help_lists_commands() {
    let mut db = test_db();
    let help = db.execute("help").unwrap();
    for verb in ["create_table", "drop_table", "insert into", "select from", "update", "delete from", "info", "list_tables", "exit"] {
        assert!(help.contains(verb), "help is missing '{verb}'");
    }
}

#[test]
fn test_exit_is_a_clean_command() {
    let mut db = test_db();
    assert_eq!(db.execute("exit").unwrap(), "bye");
}
