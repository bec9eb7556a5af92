#[cfg(test)]
mod tests {
    use vat::{
        ClauseBuilder, Condition, Connector, GenericSqlWriter, SqlWriter, SqliteSqlWriter,
        TableRef, Value, fields,
    };

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();
    const SQLITE: SqliteSqlWriter = SqliteSqlWriter::new();
    const USERS: TableRef = TableRef::new("users", "id");

    #[test]
    fn select_pk() {
        let mut out = String::new();
        WRITER.write_select_pk(&mut out, &USERS);
        assert_eq!(out, "SELECT * FROM users WHERE id = :id");
    }

    #[test]
    fn select_all() {
        let mut out = String::new();
        WRITER.write_select_all(&mut out, &USERS, None);
        assert_eq!(out, "SELECT * FROM users ORDER BY id DESC");
        let mut out = String::new();
        WRITER.write_select_all(&mut out, &USERS, Some("name ASC"));
        assert_eq!(out, "SELECT * FROM users ORDER BY name ASC");
    }

    #[test]
    fn select_where() {
        let mut out = String::new();
        WRITER.write_select_where(&mut out, &USERS, "age > 18", Some("name ASC"), Some(10), Some(20));
        assert_eq!(
            out,
            "SELECT * FROM users WHERE 1=1 AND age > 18 ORDER BY name ASC LIMIT 10 OFFSET 20"
        );
        let mut out = String::new();
        WRITER.write_select_where(&mut out, &USERS, "", None, None, None);
        assert_eq!(out, "SELECT * FROM users WHERE 1=1 ORDER BY id DESC");
    }

    #[test]
    fn select_last() {
        let mut out = String::new();
        WRITER.write_select_last(&mut out, &USERS);
        assert_eq!(out, "SELECT * FROM users ORDER BY id DESC LIMIT 1");
    }

    #[test]
    fn count() {
        let mut out = String::new();
        WRITER.write_count(&mut out, &USERS);
        assert_eq!(out, "SELECT COUNT(id) AS total FROM users USE INDEX(PRIMARY)");
        let mut out = String::new();
        SQLITE.write_count(&mut out, &USERS);
        assert_eq!(out, "SELECT COUNT(id) AS total FROM users");
    }

    #[test]
    fn insert() {
        let mut out = String::new();
        WRITER.write_insert(&mut out, &USERS, ["name", "email"].into_iter());
        assert_eq!(out, "INSERT INTO users (name,email) VALUES (:name,:email)");
    }

    #[test]
    fn update() {
        let mut out = String::new();
        WRITER.write_update(&mut out, &USERS, ["name", "email"].into_iter());
        assert_eq!(out, "UPDATE users SET name = :name, email = :email WHERE id = :id");
    }

    #[test]
    fn update_where() {
        let mut out = String::new();
        WRITER.write_update_where(&mut out, &USERS, ["name"].into_iter(), "status = 'old'", Some(5));
        assert_eq!(out, "UPDATE users SET name = :name WHERE status = 'old' LIMIT 5");
        let mut out = String::new();
        SQLITE.write_update_where(&mut out, &USERS, ["name"].into_iter(), "status = 'old'", Some(5));
        assert_eq!(
            out,
            "UPDATE users SET name = :name WHERE id IN (SELECT id FROM users WHERE status = 'old' LIMIT 5)"
        );
        let mut out = String::new();
        SQLITE.write_update_where(&mut out, &USERS, ["name"].into_iter(), "status = 'old'", None);
        assert_eq!(out, "UPDATE users SET name = :name WHERE status = 'old'");
    }

    #[test]
    fn delete() {
        let mut out = String::new();
        WRITER.write_delete(&mut out, &USERS);
        assert_eq!(out, "DELETE FROM users WHERE id = :id");
    }

    #[test]
    fn delete_where() {
        let mut out = String::new();
        WRITER.write_delete_where(&mut out, &USERS, "status = 'old'", Some(1));
        assert_eq!(out, "DELETE FROM users WHERE status = 'old' LIMIT 1");
        let mut out = String::new();
        SQLITE.write_delete_where(&mut out, &USERS, "status = 'old'", Some(1));
        assert_eq!(
            out,
            "DELETE FROM users WHERE id IN (SELECT id FROM users WHERE status = 'old' LIMIT 1)"
        );
    }

    #[test]
    fn columns_statement() {
        assert_eq!(
            WRITER.columns_statement(&USERS),
            ("SHOW COLUMNS FROM users".to_owned(), "Field")
        );
        assert_eq!(
            SQLITE.columns_statement(&USERS),
            ("PRAGMA table_info(users)".to_owned(), "name")
        );
    }

    #[test]
    fn transaction_statements() {
        assert_eq!(WRITER.begin_statement(), "START TRANSACTION");
        assert_eq!(SQLITE.begin_statement(), "BEGIN");
        assert_eq!(SQLITE.commit_statement(), "COMMIT");
        assert_eq!(SQLITE.rollback_statement(), "ROLLBACK");
    }

    #[test]
    fn clause_fields() {
        let clause = ClauseBuilder::new(Connector::And)
            .build(fields! { "age" => 30, "name" => "Ana" });
        assert_eq!(clause.text, "age = :age AND name = :name");
        assert_eq!(clause.params.get("age"), Some(&Value::Integer(Some(30))));
        assert_eq!(clause.params.get("name"), Some(&Value::from("Ana")));
    }

    #[test]
    fn clause_or() {
        let clause =
            ClauseBuilder::new(Connector::Or).build(fields! { "a" => 1, "b" => 2 });
        assert_eq!(clause.text, "a = :a OR b = :b");
    }

    #[test]
    fn clause_raw_passthrough() {
        let clause = ClauseBuilder::default().build("age > 18");
        assert_eq!(clause.text, "age > 18");
        assert!(clause.params.is_empty());
        assert!(Condition::from("  ").is_blank());
        assert!(!Condition::from("age > 18").is_blank());
    }

    #[test]
    fn clause_qualified_column() {
        let clause = ClauseBuilder::default().build(fields! { "users.id" => 7 });
        assert_eq!(clause.text, "users.id = :usersid");
        assert_eq!(clause.params.get("usersid"), Some(&Value::Integer(Some(7))));
    }

    // Qualified columns differing only by their prefix collide after the
    // dots are stripped: both terms are emitted, the last bound value wins.
    #[test]
    fn clause_collision_last_wins() {
        let clause = ClauseBuilder::default().build(fields! { "a.b" => 1, "ab" => 2 });
        assert_eq!(clause.text, "a.b = :ab AND ab = :ab");
        assert_eq!(clause.params.len(), 1);
        assert_eq!(clause.params.get("ab"), Some(&Value::Integer(Some(2))));
    }

    #[test]
    fn clause_blank_keys_filtered() {
        let clause = ClauseBuilder::default().build(fields! { "" => 1, "a" => 2 });
        assert_eq!(clause.text, "a = :a");
        assert_eq!(clause.params.len(), 1);
    }
}
