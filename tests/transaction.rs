#[cfg(test)]
mod tests {
    use vat::{Config, Connection, ConnectionManager, Gateway, SqliteDriver, TableRef, Value, fields};

    const USERS: Gateway = Gateway::new(TableRef::new("users", "id"));

    fn manager() -> ConnectionManager<SqliteDriver> {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = Config::new()
            .host("localhost")
            .database(":memory:")
            .user("vat")
            .password("vat");
        let mut manager = ConnectionManager::new(config);
        manager
            .execute("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, email TEXT)")
            .unwrap();
        manager
    }

    #[test]
    fn commit_makes_statements_visible() {
        let mut manager = manager();
        let mut transaction = manager.begin().unwrap();
        transaction
            .execute_sql("INSERT INTO users (name) VALUES ('Ana')")
            .unwrap();
        transaction
            .execute_sql("INSERT INTO users (name) VALUES ('Bea')")
            .unwrap();
        transaction.commit().unwrap();
        assert_eq!(USERS.total(manager.connection().unwrap()).unwrap(), 2);
    }

    #[test]
    fn rollback_reverts_statements() {
        let mut manager = manager();
        let mut transaction = manager.begin().unwrap();
        transaction
            .execute_sql("INSERT INTO users (name) VALUES ('Ana')")
            .unwrap();
        transaction.rollback().unwrap();
        assert_eq!(USERS.total(manager.connection().unwrap()).unwrap(), 0);
    }

    #[test]
    fn dropped_transaction_rolls_back() {
        let mut manager = manager();
        {
            let mut transaction = manager.begin().unwrap();
            transaction
                .execute_sql("INSERT INTO users (name) VALUES ('Ana')")
                .unwrap();
        }
        assert_eq!(USERS.total(manager.connection().unwrap()).unwrap(), 0);
    }

    #[test]
    fn gateway_operations_run_inside_a_transaction() {
        let mut manager = manager();
        let mut transaction = manager.begin().unwrap();
        let id = USERS
            .insert(&mut transaction, fields! { "name" => "Ana" })
            .unwrap();
        assert_eq!(id, Some(1));
        let record = USERS.find(&mut transaction, 1).unwrap().unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Ana")));
        transaction.commit().unwrap();
        let record = USERS.find(manager.connection().unwrap(), 1).unwrap().unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Ana")));
    }

    #[test]
    fn sequential_transactions_reuse_the_connection() {
        let mut manager = manager();
        let transaction = manager.begin().unwrap();
        transaction.commit().unwrap();
        let transaction = manager.begin().unwrap();
        transaction.rollback().unwrap();
        // A second `manager.begin()` while a guard is alive does not
        // compile: the transaction slot is single by construction.
    }
}
