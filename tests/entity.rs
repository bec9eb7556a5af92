#[cfg(test)]
mod tests {
    use vat::{
        Config, ConnectionManager, Entity, Error, SqliteDriver, TableBinding, Value, fields,
    };

    struct User;

    impl TableBinding for User {
        fn table_name() -> &'static str {
            "users"
        }
        fn primary_key() -> &'static str {
            "id"
        }
    }

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
    fn facade_crud() {
        let mut manager = manager();
        let connection = manager.connection().unwrap();

        let id = User::create(connection, fields! { "name" => "Ana", "email" => "a@x.com" })
            .unwrap()
            .unwrap();
        assert_eq!(id, 1);

        let record = User::get(connection, id).unwrap().unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Ana")));

        assert!(User::update_record(connection, fields! { "name" => "Ana M" }, id).unwrap());
        let record = User::get(connection, id).unwrap().unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Ana M")));

        User::create(connection, fields! { "name" => "Bea" }).unwrap();
        let records = User::get_all(connection, Some("name ASC")).unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&Value::from("Ana M")));

        let affected =
            User::update_where(connection, fields! { "email" => "x@x.com" }, "id > 0", None)
                .unwrap();
        assert_eq!(affected, 2);

        assert!(User::delete_record(connection, id).unwrap());
        assert!(User::get(connection, id).unwrap().is_none());
    }

    #[test]
    fn create_requires_data() {
        let mut manager = manager();
        let connection = manager.connection().unwrap();
        assert!(matches!(
            User::create(connection, fields! {}),
            Err(Error::Validation("uninformed data"))
        ));
    }

    #[test]
    fn update_requires_data_and_id() {
        let mut manager = manager();
        let connection = manager.connection().unwrap();
        assert!(matches!(
            User::update_record(connection, fields! {}, 1),
            Err(Error::Validation("uninformed data"))
        ));
        assert!(matches!(
            User::update_record(connection, fields! { "name" => "Ana" }, 0),
            Err(Error::Validation("id not given"))
        ));
        assert!(matches!(
            User::update_record(connection, fields! { "name" => "Ana" }, Value::Null),
            Err(Error::Validation("id not given"))
        ));
        assert!(matches!(
            User::update_where(connection, fields! {}, "id > 0", None),
            Err(Error::Validation("uninformed data"))
        ));
    }

    #[test]
    fn delete_requires_id() {
        let mut manager = manager();
        let connection = manager.connection().unwrap();
        assert!(matches!(
            User::delete_record(connection, ""),
            Err(Error::Validation("id not given"))
        ));
    }

    #[test]
    fn table_binding_metadata() {
        let gateway = User::gateway();
        assert_eq!(gateway.table().name, "users");
        assert_eq!(gateway.table().primary_key, "id");
    }
}
