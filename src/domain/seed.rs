use crate::domain::entities::column::Column;
use crate::domain::entities::row::Row;

pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("age", "Age"),
        Column::new("role", "Role"),
    ]
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        Row::new("1")
            .with("name", "bonsan fuad ")
            .with("email", "bonsan@example.com")
            .with("age", 30)
            .with("role", "Developer"),
        Row::new("2")
            .with("name", "Borifan Dabasa")
            .with("email", "borifan@example.com")
            .with("age", 25)
            .with("role", "Designer"),
        Row::new("3")
            .with("name", "boka korjo")
            .with("email", "bokaexample.com")
            .with("age", 35)
            .with("role", "Manager"),
    ]
}
