use std::{collections::BTreeSet, io::Cursor};

use calamine::{DataType, Reader, Xlsx, open_workbook_from_rs};

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError, Expense, ExportFormat, ExportRow};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn tuples(expenses: &[Expense]) -> Vec<(&str, &str, i64)> {
    expenses
        .iter()
        .map(|e| (e.category.as_str(), e.product.as_str(), e.cost))
        .collect()
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let (engine, db) = engine_with_db().await;
    engine.create_expense("Food", "Coffee", 300).await.unwrap();

    migration::Migrator::up(&db, None).await.unwrap();

    assert_eq!(engine.list_expenses().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_expense_assigns_increasing_ids() {
    let (engine, _db) = engine_with_db().await;

    let first = engine.create_expense("Food", "Coffee", 300).await.unwrap();
    let second = engine.create_expense("Food", "Tea", 450).await.unwrap();
    assert!(second > first);

    let expenses = engine.list_expenses().await.unwrap();
    assert_eq!(
        expenses,
        vec![
            Expense {
                id: first,
                category: "Food".to_string(),
                product: "Coffee".to_string(),
                cost: 300,
            },
            Expense {
                id: second,
                category: "Food".to_string(),
                product: "Tea".to_string(),
                cost: 450,
            },
        ]
    );
}

#[tokio::test]
async fn bulk_add_writes_every_pair_in_order() {
    let (engine, _db) = engine_with_db().await;
    engine.create_expense("Rent", "Apartment", 50000).await.unwrap();

    let created = engine
        .bulk_add("Transport", "Train, Bus ,Taxi", "220, 180 , 2400")
        .await
        .unwrap();
    assert_eq!(created, 3);

    let expenses = engine.list_expenses().await.unwrap();
    assert_eq!(
        tuples(&expenses),
        vec![
            ("Rent", "Apartment", 50000),
            ("Transport", "Train", 220),
            ("Transport", "Bus", 180),
            ("Transport", "Taxi", 2400),
        ]
    );

    let ids: BTreeSet<i64> = expenses.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn bulk_add_with_count_mismatch_writes_nothing() {
    let (engine, _db) = engine_with_db().await;
    engine.create_expense("Food", "Bread", 250).await.unwrap();
    let before = engine.list_expenses().await.unwrap();

    let err = engine
        .bulk_add("Food", "Coffee, Tea, Cake", "300, 450")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::CountMismatch {
            products: 3,
            costs: 2
        }
    );
    assert_eq!(engine.list_expenses().await.unwrap(), before);
}

#[tokio::test]
async fn bulk_add_with_bad_cost_writes_nothing() {
    let (engine, _db) = engine_with_db().await;
    engine.create_expense("Food", "Bread", 250).await.unwrap();
    let before = engine.list_expenses().await.unwrap();

    let err = engine
        .bulk_add("Food", "Coffee, Tea", "300, four hundred")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidCostFormat("four hundred".to_string())
    );
    assert_eq!(engine.list_expenses().await.unwrap(), before);
}

#[tokio::test]
async fn delete_expenses_removes_only_listed_ids() {
    let (engine, _db) = engine_with_db().await;
    engine
        .bulk_add("Food", "Coffee, Tea, Cake, Juice", "300, 450, 500, 200")
        .await
        .unwrap();
    let expenses = engine.list_expenses().await.unwrap();

    let deleted = engine
        .delete_expenses(&[expenses[0].id, expenses[2].id])
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    let remaining = engine.list_expenses().await.unwrap();
    assert_eq!(remaining, vec![expenses[1].clone(), expenses[3].clone()]);
}

#[tokio::test]
async fn delete_unknown_ids_is_a_noop() {
    let (engine, _db) = engine_with_db().await;
    engine.create_expense("Food", "Coffee", 300).await.unwrap();
    let before = engine.list_expenses().await.unwrap();

    assert_eq!(engine.delete_expenses(&[9999]).await.unwrap(), 0);
    assert_eq!(engine.delete_expenses(&[]).await.unwrap(), 0);
    assert_eq!(engine.list_expenses().await.unwrap(), before);
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
    let (engine, _db) = engine_with_db().await;
    engine.create_expense("Food", "Coffee", 300).await.unwrap();
    let last = engine.create_expense("Food", "Tea", 450).await.unwrap();

    engine.delete_expenses(&[last]).await.unwrap();
    let next = engine.create_expense("Food", "Cake", 500).await.unwrap();

    assert!(next > last);
}

#[tokio::test]
async fn expense_categories_are_free_text() {
    let (engine, db) = engine_with_db().await;
    engine.add_category("Food").await.unwrap();
    engine.bulk_add("Food", "Coffee", "300").await.unwrap();

    // Removing the category leaves expenses untouched.
    engine.delete_category("Food").await.unwrap();
    let expenses = engine.list_expenses().await.unwrap();
    assert_eq!(tuples(&expenses), vec![("Food", "Coffee", 300)]);

    // Categories never registered are accepted as well.
    engine.bulk_add("Travel", "Ferry", "3000").await.unwrap();

    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            "SELECT COUNT(*) AS n FROM expenses",
        ))
        .await
        .unwrap()
        .unwrap();
    let count: i64 = row.try_get("", "n").unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn coffee_and_tea_scenario() {
    let (engine, _db) = engine_with_db().await;
    engine.add_category("Food").await.unwrap();

    let created = engine
        .bulk_add("Food", "Coffee, Tea", "300, 450")
        .await
        .unwrap();
    assert_eq!(created, 2);

    let expenses = engine.list_expenses().await.unwrap();
    assert_eq!(
        tuples(&expenses),
        vec![("Food", "Coffee", 300), ("Food", "Tea", 450)]
    );

    let coffee = expenses
        .iter()
        .find(|e| e.product == "Coffee")
        .map(|e| e.id)
        .unwrap();
    engine.delete_expenses(&[coffee]).await.unwrap();

    let expenses = engine.list_expenses().await.unwrap();
    assert_eq!(tuples(&expenses), vec![("Food", "Tea", 450)]);
}

#[tokio::test]
async fn snapshot_exports_round_trip() {
    let (engine, _db) = engine_with_db().await;
    engine
        .bulk_add("Food", "Coffee, Tea", "300, 450")
        .await
        .unwrap();
    let snapshot = engine.list_expenses().await.unwrap();
    let expected: Vec<ExportRow> = snapshot.iter().map(ExportRow::from).collect();

    let csv_bytes = ExportFormat::Csv.encode(&snapshot).unwrap();
    let from_csv: Vec<ExportRow> = csv::Reader::from_reader(csv_bytes.as_slice())
        .deserialize()
        .map(Result::unwrap)
        .collect();
    assert_eq!(from_csv, expected);

    let json_bytes = ExportFormat::Json.encode(&snapshot).unwrap();
    let from_json: Vec<ExportRow> = String::from_utf8(json_bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(from_json, expected);

    let xlsx_bytes = ExportFormat::Xlsx.encode(&snapshot).unwrap();
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(xlsx_bytes)).unwrap();
    let range = workbook.worksheet_range("Expenses").unwrap();
    let from_xlsx: Vec<ExportRow> = range
        .rows()
        .skip(1)
        .map(|row| ExportRow {
            category: row[0].to_string(),
            product: row[1].to_string(),
            cost: row[2].as_i64().unwrap(),
        })
        .collect();
    assert_eq!(from_xlsx, expected);
}
