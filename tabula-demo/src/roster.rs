//! Sample class roster used by the demo.

use serde_json::json;
use tabula::prelude::*;

/// Twenty-three students of one class, as the list endpoint would return them.
pub fn students() -> Vec<Record> {
    let names = [
        "Aarav Mehta", "Bianca Rossi", "Chen Wei", "Dana Levi", "Emeka Obi",
        "Farah Khan", "Gustavo Lima", "Hana Sato", "Ivan Petrov", "Jamila Said",
        "Kofi Mensah", "Lena Fischer", "Mateo Cruz", "Nadia Haddad", "Oscar Berg",
        "Priya Nair", "Quinn Walsh", "Rosa Diaz", "Samir Aziz", "Tara Singh",
        "Uma Rao", "Victor Hugo", "Wen Li",
    ];

    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n = i as i64 + 1;
            let archived = n % 7 == 0;
            Record::from_json(json!({
                "id": n,
                "admission_no": format!("ADM-{:04}", 1000 + n),
                "name": name,
                "section": if n % 2 == 0 { "7-A" } else { "7-B" },
                // Some students have no fee record yet.
                "fee_due": if n % 5 == 0 { serde_json::Value::Null } else { json!(1250.5 * (n % 4 + 1) as f64) },
                "joined": format!("2024-{:02}-{:02}T08:30:00Z", n % 12 + 1, n % 27 + 1),
                "transport": n % 3 == 0,
                "status": if archived { "archived" } else { "active" },
            }))
        })
        .collect()
}

pub fn columns() -> Result<Columns<Record>, ColumnError> {
    Columns::new(vec![
        Column::new("admission_no", "Adm. No").width(9),
        Column::new("name", "Name").min_width(12).max_width(16),
        Column::new("section", "Section"),
        Column::new("fee_due", "Fee Due")
            .format("currency-2dp")
            .align_right(),
        Column::new("joined", "Joined")
            .kind(ColumnType::Date)
            .format("dd MMM yyyy"),
        Column::new("transport", "Bus")
            .kind(ColumnType::Boolean)
            .sortable(false),
        Column::new("status", "Status").hidden(),
    ])
}
