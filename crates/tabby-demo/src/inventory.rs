//! Sample data: a small warehouse inventory.

use std::convert::Infallible;
use std::fmt;

use tabby::{BoxError, Record, TabFooter, TableConfig, Tabulate, TextMarshal};

/// A calendar day, printed as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy)]
pub struct Day {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl TextMarshal for Day {
    fn marshal_text(&self) -> Result<String, BoxError> {
        if !(1..=12).contains(&self.month) || !(1..=31).contains(&self.day) {
            return Err(format!("invalid date {}-{}-{}", self.year, self.month, self.day).into());
        }
        Ok(format!("{:04}-{:02}-{:02}", self.year, self.month, self.day))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warehouse {
    North,
    Harbor,
    Overflow,
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Warehouse::North => "North",
            Warehouse::Harbor => "Harbor",
            Warehouse::Overflow => "Overflow",
        };
        f.write_str(name)
    }
}

#[derive(Record)]
pub struct Supplier {
    #[tab("Supplier")]
    pub name: String,
    #[tab("-")]
    pub contact: String,
}

#[derive(Record)]
pub struct Item {
    #[tab("SKU")]
    pub sku: &'static str,
    pub supplier: Supplier,
    #[tab("Qty")]
    pub qty: i64,
    #[tab("Unit price")]
    pub unit_price: f64,
    #[tab("Received")]
    pub received: Day,
    #[tab("Location")]
    pub warehouse: Warehouse,
    #[tab("-")]
    pub note: String,
}

/// The inventory with a totals footer.
#[derive(Tabulate)]
#[tab(footer)]
pub struct Inventory(pub Vec<Item>);

impl TabFooter for Inventory {
    fn footer(&self) -> Result<Vec<String>, BoxError> {
        let qty: i64 = self.0.iter().map(|item| item.qty).sum();
        let value: f64 = self
            .0
            .iter()
            .map(|item| item.qty as f64 * item.unit_price)
            .sum();
        Ok(vec![
            String::new(),
            "total".to_string(),
            qty.to_string(),
            format!("{:.2}", value),
            String::new(),
            String::new(),
        ])
    }
}

/// Table configuration for the inventory.
pub fn config(inline: bool, specialize: bool) -> TableConfig {
    let mut config = TableConfig::new();
    if inline {
        config = config.inline::<Supplier>();
    }
    if specialize {
        config = config.specialize(|warehouse: &Warehouse| {
            Ok::<_, Infallible>(warehouse.to_string().to_uppercase())
        });
    }
    config
}

fn supplier(name: &str) -> Supplier {
    Supplier {
        name: name.to_string(),
        contact: format!("orders@{}.example", name.to_lowercase()),
    }
}

pub fn sample() -> Inventory {
    Inventory(vec![
        Item {
            sku: "BOLT-M6",
            supplier: supplier("Fastenal"),
            qty: 1200,
            unit_price: 0.08,
            received: Day {
                year: 2024,
                month: 3,
                day: 14,
            },
            warehouse: Warehouse::North,
            note: String::new(),
        },
        Item {
            sku: "GEAR-22T",
            supplier: supplier("Motion"),
            qty: 35,
            unit_price: 12.5,
            received: Day {
                year: 2024,
                month: 4,
                day: 2,
            },
            warehouse: Warehouse::Harbor,
            note: "reorder at 20".to_string(),
        },
        Item {
            sku: "BELT-V40",
            supplier: supplier("Motion"),
            qty: -2,
            unit_price: 7.25,
            received: Day {
                year: 2024,
                month: 13,
                day: 1,
            },
            warehouse: Warehouse::Overflow,
            note: "miscounted, bad receipt date".to_string(),
        },
    ])
}
