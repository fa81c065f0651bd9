//! Sample records loaded into a fresh store.

use chrono::NaiveDate;

use minierp_core::{ExpenseId, SaleId};
use minierp_finance::{Expense, NewExpense};
use minierp_hr::{EmployeePatch, NewEmployee};
use minierp_inventory::NewProduct;
use minierp_sales::{NewSale, Sale, SaleStatus};

use crate::store::EntityStore;

const EMPLOYEES: [(&str, &str, &str, u64, u32); 3] = [
    ("Rahul Sharma", "rahul@company.com", "Developer", 50000, 22),
    ("Priya Singh", "priya@company.com", "Designer", 45000, 20),
    ("Amit Kumar", "amit@company.com", "Manager", 70000, 23),
];

// name, stock, price, reorder level
const PRODUCTS: [(&str, u32, u64, u32); 4] = [
    ("Laptop", 25, 50000, 5),
    ("Mouse", 100, 500, 20),
    ("Keyboard", 3, 1500, 10),
    ("Monitor", 15, 15000, 5),
];

// customer, product, quantity, amount, (y, m, d), status
const SALES: [(&str, &str, u32, u64, (i32, u32, u32), SaleStatus); 3] = [
    ("ABC Company", "Laptop", 2, 100000, (2024, 1, 15), SaleStatus::Completed),
    ("XYZ Corp", "Mouse", 10, 5000, (2024, 1, 16), SaleStatus::Pending),
    ("Tech Solutions", "Monitor", 3, 45000, (2024, 1, 17), SaleStatus::Completed),
];

const EXPENSES: [(&str, u64, (i32, u32, u32), &str); 3] = [
    ("Office Rent", 25000, (2024, 1, 1), "Monthly office rent"),
    ("Utilities", 5000, (2024, 1, 5), "Electricity bill"),
    ("Marketing", 15000, (2024, 1, 10), "Social media ads"),
];

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Populate `store` with the sample records. Seeded sales do not withdraw stock.
pub fn seed(store: &mut EntityStore) {
    for (name, email, position, salary, attendance) in EMPLOYEES {
        let id = store.add_employee(NewEmployee {
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            salary,
        });
        store.update_employee(
            &id,
            EmployeePatch {
                attendance: Some(attendance),
                ..Default::default()
            },
        );
    }

    for (name, stock, price, reorder_level) in PRODUCTS {
        store.add_product(NewProduct {
            name: name.to_string(),
            category: "Electronics".to_string(),
            stock,
            price,
            reorder_level,
        });
    }

    for (customer, product, quantity, amount, on, status) in SALES {
        let draft = NewSale::new(customer, product, quantity, status);
        store.sales.push(Sale::record(SaleId::new(), draft, amount, date(on)));
    }

    for (category, amount, on, description) in EXPENSES {
        let draft = NewExpense::new(category, amount, description);
        store.expenses.push(Expense::record(ExpenseId::new(), draft, date(on)));
    }

    tracing::debug!(store = ?store, "sample data seeded");
}
