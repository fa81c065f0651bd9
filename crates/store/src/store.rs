use std::sync::Arc;

use chrono::NaiveDate;

use minierp_core::{Clock, EmployeeId, ExpenseId, ProductId, SaleId, SystemClock};
use minierp_finance::{Expense, NewExpense};
use minierp_hr::{Employee, EmployeePatch, NewEmployee};
use minierp_inventory::{NewProduct, Product, ProductPatch};
use minierp_sales::{NewSale, Sale};

use crate::collection::Collection;
use crate::dashboard::Dashboard;

/// In-memory owner of the four business collections.
///
/// This is the only mutation surface for business records. It performs no
/// validation and no authorization; callers (the application facade) do both.
///
/// Lookups by unknown id are tolerated: `update_*`, `restock_product` and
/// `delete_*` return `None` and change nothing.
pub struct EntityStore {
    clock: Arc<dyn Clock>,
    pub(crate) employees: Collection<Employee>,
    pub(crate) products: Collection<Product>,
    pub(crate) sales: Collection<Sale>,
    pub(crate) expenses: Collection<Expense>,
}

impl core::fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntityStore")
            .field("employees", &self.employees.len())
            .field("products", &self.products.len())
            .field("sales", &self.sales.len())
            .field("expenses", &self.expenses.len())
            .finish_non_exhaustive()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl EntityStore {
    /// Empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            employees: Collection::new(),
            products: Collection::new(),
            sales: Collection::new(),
            expenses: Collection::new(),
        }
    }

    /// Store pre-populated with the sample records.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let mut store = Self::new(clock);
        crate::seed::seed(&mut store);
        store
    }

    /// Date used for creation defaults.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Derived metrics over the current state.
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(self)
    }

    // ── read access ─────────────────────────────────────────────────────────

    pub fn employees(&self) -> &[Employee] {
        self.employees.as_slice()
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn sales(&self) -> &[Sale] {
        self.sales.as_slice()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.as_slice()
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.get(id)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// First product (in insertion order) with exactly this name.
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.find(|p| p.name == name)
    }

    pub(crate) fn product_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.find_mut(|p| p.name == name)
    }

    pub fn sale(&self, id: &SaleId) -> Option<&Sale> {
        self.sales.get(id)
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    // ── employees ───────────────────────────────────────────────────────────

    /// Append a new employee (attendance 0, Active, joined today).
    pub fn add_employee(&mut self, draft: NewEmployee) -> EmployeeId {
        let id = EmployeeId::new();
        let employee = Employee::hire(id, draft, self.today());
        tracing::debug!(employee_id = %id, name = %employee.name, "employee added");
        self.employees.push(employee);
        id
    }

    pub fn update_employee(&mut self, id: &EmployeeId, patch: EmployeePatch) -> Option<&Employee> {
        let updated = self.employees.update_with(id, |e| e.apply(patch));
        if updated.is_none() {
            tracing::debug!(employee_id = %id, "update ignored: unknown employee");
        }
        updated
    }

    pub fn delete_employee(&mut self, id: &EmployeeId) -> Option<Employee> {
        let removed = self.employees.remove(id);
        tracing::debug!(employee_id = %id, removed = removed.is_some(), "delete employee");
        removed
    }

    // ── products ────────────────────────────────────────────────────────────

    pub fn add_product(&mut self, draft: NewProduct) -> ProductId {
        let id = ProductId::new();
        let product = Product::create(id, draft);
        tracing::debug!(product_id = %id, name = %product.name, stock = product.stock, "product added");
        self.products.push(product);
        id
    }

    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> Option<&Product> {
        let updated = self.products.update_with(id, |p| p.apply(patch));
        if updated.is_none() {
            tracing::debug!(product_id = %id, "update ignored: unknown product");
        }
        updated
    }

    /// Add `quantity` units to a product's stock.
    pub fn restock_product(&mut self, id: &ProductId, quantity: u32) -> Option<&Product> {
        let updated = self.products.update_with(id, |p| {
            p.restock(quantity);
        });
        if let Some(p) = updated {
            tracing::info!(product_id = %id, added = quantity, stock = p.stock, "product restocked");
        }
        updated
    }

    pub fn delete_product(&mut self, id: &ProductId) -> Option<Product> {
        let removed = self.products.remove(id);
        tracing::debug!(product_id = %id, removed = removed.is_some(), "delete product");
        removed
    }

    // ── sales ───────────────────────────────────────────────────────────────

    /// Append a sale dated today with an already-computed `amount`.
    ///
    /// This only records the sale. Use [`SaleProcessor`](crate::SaleProcessor)
    /// to price it from the product and withdraw the stock.
    pub fn add_sale(&mut self, draft: NewSale, amount: u64) -> SaleId {
        let id = SaleId::new();
        let sale = Sale::record(id, draft, amount, self.today());
        tracing::debug!(sale_id = %id, amount, "sale added");
        self.sales.push(sale);
        id
    }

    pub fn delete_sale(&mut self, id: &SaleId) -> Option<Sale> {
        let removed = self.sales.remove(id);
        tracing::debug!(sale_id = %id, removed = removed.is_some(), "delete sale");
        removed
    }

    // ── expenses ────────────────────────────────────────────────────────────

    pub fn add_expense(&mut self, draft: NewExpense) -> ExpenseId {
        let id = ExpenseId::new();
        let expense = Expense::record(id, draft, self.today());
        tracing::debug!(expense_id = %id, amount = expense.amount, "expense added");
        self.expenses.push(expense);
        id
    }

    pub fn delete_expense(&mut self, id: &ExpenseId) -> Option<Expense> {
        let removed = self.expenses.remove(id);
        tracing::debug!(expense_id = %id, removed = removed.is_some(), "delete expense");
        removed
    }
}
