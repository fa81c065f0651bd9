//! The application facade.

use std::sync::Arc;

use serde::Serialize;

use minierp_auth::{
    AuthzError, IdentityProvider, InMemoryKeyValueStore, JsonFileStore, KeyValueStore, Module,
    Permission, SessionUser, SignupRequest, authorize,
};
use minierp_core::{Clock, DomainError, EmployeeId, ExpenseId, ProductId, SaleId, SystemClock};
use minierp_events::{EventBus, InMemoryEventBus, Subscription};
use minierp_finance::{Expense, NewExpense};
use minierp_hr::{Employee, EmployeePatch, NewEmployee};
use minierp_inventory::{NewProduct, Product, ProductPatch, StockAlert};
use minierp_sales::{NewSale, Sale};
use minierp_store::{ClassifiedProduct, Dashboard, DashboardStats, EntityStore, SaleProcessor, SaleReceipt};

use crate::config::AppConfig;
use crate::errors::AppResult;

pub type AlertBus = Arc<InMemoryEventBus<StockAlert>>;

/// Everything the dashboard page shows, as one serializable snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub low_stock: Vec<ClassifiedProduct>,
    pub critical_stock: Vec<ClassifiedProduct>,
    pub top_products: Vec<Product>,
    pub recent_sales: Vec<Sale>,
    pub recent_expenses: Vec<Expense>,
}

/// Composition root: store, identity and stock alerts behind role checks.
///
/// Reads need the module's read permission, mutations its write permission.
/// HR and Finance are therefore closed to staff.
pub struct Erp {
    config: AppConfig,
    store: EntityStore,
    identity: IdentityProvider<Arc<dyn KeyValueStore>>,
    sales: SaleProcessor<AlertBus>,
}

impl core::fmt::Debug for Erp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Erp")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("current_user", &self.identity.current_user())
            .finish_non_exhaustive()
    }
}

impl Erp {
    /// Build from configuration, using the system clock and the configured
    /// identity storage.
    pub fn new(config: AppConfig) -> Self {
        let storage: Arc<dyn KeyValueStore> = match &config.state_file {
            Some(path) => Arc::new(JsonFileStore::open(path)),
            None => Arc::new(InMemoryKeyValueStore::new()),
        };
        Self::with_parts(config, Arc::new(SystemClock), storage)
    }

    pub fn with_parts(config: AppConfig, clock: Arc<dyn Clock>, storage: Arc<dyn KeyValueStore>) -> Self {
        let store = if config.seed_data {
            EntityStore::seeded(clock)
        } else {
            EntityStore::new(clock)
        };

        tracing::info!(
            seed_data = config.seed_data,
            state_file = ?config.state_file,
            "erp initialized"
        );

        Self {
            config,
            store,
            identity: IdentityProvider::new(storage),
            sales: SaleProcessor::new(Arc::new(InMemoryEventBus::new())),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ── identity ────────────────────────────────────────────────────────────

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.identity.current_user()
    }

    pub fn login(&mut self, email: &str, password: &str) -> AppResult<SessionUser> {
        Ok(self.identity.login(email, password)?)
    }

    pub fn signup(&self, request: SignupRequest) -> AppResult<SessionUser> {
        Ok(self.identity.signup(request)?)
    }

    pub fn logout(&mut self) -> Option<SessionUser> {
        self.identity.logout()
    }

    /// Modules the current user may open. Empty when signed out.
    pub fn visible_modules(&self) -> Vec<Module> {
        self.current_user()
            .map(|u| u.role.visible_modules())
            .unwrap_or_default()
    }

    /// Subscribe to low-stock and out-of-stock alerts raised by sales.
    pub fn subscribe_alerts(&self) -> Subscription<StockAlert> {
        self.sales.alerts().subscribe()
    }

    fn require(&self, permission: Permission) -> Result<(), AuthzError> {
        authorize(self.current_user(), &permission).inspect_err(|err| {
            tracing::warn!(%permission, error = %err, "access denied");
        })
    }

    // ── dashboard ───────────────────────────────────────────────────────────

    pub fn dashboard(&self) -> AppResult<Dashboard<'_>> {
        self.require(Permission::DASHBOARD_READ)?;
        Ok(self.store.dashboard())
    }

    pub fn stats(&self) -> AppResult<DashboardStats> {
        Ok(self.dashboard()?.stats())
    }

    /// Dashboard snapshot with list sizes taken from the configuration.
    pub fn overview(&self) -> AppResult<DashboardOverview> {
        let dashboard = self.dashboard()?;
        Ok(DashboardOverview {
            stats: dashboard.stats(),
            low_stock: dashboard.low_stock_products(),
            critical_stock: dashboard.critical_stock_products(),
            top_products: dashboard
                .top_products(self.config.top_products)
                .into_iter()
                .cloned()
                .collect(),
            recent_sales: dashboard
                .recent_sales(self.config.recent_sales)
                .into_iter()
                .cloned()
                .collect(),
            recent_expenses: dashboard
                .recent_expenses(self.config.recent_expenses)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    // ── hr ──────────────────────────────────────────────────────────────────

    pub fn employees(&self) -> AppResult<&[Employee]> {
        self.require(Permission::HR_READ)?;
        Ok(self.store.employees())
    }

    pub fn add_employee(&mut self, draft: NewEmployee) -> AppResult<EmployeeId> {
        self.require(Permission::HR_WRITE)?;
        draft.validate()?;
        Ok(self.store.add_employee(draft))
    }

    pub fn update_employee(&mut self, id: &EmployeeId, patch: EmployeePatch) -> AppResult<Option<&Employee>> {
        self.require(Permission::HR_WRITE)?;
        Ok(self.store.update_employee(id, patch))
    }

    pub fn delete_employee(&mut self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        self.require(Permission::HR_WRITE)?;
        Ok(self.store.delete_employee(id))
    }

    // ── inventory ───────────────────────────────────────────────────────────

    pub fn products(&self) -> AppResult<&[Product]> {
        self.require(Permission::INVENTORY_READ)?;
        Ok(self.store.products())
    }

    pub fn add_product(&mut self, draft: NewProduct) -> AppResult<ProductId> {
        self.require(Permission::INVENTORY_WRITE)?;
        draft.validate()?;
        Ok(self.store.add_product(draft))
    }

    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> AppResult<Option<&Product>> {
        self.require(Permission::INVENTORY_WRITE)?;
        Ok(self.store.update_product(id, patch))
    }

    pub fn restock_product(&mut self, id: &ProductId, quantity: u32) -> AppResult<Option<&Product>> {
        self.require(Permission::INVENTORY_WRITE)?;
        if quantity == 0 {
            return Err(DomainError::validation("restock quantity must be positive").into());
        }
        Ok(self.store.restock_product(id, quantity))
    }

    pub fn delete_product(&mut self, id: &ProductId) -> AppResult<Option<Product>> {
        self.require(Permission::INVENTORY_WRITE)?;
        Ok(self.store.delete_product(id))
    }

    // ── sales ───────────────────────────────────────────────────────────────

    pub fn sales(&self) -> AppResult<&[Sale]> {
        self.require(Permission::SALES_READ)?;
        Ok(self.store.sales())
    }

    /// Record a sale and withdraw its stock. See [`SaleProcessor::create_sale`].
    ///
    /// Selling more than the product has in stock is rejected here, before the
    /// processor is reached.
    pub fn create_sale(&mut self, draft: NewSale) -> AppResult<SaleReceipt> {
        self.require(Permission::SALES_WRITE)?;
        draft.validate()?;

        if let Some(product) = self.store.product_by_name(&draft.product_name) {
            if draft.quantity > product.stock {
                tracing::warn!(
                    product = %draft.product_name,
                    quantity = draft.quantity,
                    stock = product.stock,
                    "sale rejected: insufficient stock"
                );
                return Err(DomainError::validation(format!(
                    "insufficient stock: {} requested, {} available",
                    draft.quantity, product.stock
                ))
                .into());
            }
        }

        Ok(self.sales.create_sale(&mut self.store, draft)?)
    }

    pub fn delete_sale(&mut self, id: &SaleId) -> AppResult<Option<Sale>> {
        self.require(Permission::SALES_WRITE)?;
        Ok(self.store.delete_sale(id))
    }

    // ── finance ─────────────────────────────────────────────────────────────

    pub fn expenses(&self) -> AppResult<&[Expense]> {
        self.require(Permission::FINANCE_READ)?;
        Ok(self.store.expenses())
    }

    pub fn add_expense(&mut self, draft: NewExpense) -> AppResult<ExpenseId> {
        self.require(Permission::FINANCE_WRITE)?;
        draft.validate()?;
        Ok(self.store.add_expense(draft))
    }

    pub fn delete_expense(&mut self, id: &ExpenseId) -> AppResult<Option<Expense>> {
        self.require(Permission::FINANCE_WRITE)?;
        Ok(self.store.delete_expense(id))
    }
}
