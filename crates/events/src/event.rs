use chrono::NaiveDate;

/// A domain-agnostic notification event.
///
/// Events are immutable facts describing something that already happened.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.stock.low").
    fn event_type(&self) -> &'static str;

    /// Business date on which the event occurred.
    fn occurred_on(&self) -> NaiveDate;
}
