//! Cart Items

use rust_decimal::Decimal;

/// A single line of a checkout request, exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartItem {
    /// Catalog identifier, internal product UUID, or any other client-side key.
    pub id: Option<String>,

    /// Display name, also used as the last-resort lookup key.
    pub name: Option<String>,

    /// Client-supplied unit price.
    pub price: Option<Decimal>,

    /// Requested quantity.
    pub qty: Option<u32>,
}

impl CartItem {
    /// The identifier, ignoring blank values.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// The name, ignoring blank values.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    /// The client price, when one was supplied and is non-zero.
    ///
    /// A zero price is treated the same as a missing one so the catalog price applies.
    pub fn client_price(&self) -> Option<Decimal> {
        self.price.filter(|price| !price.is_zero())
    }

    /// Quantity to charge for; absent or zero quantities count as one.
    pub fn quantity(&self) -> u32 {
        match self.qty {
            Some(qty) if qty > 0 => qty,
            _ => 1,
        }
    }
}
