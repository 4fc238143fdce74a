//! Receipt list item model.
//!
//! A closed set of two row kinds. The row-template chooser in
//! [`crate::screens::checkout`] matches exhaustively on this enum, so an
//! unrecognized kind is unrepresentable - there is no runtime fallback arm.

/// One row of the receipt list. Display order is the order of the backing
/// slice; no sorting is applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReceiptItem {
    /// Loyalty-client header row.
    Client { name: &'static str, bonuses: &'static str },
    /// Purchased product row.
    Product {
        name: &'static str,
        quantity: &'static str,
        price: &'static str,
    },
}

/// Demo receipt: one client row followed by the purchased products.
pub static DEMO_ITEMS: [ReceiptItem; 12] = [
    ReceiptItem::Client { name: "Ivanov Ivan Ivanych", bonuses: "100500 bonus points" },
    ReceiptItem::Product { name: "potatoes", quantity: "1 x 100", price: "8,00" },
    ReceiptItem::Product { name: "herring", quantity: "1 x 100", price: "8,00" },
    ReceiptItem::Product { name: "cabbage", quantity: "1 x 100", price: "8,00" },
    ReceiptItem::Product { name: "carrots", quantity: "1 x 100", price: "8,00" },
    ReceiptItem::Product { name: "beets", quantity: "1 x 100", price: "8,00" },
    ReceiptItem::Product { name: "caviar, red", quantity: "10 x 400", price: "80,00" },
    ReceiptItem::Product { name: "caviar, black", quantity: "11 x 300", price: "89,00" },
    ReceiptItem::Product { name: "caviar, overseas", quantity: "2 x 1000", price: "108,00" },
    ReceiptItem::Product { name: "beef", quantity: "1 x 1000", price: "89,00" },
    ReceiptItem::Product { name: "pork", quantity: "1 x 1000", price: "80,00" },
    ReceiptItem::Product { name: "grilled chicken", quantity: "1 x 1000", price: "80,00" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_receipt_starts_with_client() {
        assert!(matches!(DEMO_ITEMS[0], ReceiptItem::Client { .. }));
        assert_eq!(DEMO_ITEMS.len(), 12);
    }

    #[test]
    fn test_demo_products_follow_client() {
        assert!(
            DEMO_ITEMS[1..].iter().all(|i| matches!(i, ReceiptItem::Product { .. })),
            "every row after the client header is a product"
        );
    }
}
