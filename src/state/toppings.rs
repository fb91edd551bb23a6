//! The fixed topping catalog
//!
//! Identifiers are opaque strings; display names are resolved through this
//! list and never stored in the selection.

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub text: &'static str,
}

/// The catalog, in menu order. Never mutated.
pub const TOPPINGS: [Topping; 5] = [
    Topping {
        id: "1",
        text: "Pepperoni",
    },
    Topping {
        id: "2",
        text: "Green Peppers",
    },
    Topping {
        id: "3",
        text: "Pineapple",
    },
    Topping {
        id: "4",
        text: "Mushrooms",
    },
    Topping {
        id: "5",
        text: "Ham",
    },
];

/// Resolve a topping identifier to its display name
pub fn display_name(id: &str) -> Option<&'static str> {
    TOPPINGS.iter().find(|t| t.id == id).map(|t| t.text)
}

/// Join the display names of the selected identifiers, in selection order.
/// Identifiers without a catalog entry are skipped.
pub fn format_selection(ids: &[String]) -> String {
    ids.iter()
        .filter_map(|id| display_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}
