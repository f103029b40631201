mod category_totals;

pub use category_totals::{aggregate_by_category, normalize_category, CategoryTotals};
