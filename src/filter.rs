use crate::catalog::Product;

/// Free-text filters applied to the fetched product window.
///
/// Each field filters independently; a product must match all three. Empty
/// strings match everything. Name and brand match by case-insensitive
/// substring; price matches when the decimal rendering of the price starts
/// with the filter text, so "1" narrows to prices in the 1x range rather
/// than anything containing a 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub name: String,
    pub price: String,
    pub brand: String,
}

impl FilterSet {
    pub fn matches(&self, product: &Product) -> bool {
        let name = product.product.to_lowercase();
        let brand = product.brand.as_deref().unwrap_or("").to_lowercase();
        let price = product.price.to_string();

        name.contains(&self.name.to_lowercase())
            && brand.contains(&self.brand.to_lowercase())
            && price.starts_with(&self.price)
    }

    /// Derive the filtered view. Recomputed from scratch on every input
    /// change, preserving the order of the fetched window.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
