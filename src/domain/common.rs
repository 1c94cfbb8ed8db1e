/// Entities keyed by a spending category name.
pub trait Categorized {
    fn category(&self) -> &str;

    /// Case-sensitive match, the backend treats category names as exact keys.
    fn is_category(&self, name: &str) -> bool {
        self.category() == name
    }
}

/// Finds the first entry for `category` in a slice of categorized entities.
pub fn find_by_category<'a, T: Categorized>(items: &'a [T], category: &str) -> Option<&'a T> {
    items.iter().find(|item| item.is_category(category))
}

/// Mutable counterpart of [`find_by_category`].
pub fn find_by_category_mut<'a, T: Categorized>(
    items: &'a mut [T],
    category: &str,
) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.is_category(category))
}
