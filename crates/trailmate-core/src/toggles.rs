//! Saved/liked id sets behind the heart and bookmark buttons.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSet<T: Ord> {
    items: BTreeSet<T>,
}

impl<T: Ord + Clone> ToggleSet<T> {
    /// Flips membership of `id`; returns true when it is now present.
    pub fn toggle(&mut self, id: T) -> bool {
        if self.items.remove(&id) {
            false
        } else {
            self.items.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &T) -> bool {
        self.items.contains(id)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Ord> FromIterator<T> for ToggleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut saved: ToggleSet<u32> = [2, 4].into_iter().collect();
        assert!(!saved.toggle(2));
        assert!(saved.toggle(3));
        assert_eq!(saved.to_vec(), vec![3, 4]);
        assert!(saved.toggle(2));
        assert_eq!(saved.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn vibes_toggle_by_label() {
        let mut vibes = ToggleSet::default();
        vibes.toggle("food".to_string());
        vibes.toggle("food".to_string());
        assert!(!vibes.contains(&"food".to_string()));
        assert!(vibes.to_vec().is_empty());
    }
}
