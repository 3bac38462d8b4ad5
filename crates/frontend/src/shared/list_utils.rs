/// List helpers shared by table pages (sorting, header indicators)
use std::cmp::Ordering;

/// Trait for row types that support sorting
pub trait Sortable {
    /// Compare two rows by the named field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the named field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator shown next to a table header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator span
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.0.cmp(&other.0),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sorts_both_directions() {
        let mut rows = vec![Row(3), Row(1), Row(2)];
        sort_list(&mut rows, "value", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "value", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
