use serde::{Deserialize, Serialize};

/// Position inside one batch run.
///
/// `current` counts rows that are fully settled, including their
/// notification side effect. Monotone, `current <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    pub current: usize,
    pub total: usize,
}

impl BatchProgress {
    pub fn percent(&self) -> i32 {
        if self.total == 0 {
            return 0;
        }
        (self.current as f64 / self.total as f64 * 100.0) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_bounded() {
        assert_eq!(BatchProgress { current: 0, total: 0 }.percent(), 0);
        assert_eq!(BatchProgress { current: 0, total: 4 }.percent(), 0);
        assert_eq!(BatchProgress { current: 1, total: 4 }.percent(), 25);
        assert_eq!(BatchProgress { current: 4, total: 4 }.percent(), 100);
    }
}
