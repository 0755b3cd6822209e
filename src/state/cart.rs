#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::CourseSummary;

/// One course held in the cart. Serializable so the cart survives page
/// reloads via localStorage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub course_id: String,
    pub title: String,
    pub price_cents: i64,
}

impl CartLine {
    #[must_use]
    pub fn from_summary(summary: &CourseSummary) -> Self {
        Self {
            course_id: summary.id.clone(),
            title: summary.title.clone(),
            price_cents: summary.price_cents,
        }
    }
}

/// Client-held shopping cart. Prices shown here are display-only; the
/// backend recomputes the authoritative total at checkout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.lines.iter().any(|line| line.course_id == course_id)
    }

    /// Add a course to the cart. A course can be bought once; duplicates
    /// are rejected and leave the cart unchanged.
    pub fn add(&mut self, line: CartLine) -> bool {
        if self.contains(&line.course_id) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Remove a course by id. Returns whether anything was removed.
    pub fn remove(&mut self, course_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.course_id != course_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|line| line.price_cents).sum()
    }

    /// Course ids in cart order, as sent in the checkout request.
    #[must_use]
    pub fn course_ids(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.course_id.clone())
            .collect()
    }
}
