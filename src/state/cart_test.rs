use super::*;

fn line(course_id: &str, price_cents: i64) -> CartLine {
    CartLine {
        course_id: course_id.to_owned(),
        title: format!("Course {course_id}"),
        price_cents,
    }
}

#[test]
fn default_cart_is_empty() {
    let cart = CartState::default();
    assert!(cart.is_empty());
    assert_eq!(cart.len(), 0);
    assert_eq!(cart.subtotal_cents(), 0);
}

#[test]
fn add_appends_and_rejects_duplicates() {
    let mut cart = CartState::default();
    assert!(cart.add(line("c1", 1999)));
    assert!(cart.add(line("c2", 4999)));
    assert!(!cart.add(line("c1", 1999)));
    assert_eq!(cart.len(), 2);
    assert!(cart.contains("c1"));
}

#[test]
fn remove_by_id() {
    let mut cart = CartState::from_lines(vec![line("c1", 100), line("c2", 200)]);
    assert!(cart.remove("c1"));
    assert!(!cart.remove("c1"));
    assert_eq!(cart.course_ids(), ["c2"]);
}

#[test]
fn subtotal_sums_line_prices() {
    let cart = CartState::from_lines(vec![line("c1", 1999), line("c2", 4999), line("c3", 0)]);
    assert_eq!(cart.subtotal_cents(), 6998);
}

#[test]
fn clear_empties_the_cart() {
    let mut cart = CartState::from_lines(vec![line("c1", 100)]);
    cart.clear();
    assert!(cart.is_empty());
}

#[test]
fn course_ids_preserve_insertion_order() {
    let mut cart = CartState::default();
    for id in ["z", "a", "m"] {
        assert!(cart.add(line(id, 100)));
    }
    assert_eq!(cart.course_ids(), ["z", "a", "m"]);
}

#[test]
fn from_summary_copies_display_fields() {
    let summary = crate::net::types::CourseSummary {
        id: "c9".to_owned(),
        title: "Systems Programming".to_owned(),
        subtitle: None,
        category_name: "Programming".to_owned(),
        price_cents: 12900,
        cover_url: None,
        average_rating: None,
    };
    let line = CartLine::from_summary(&summary);
    assert_eq!(line.course_id, "c9");
    assert_eq!(line.title, "Systems Programming");
    assert_eq!(line.price_cents, 12900);
}

#[test]
fn cart_line_serde_round_trip() {
    let lines = vec![line("c1", 1999)];
    let json = serde_json::to_string(&lines).unwrap();
    let back: Vec<CartLine> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lines);
}
