use super::*;

// =============================================================
// Serde fixtures (camelCase wire format)
// =============================================================

#[test]
fn category_decodes_from_backend_json() {
    let json = r#"{
        "id": "cat-1",
        "name": "Programming",
        "orderIndex": 3,
        "isActive": true,
        "courseCount": 12,
        "createdAt": "2025-11-02T09:00:00Z"
    }"#;
    let category: Category = serde_json::from_str(json).unwrap();
    assert_eq!(category.id, "cat-1");
    assert_eq!(category.order_index, 3);
    assert!(category.is_active);
    assert_eq!(category.course_count, 12);
}

#[test]
fn category_course_count_defaults_to_zero() {
    let json = r#"{"id":"c","name":"N","orderIndex":1,"isActive":false,"createdAt":null}"#;
    let category: Category = serde_json::from_str(json).unwrap();
    assert_eq!(category.course_count, 0);
}

#[test]
fn subcategory_category_name_defaults_to_empty() {
    let json = r#"{
        "id": "s1",
        "categoryId": "cat-1",
        "name": "Rust",
        "orderIndex": 2,
        "isActive": true,
        "createdAt": null
    }"#;
    let sub: SubCategory = serde_json::from_str(json).unwrap();
    assert_eq!(sub.category_id, "cat-1");
    assert!(sub.category_name.is_empty());
}

#[test]
fn list_page_decodes_items_and_total() {
    let json = r#"{"items":[{"id":"a","orderIndex":1}],"totalElements":40}"#;
    let page: ListPage<OrderEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_elements, 40);
}

#[test]
fn update_order_request_serializes_camel_case() {
    let request = UpdateOrderRequest {
        orders: vec![OrderEntry {
            id: "a".to_owned(),
            order_index: 2,
        }],
    };
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"orders":[{"id":"a","orderIndex":2}]}"#);
}

#[test]
fn payment_status_decodes_lowercase() {
    assert_eq!(
        serde_json::from_str::<PaymentStatus>(r#""pending""#).unwrap(),
        PaymentStatus::Pending
    );
    assert_eq!(
        serde_json::from_str::<PaymentStatus>(r#""succeeded""#).unwrap(),
        PaymentStatus::Succeeded
    );
    assert_eq!(
        serde_json::from_str::<PaymentStatus>(r#""failed""#).unwrap(),
        PaymentStatus::Failed
    );
}

#[test]
fn user_role_defaults_to_student_when_absent() {
    let json = r#"{"id":"u1","name":"Sam","email":"sam@example.com"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, UserRole::Student);
}

#[test]
fn user_role_staff_split() {
    assert!(!UserRole::Student.is_staff());
    assert!(UserRole::Instructor.is_staff());
    assert!(UserRole::Admin.is_staff());
}

#[test]
fn course_lessons_default_to_empty() {
    let json = r#"{
        "id": "c1",
        "title": "T",
        "subtitle": null,
        "description": "D",
        "categoryName": "Programming",
        "instructorName": "Ada",
        "priceCents": 4999,
        "coverUrl": null,
        "createdAt": null
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert!(course.lessons.is_empty());
}

#[test]
fn checkout_request_serializes_camel_case() {
    let request = CheckoutRequest {
        course_ids: vec!["c1".to_owned()],
        billing: BillingDetails {
            full_name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            country: "GB".to_owned(),
        },
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["courseIds"][0], "c1");
    assert_eq!(json["billing"]["fullName"], "Ada");
}

#[test]
fn new_course_request_serializes_lesson_order() {
    let request = NewCourseRequest {
        title: "T".to_owned(),
        subtitle: None,
        description: "D".to_owned(),
        category_id: "cat-1".to_owned(),
        subcategory_id: None,
        price_cents: 0,
        cover_name: Some("cover.png".to_owned()),
        lessons: vec![NewLesson {
            title: "L".to_owned(),
            video_name: None,
            order_index: 1,
        }],
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["categoryId"], "cat-1");
    assert_eq!(json["coverName"], "cover.png");
    assert_eq!(json["lessons"][0]["orderIndex"], 1);
}

// =============================================================
// ListFilter query rendering
// =============================================================

#[test]
fn empty_filter_renders_no_query() {
    assert_eq!(ListFilter::default().to_query(), "");
}

#[test]
fn search_only_filter() {
    let filter = ListFilter {
        search: Some("web dev".to_owned()),
        active_only: None,
    };
    assert_eq!(filter.to_query(), "?search=web%20dev");
}

#[test]
fn active_only_filter() {
    let filter = ListFilter {
        search: None,
        active_only: Some(true),
    };
    assert_eq!(filter.to_query(), "?status=active");
}

#[test]
fn active_false_is_not_a_filter() {
    let filter = ListFilter {
        search: None,
        active_only: Some(false),
    };
    assert_eq!(filter.to_query(), "");
}

#[test]
fn combined_filter_joins_with_ampersand() {
    let filter = ListFilter {
        search: Some("rust".to_owned()),
        active_only: Some(true),
    };
    assert_eq!(filter.to_query(), "?search=rust&status=active");
}

#[test]
fn blank_search_is_dropped() {
    let filter = ListFilter {
        search: Some(String::new()),
        active_only: None,
    };
    assert_eq!(filter.to_query(), "");
}

// =============================================================
// Percent encoding
// =============================================================

#[test]
fn unreserved_ascii_passes_through() {
    assert_eq!(encode_component("Abc-123_.~"), "Abc-123_.~");
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(encode_component("a b&c=d?e"), "a%20b%26c%3Dd%3Fe");
    assert_eq!(encode_component("50%+"), "50%25%2B");
}

#[test]
fn multibyte_input_is_byte_escaped() {
    assert_eq!(encode_component("é"), "%C3%A9");
}
