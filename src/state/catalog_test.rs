use super::*;

#[test]
fn default_query_is_page_one_unfiltered() {
    let query = CatalogQuery::default();
    assert_eq!(query.page, 1);
    assert!(query.search.is_empty());
    assert!(query.category_id.is_none());
    assert_eq!(query.to_query(), "?page=1&pageSize=12");
}

#[test]
fn search_change_resets_the_page() {
    let query = CatalogQuery::default().with_page(4);
    let query = query.with_search("rust".to_owned());
    assert_eq!(query.page, 1);
    assert_eq!(query.to_query(), "?page=1&pageSize=12&search=rust");
}

#[test]
fn category_change_resets_the_page() {
    let query = CatalogQuery::default().with_page(3);
    let query = query.with_category(Some("cat-1".to_owned()));
    assert_eq!(query.page, 1);
    assert_eq!(query.to_query(), "?page=1&pageSize=12&categoryId=cat-1");
}

#[test]
fn with_page_floors_at_one() {
    assert_eq!(CatalogQuery::default().with_page(0).page, 1);
}

#[test]
fn search_terms_are_encoded() {
    let query = CatalogQuery::default().with_search("c++ & go".to_owned());
    assert_eq!(
        query.to_query(),
        "?page=1&pageSize=12&search=c%2B%2B%20%26%20go"
    );
}

#[test]
fn blank_search_is_omitted() {
    let query = CatalogQuery::default().with_search("   ".to_owned());
    assert_eq!(query.to_query(), "?page=1&pageSize=12");
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(12), 1);
    assert_eq!(total_pages(13), 2);
    assert_eq!(total_pages(120), 10);
}
