use metatags::{MetaError, MetaTags, Paginator, UrlPaginator};

#[test]
fn first_page_url_has_no_page_param() {
    let p = UrlPaginator::new("http://site.com", 1);
    assert_eq!(p.url(1), "http://site.com");
    assert_eq!(p.url(0), "http://site.com");
}

#[test]
fn later_pages_append_param() {
    let p = UrlPaginator::new("http://site.com", 1);
    assert_eq!(p.url(2), "http://site.com?page=2");
    assert_eq!(p.url(10), "http://site.com?page=10");
}

#[test]
fn existing_query_uses_ampersand() {
    let p = UrlPaginator::new("http://site.com/posts?sort=asc", 1);
    assert_eq!(p.url(3), "http://site.com/posts?sort=asc&page=3");
}

#[test]
fn existing_page_param_is_replaced() {
    let p = UrlPaginator::new("http://site.com?page=1&sort=asc", 4);
    assert_eq!(p.url(1), "http://site.com?sort=asc");
    assert_eq!(p.url(4), "http://site.com?sort=asc&page=4");
}

#[test]
fn fragment_stays_last() {
    let p = UrlPaginator::new("http://site.com#list", 1);
    assert_eq!(p.url(2), "http://site.com?page=2#list");
}

#[test]
fn custom_page_name() {
    let p = UrlPaginator::new("http://site.com?p=5", 1).with_page_name("p");
    assert_eq!(p.url(1), "http://site.com");
    assert_eq!(p.url(2), "http://site.com?p=2");
}

#[test]
fn zero_page_is_clamped() {
    let p = UrlPaginator::new("http://site.com", 0);
    assert_eq!(p.current_page(), 1);
}

#[test]
fn previous_and_next_in_middle() {
    let p = UrlPaginator::new("http://site.com", 10);
    assert_eq!(p.previous_page_url().as_deref(), Some("http://site.com?page=9"));
    assert_eq!(p.next_page_url().as_deref(), Some("http://site.com?page=11"));
}

#[test]
fn previous_from_page_two_is_bare_url() {
    let p = UrlPaginator::new("http://site.com", 2);
    assert_eq!(p.previous_page_url().as_deref(), Some("http://site.com"));
}

#[test]
fn no_previous_on_first_page() {
    let p = UrlPaginator::new("http://site.com", 1);
    assert!(p.previous_page_url().is_none());
}

#[test]
fn no_next_on_last_page() {
    let p = UrlPaginator::new("http://site.com", 3).with_last_page(3).unwrap();
    assert!(!p.has_more_pages());
    assert!(p.next_page_url().is_none());
}

#[test]
fn unknown_last_page_always_has_next() {
    let p = UrlPaginator::new("http://site.com", 500);
    assert_eq!(p.last_page(), None);
    assert!(p.has_more_pages());
}

#[test]
fn last_page_before_current_is_rejected() {
    let result = UrlPaginator::new("http://site.com", 5).with_last_page(2);
    assert!(matches!(result, Err(MetaError::Paginator(_))));
}

#[test]
fn builder_first_page_canonical_without_page_param() {
    let p = UrlPaginator::new("http://site.com?page=1", 1).with_last_page(5).unwrap();
    let mut meta = MetaTags::default();
    meta.set_pagination_links(&p);

    let html = meta.to_html();
    assert_eq!(
        html,
        "<link rel=\"canonical\" href=\"http://site.com\">\n\
         <link rel=\"next\" href=\"http://site.com?page=2\">"
    );
    assert!(!html.contains("page=1"));
}

#[test]
fn builder_single_page_result_set() {
    let p = UrlPaginator::new("http://site.com", 1).with_last_page(1).unwrap();
    let mut meta = MetaTags::default();
    meta.set_pagination_links(&p);

    assert!(meta.get_next_href().is_none());
    assert!(meta.get_prev_href().is_none());
    assert_eq!(
        meta.get_canonical().unwrap().to_string(),
        r#"<link rel="canonical" href="http://site.com">"#
    );
}

#[test]
fn builder_accepts_trait_object() {
    let p: Box<dyn Paginator> = Box::new(UrlPaginator::new("http://site.com", 2));
    let mut meta = MetaTags::default();
    meta.set_pagination_links(p.as_ref());

    assert_eq!(
        meta.get_canonical().unwrap().to_string(),
        r#"<link rel="canonical" href="http://site.com?page=2">"#
    );
}

#[test]
fn custom_page_name_keeps_default_named_param() {
    let p = UrlPaginator::new("http://site.com/docs?page=about", 2).with_page_name("p");
    assert_eq!(p.url(1), "http://site.com/docs?page=about");
    assert_eq!(p.url(2), "http://site.com/docs?page=about&p=2");
}

#[test]
fn max_page_has_no_next() {
    let p = UrlPaginator::new("http://site.com", usize::MAX);
    assert!(p.next_page_url().is_none());
    assert_eq!(
        p.previous_page_url(),
        Some(format!("http://site.com?page={}", usize::MAX - 1))
    );
}
