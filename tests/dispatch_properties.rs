//! Property tests for the route dispatcher: every path yields exactly one
//! page, and the chrome flag depends only on the denylist.

use proptest::prelude::*;
use storefront::routing::{Dispatcher, NavigationPath, Page, RouteTable};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9._~-]{1,12}",
        Just("ProductDetails".to_string()),
        Just("dresses".to_string()),
        Just("login".to_string()),
        Just("register".to_string()),
        Just(String::new()),
        "%[0-9A-F]{2}",
    ]
}

fn navigation_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(segment(), 0..5), any::<bool>())
        .prop_map(|(segments, trailing)| {
            let mut path = format!("/{}", segments.join("/"));
            if trailing && !path.ends_with('/') {
                path.push('/');
            }
            path
        })
}

proptest! {
    #[test]
    fn dispatch_is_total_for_any_string(raw in ".*") {
        let dispatcher = Dispatcher::storefront();
        let dispatch = dispatcher.dispatch(&raw);
        prop_assert!(Page::ALL.contains(&dispatch.page));
    }

    #[test]
    fn exactly_one_page_for_structured_paths(raw in navigation_path()) {
        let table = RouteTable::storefront();
        let path = NavigationPath::new(&raw);

        let (page, _) = table.resolve(&path);
        let first_match = table
            .entries()
            .iter()
            .find(|entry| entry.pattern.matches(&path).is_some())
            .map(|entry| entry.page);

        prop_assert_eq!(Some(*page), first_match);
    }

    #[test]
    fn chrome_hidden_only_on_denylist(raw in navigation_path()) {
        let dispatch = Dispatcher::storefront().dispatch(&raw);
        let hidden = raw == "/login" || raw == "/register";
        prop_assert_eq!(dispatch.chrome_visible, !hidden);
    }

    #[test]
    fn product_details_captures_any_id(id in "[A-Za-z0-9_-]{1,16}") {
        let dispatch = Dispatcher::storefront().dispatch(&format!("/ProductDetails/{}", id));
        prop_assert_eq!(dispatch.page, Page::ProductDetails);
        prop_assert_eq!(dispatch.param("id"), Some(id.as_str()));
    }

    #[test]
    fn dresses_filter_reuses_home(filter in "[a-z]{1,16}") {
        let dispatch = Dispatcher::storefront().dispatch(&format!("/dresses/{}", filter));
        prop_assert_eq!(dispatch.page, Page::Home);
        prop_assert_eq!(dispatch.param("filter"), Some(filter.as_str()));
    }
}

#[test]
fn documented_examples() {
    let dispatcher = Dispatcher::storefront();

    for path in ["/login", "/register"] {
        assert!(!dispatcher.dispatch(path).chrome_visible, "{}", path);
    }

    assert_eq!(dispatcher.dispatch("/").page, Page::Home);

    let product = dispatcher.dispatch("/ProductDetails/42");
    assert_eq!(product.page, Page::ProductDetails);
    assert_eq!(product.param("id"), Some("42"));

    let dresses = dispatcher.dispatch("/dresses/summer");
    assert_eq!(dresses.page, Page::Home);
    assert_eq!(dresses.param("filter"), Some("summer"));

    let unknown = dispatcher.dispatch("/unknown/anything");
    assert_eq!(unknown.page, Page::NotFound);
    assert!(unknown.chrome_visible);
}
