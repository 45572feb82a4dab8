//! End-to-end routing behaviour over a configured router.

use std::collections::HashMap;

use path_router::{
    Arguments, HandlerRegistry, Invocation, RequestContext, Route, RouteCollection, Router,
    RouterError,
};

mod common;

#[test]
fn test_filter_restricts_placeholder() {
    let router = common::router();

    let matched = router.match_path("/api/user/42/", "GET").unwrap();
    assert_eq!(matched.route().name(), Some("user_show"));
    assert_eq!(matched.param("id"), Some("42"));

    // Non-numeric id falls through to the slug route
    let matched = router.match_path("/api/user/abc/", "GET").unwrap();
    assert_eq!(matched.route().name(), Some("user_by_slug"));
    assert_eq!(matched.param("slug"), Some("abc"));
}

#[test]
fn test_method_selects_route() {
    let router = common::router();

    let matched = router.match_path("/api/user/42", "PUT").unwrap();
    assert_eq!(matched.route().name(), Some("user_update"));

    assert!(router.match_path("/api/user/42/", "DELETE").is_none());
    assert!(router.match_path("/api/user/42/", "get").is_none());
}

#[test]
fn test_form_method_override() {
    let router = common::router();
    let req = RequestContext::new("POST", "/api/user/42/").with_form_method(Some("put"));

    let matched = router.match_request(&req).unwrap();
    assert_eq!(matched.route().name(), Some("user_update"));
}

#[test]
fn test_base_path_required() {
    let router = common::router();
    assert!(router.match_path("/user/42/", "GET").is_none());
    assert!(router.match_path("/API/USER/42/", "GET").is_some());
}

#[test]
fn test_mount_path_and_query_string() {
    let router = common::router();
    let req = RequestContext::new("GET", "/site/api/user/7/?debug=1").with_mount_path("/site");

    let matched = router.match_request(&req).unwrap();
    assert_eq!(matched.param("id"), Some("7"));
}

#[test]
fn test_presets_merge_with_captures() {
    let router = common::router();

    let matched = router.match_path("/api/blog/2024/hello-world", "GET").unwrap();
    let pairs: Vec<_> = matched
        .params()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("layout", "wide"), ("year", "2024"), ("slug", "hello-world")]
    );
}

#[test]
fn test_addon_regex_tightens_pattern() {
    let router = common::router();

    let matched = router.match_path("/api/feed/.xml", "GET").unwrap();
    assert_eq!(matched.param("format"), Some("rss"));
    assert_eq!(matched.param("addon_regex"), None);

    assert!(router.match_path("/api/feed/", "GET").is_some());
    assert!(router.match_path("/api/feed/.json", "GET").is_none());
}

#[test]
fn test_percent_encoded_values_match() {
    let router = common::router();
    let matched = router.match_path("/api/user/john%20doe/", "GET").unwrap();
    assert_eq!(matched.param("slug"), Some("john%20doe"));
}

#[test]
fn test_empty_collection_never_matches() {
    let router = Router::new(RouteCollection::new());
    assert!(router.match_path("/", "GET").is_none());
    assert!(router.match_path("/anything/at/all", "POST").is_none());
}

#[test]
fn test_matching_does_not_mutate_routes() {
    let router = common::router();
    let before = router.named("article").unwrap().clone();

    router.match_path("/api/blog/2024/a", "GET").unwrap();
    router.match_path("/api/blog/2025/b", "GET").unwrap();

    assert_eq!(router.named("article").unwrap(), &before);
}

#[test]
fn test_generate() {
    let router = common::router();

    assert_eq!(
        router.generate("user_show", &common::params(&[("id", "7")])).unwrap(),
        "/user/7/"
    );
    assert_eq!(
        router
            .generate("article", &common::params(&[("slug", "post"), ("year", "2024")]))
            .unwrap(),
        "/blog/2024/post/"
    );
    assert_eq!(
        router.generate("user_show", &HashMap::new()).unwrap(),
        "/user/:id/"
    );
}

#[test]
fn test_generate_unknown_name() {
    let router = common::router();
    let err = router.generate("missing", &HashMap::new()).unwrap_err();
    assert_eq!(err, RouterError::RouteNotFound("missing".into()));
    assert_eq!(err.to_string(), "No route with the name missing has been found.");
}

#[test]
fn test_dispatch_through_registry() {
    let router = common::router();
    let handlers = HandlerRegistry::new()
        .with_handler("Users::show", |inv: &Invocation| match inv.arguments() {
            Arguments::Positional(values) => format!("show {}", values.join(",")),
            Arguments::Named(_) => "unexpected".to_string(),
        })
        .with_handler("Feed", |inv: &Invocation| match inv.arguments() {
            Arguments::Named(params) => format!("feed {}", params["format"]),
            Arguments::Positional(_) => "unexpected".to_string(),
        });

    let out = router
        .dispatch(&RequestContext::new("GET", "/api/user/9/"), &handlers)
        .unwrap();
    assert_eq!(out.as_deref(), Some("show 9"));

    let out = router
        .dispatch(&RequestContext::new("GET", "/api/feed/"), &handlers)
        .unwrap();
    assert_eq!(out.as_deref(), Some("feed rss"));

    let err = router
        .dispatch(&RequestContext::new("GET", "/api/user/abc/"), &handlers)
        .unwrap_err();
    assert!(err.to_string().contains("Users::profile"));
}

#[test]
fn test_router_is_shareable_across_threads() {
    let router = std::sync::Arc::new(Router::new(
        [Route::new("/item/:id", "Items::show").with_methods(["GET"])]
            .into_iter()
            .collect(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = router.clone();
            std::thread::spawn(move || {
                let path = format!("/item/{i}");
                let matched = router.match_path(&path, "GET").unwrap();
                matched.param("id").map(str::to_string)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i.to_string()));
    }
}
