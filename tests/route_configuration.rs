//! Route configuration tests: default, custom and attribute routes.

use handler_harness::config::parse_config;
use handler_harness::routing::RouteDefaults;
use handler_harness::{AttributeRoute, ControllerDescriptor, HarnessError, RequestHarness, RouteData};

mod common;

use common::ServiceFnHandler;

fn echo_harness(template: &str) -> RequestHarness<ServiceFnHandler> {
    common::init_test_logging();
    RequestHarness::new(template).unwrap().with_handler(common::route_echo())
}

#[test]
fn test_resource_names_for_suffixed_descriptors() {
    for name in ["WidgetsController", "OrderLinesController", "HomeController", "ABController"] {
        let expected = name.to_lowercase().strip_suffix("controller").unwrap().to_string();
        assert_eq!(ControllerDescriptor::new(name).resource_name(), expected);
    }
}

#[test]
fn test_default_route_for_widgets() {
    let mut harness = echo_harness("/");
    harness.configure_route_for("WidgetsController").unwrap();

    let route = harness.configuration().routes().get("widgets").unwrap();
    assert_eq!(route.template().as_str(), "widgets/{id?}");

    let data: RouteData = harness.get("/widgets/42", None).unwrap().json().unwrap();
    assert_eq!(data.route_name.as_deref(), Some("widgets"));
    assert_eq!(data.get("controller"), Some("widgets"));
    assert_eq!(data.get("id"), Some("42"));
}

#[test]
fn test_custom_route_reflected_in_route_data() {
    let mut harness = echo_harness("/");
    harness.configure_route_for("WidgetsController").unwrap();
    harness
        .configure_custom_route("WidgetsController", "api/v2/widgets/{id}")
        .unwrap();

    let data: RouteData = harness.get("/api/v2/widgets/7", None).unwrap().json().unwrap();
    assert!(data.matched);
    assert_eq!(data.template, "api/v2/widgets/{id}");
    assert_eq!(data.get("id"), Some("7"));

    // The default shape is gone
    let data: RouteData = harness.get("/widgets/7", None).unwrap().json().unwrap();
    assert!(!data.matched);
}

#[test]
fn test_fallback_template_takes_precedence() {
    let mut harness = echo_harness("{controller}/{id}");
    harness.configure_route_for("WidgetsController").unwrap();

    let data: RouteData = harness.get("/widgets/1", None).unwrap().json().unwrap();
    assert_eq!(data.route_name, None);
    assert_eq!(data.template, "{controller}/{id}");
    assert_eq!(data.get("controller"), Some("widgets"));
}

#[test]
fn test_attribute_routes_then_locked() {
    let mut harness = echo_harness("/");
    let routes = [
        AttributeRoute::new("swagger/docs/{apiVersion}").named("swagger_docs"),
        AttributeRoute::new("swagger/ui/{*assetPath}")
            .with_defaults(RouteDefaults::new().with_value("assetPath", "index")),
    ];

    assert_eq!(harness.configure_attribute_routes(&routes).unwrap(), 2);

    let data: RouteData = harness.get("/swagger/ui", None).unwrap().json().unwrap();
    assert_eq!(data.route_name.as_deref(), Some("swagger/ui/{*assetPath}"));
    assert_eq!(data.get("assetPath"), Some("index"));

    let err = harness
        .configure_custom_route("WidgetsController", "widgets")
        .unwrap_err();
    assert!(matches!(err, HarnessError::ConfigurationLocked(name) if name == "widgets"));
}

#[test]
fn test_descriptor_with_explicit_template() {
    let mut harness = echo_harness("/");
    harness
        .configure([ControllerDescriptor::new("ReportsController").with_template("reports/{year}/{id?}")])
        .unwrap();

    let data: RouteData = harness.get("/reports/2024", None).unwrap().json().unwrap();
    assert_eq!(data.route_name.as_deref(), Some("reports"));
    assert_eq!(data.get("year"), Some("2024"));
    assert_eq!(data.get("id"), None);
}

#[test]
fn test_harness_from_config() {
    let config = parse_config(
        r#"
        [harness]
        base_uri = "https://docs.example.test"
        route_template = "swagger/docs/{apiVersion}"
        "#,
    )
    .unwrap();

    let harness: RequestHarness<ServiceFnHandler> = RequestHarness::from_config(&config)
        .unwrap()
        .with_handler(common::route_echo());
    assert_eq!(harness.route_template(), "swagger/docs/{apiVersion}");

    let data: RouteData = harness.get("/swagger/docs/v3", None).unwrap().json().unwrap();
    assert_eq!(data.get("apiVersion"), Some("v3"));
}

#[test]
fn test_route_values_are_percent_decoded() {
    let mut harness = echo_harness("/");
    harness.configure_route_for("WidgetsController").unwrap();

    let data: RouteData = harness.get("/widgets/hello world", None).unwrap().json().unwrap();
    assert_eq!(data.get("id"), Some("hello world"));

    let data: RouteData = harness.get("/widgets/caf%C3%A9", None).unwrap().json().unwrap();
    assert_eq!(data.get("id"), Some("café"));

    // Not UTF-8 once decoded: a routing miss, not an error
    let data: RouteData = harness.get("/widgets/%FF", None).unwrap().json().unwrap();
    assert!(!data.matched);
}

#[test]
fn test_query_string_ignored_for_matching() {
    let mut harness = echo_harness("/");
    harness.configure_route_for("WidgetsController").unwrap();

    let data: RouteData = harness.get("/widgets/7?x=1&y=two", None).unwrap().json().unwrap();
    assert!(data.matched);
    assert_eq!(data.route_name.as_deref(), Some("widgets"));
    assert_eq!(data.get("id"), Some("7"));
}
