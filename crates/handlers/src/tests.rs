// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::FromRef,
    http::{Request, StatusCode, header},
};
use camino::Utf8PathBuf;
use http_body_util::BodyExt as _;
use marquee_config::{RootConfig, SiteConfig};
use marquee_router::UrlBuilder;
use marquee_templates::Templates;
use tower::ServiceExt as _;

use crate::frontend_router;

#[derive(Clone)]
struct TestState {
    templates: Templates,
    site: Arc<SiteConfig>,
    urls: UrlBuilder,
}

impl FromRef<TestState> for Templates {
    fn from_ref(state: &TestState) -> Self {
        state.templates.clone()
    }
}

impl FromRef<TestState> for Arc<SiteConfig> {
    fn from_ref(state: &TestState) -> Self {
        Arc::clone(&state.site)
    }
}

impl FromRef<TestState> for UrlBuilder {
    fn from_ref(state: &TestState) -> Self {
        state.urls.clone()
    }
}

/// Lay out an application package with both unbundled sources and a bundled
/// output, plus a UI kit checkout next to it
fn populate_root(root: &std::path::Path) {
    std::fs::create_dir_all(root.join("frontend/js")).unwrap();
    std::fs::create_dir_all(root.join("frontend/dist")).unwrap();
    std::fs::create_dir_all(root.join("marquee/js/base")).unwrap();

    std::fs::write(
        root.join("frontend/js/index.js"),
        "import {Base} from '$marquee/base/base.js'\nimport app from '$app/app.js'\n",
    )
    .unwrap();
    std::fs::write(root.join("frontend/style.css"), "body {}").unwrap();
    std::fs::write(
        root.join("frontend/dist/app.js"),
        "console.log('bundled, $marquee/x.js stays put')",
    )
    .unwrap();
    std::fs::write(root.join("marquee/js/base/base.js"), "export class Base {}").unwrap();
}

async fn test_app(debug: bool) -> (tempfile::TempDir, Arc<SiteConfig>, Router) {
    let dir = tempfile::tempdir().unwrap();
    populate_root(dir.path());

    let mut config = RootConfig::test();
    config.project.debug = debug;
    config.frontend.roots = vec![Utf8PathBuf::try_from(dir.path().to_owned()).unwrap()];

    let site = Arc::new(SiteConfig::from_config(&config, &mut rand::thread_rng()));
    let urls = UrlBuilder::new(&site.frontend_url_prefix, &site.static_url);
    let templates = Templates::load(Vec::new()).await.unwrap();

    let router = frontend_router::<TestState>(&site, &urls)
        .unwrap()
        .with_state(TestState {
            templates,
            site: Arc::clone(&site),
            urls,
        });

    (dir, site, router)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn root_redirects_to_the_frontend() {
    let (_dir, _site, app) = test_app(false).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/frontend/");
}

#[tokio::test]
async fn shell_is_rendered_for_any_sub_path() {
    let (_dir, _site, app) = test_app(false).await;

    for uri in ["/frontend", "/frontend/", "/frontend/devices/lights"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "for {uri}");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate, max-age=0"
        );

        let body = body_string(response).await;
        assert!(body.contains("<title>My Project</title>"));
    }
}

#[tokio::test]
async fn shell_static_url_follows_the_request_depth() {
    let (_dir, _site, app) = test_app(false).await;

    let response = app
        .clone()
        .oneshot(get("/frontend/devices/lights"))
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("data-static-url=\"../static\""));

    let response = app.oneshot(get("/frontend/")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("data-static-url=\"static\""));
}

#[tokio::test]
async fn shell_navigation_base_honours_the_proxy_header() {
    let (_dir, _site, app) = test_app(false).await;

    let request = Request::builder()
        .uri("/frontend/")
        .header(crate::BASE_PATH_HEADER, "/ext")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("data-navigation-base-prefix=\"/ext/frontend\""));
}

#[tokio::test]
async fn manifest_accepts_overrides() {
    let (_dir, _site, app) = test_app(false).await;

    let response = app
        .clone()
        .oneshot(get("/frontend/manifest.json?theme_color=%23ff0000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/manifest+json; charset=\"utf-8\""
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(manifest["theme_color"], "#ff0000");
    // Everything else keeps its configured value
    assert_eq!(manifest["background_color"], "#444444");
    assert_eq!(manifest["name"], "My Project");
}

#[tokio::test]
async fn service_worker_is_served_as_javascript() {
    let (_dir, site, app) = test_app(false).await;

    let response = app.oneshot(get("/frontend/service-worker.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=\"utf-8\""
    );

    let body = body_string(response).await;
    assert!(body.contains(&site.build_hash));
}

#[tokio::test]
async fn debug_assets_are_rewritten() {
    let (_dir, site, app) = test_app(true).await;

    for uri in [
        "/frontend/static/app/js/index.js",
        // The application root is also reachable without the sub-path
        "/frontend/static/js/index.js",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "for {uri}");

        let body = body_string(response).await;
        assert!(body.contains(&format!(
            "'/frontend/static/marquee/js/base/base.js?h={}'",
            site.build_hash
        )));
        assert!(body.contains(&format!(
            "'/frontend/static/app/js/app.js?h={}'",
            site.build_hash
        )));
    }
}

#[tokio::test]
async fn debug_kit_assets_are_served_from_the_kit_root() {
    let (_dir, _site, app) = test_app(true).await;

    let response = app
        .oneshot(get("/frontend/static/marquee/js/base/base.js"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("export class Base"));
}

#[tokio::test]
async fn non_js_assets_pass_through_unmodified() {
    let (_dir, _site, app) = test_app(true).await;

    let response = app.oneshot(get("/frontend/static/style.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
    assert_eq!(body_string(response).await, "body {}");
}

#[tokio::test]
async fn production_assets_are_served_verbatim() {
    let (_dir, _site, app) = test_app(false).await;

    let response = app.oneshot(get("/frontend/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cache_control = response.headers()[header::CACHE_CONTROL].to_str().unwrap().to_owned();
    assert!(cache_control.contains("immutable"), "{cache_control}");

    // Markers are left untouched: bundled output is expected to be resolved
    assert_eq!(
        body_string(response).await,
        "console.log('bundled, $marquee/x.js stays put')"
    );
}

#[tokio::test]
async fn asset_routes_take_precedence_over_the_shell() {
    let (_dir, _site, app) = test_app(false).await;

    // A missing asset is a 404, not a rendered shell page
    let response = app.oneshot(get("/frontend/static/missing.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unconfigured_name_is_a_server_error() {
    let (_dir, _site, app) = {
        let dir = tempfile::tempdir().unwrap();
        populate_root(dir.path());

        let mut config = RootConfig::test();
        config.project.name = String::new();
        config.frontend.roots = vec![Utf8PathBuf::try_from(dir.path().to_owned()).unwrap()];

        let site = Arc::new(SiteConfig::from_config(&config, &mut rand::thread_rng()));
        let urls = UrlBuilder::new(&site.frontend_url_prefix, &site.static_url);
        let templates = Templates::load(Vec::new()).await.unwrap();

        let router = frontend_router::<TestState>(&site, &urls)
            .unwrap()
            .with_state(TestState {
                templates,
                site: Arc::clone(&site),
                urls,
            });

        (dir, site, router)
    };

    let response = app.oneshot(get("/frontend/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_frontend_dir_fails_router_construction() {
    let dir = tempfile::tempdir().unwrap();
    // No dist directory: production mode cannot resolve its asset root
    std::fs::create_dir_all(dir.path().join("frontend")).unwrap();

    let mut config = RootConfig::test();
    config.frontend.roots = vec![Utf8PathBuf::try_from(dir.path().to_owned()).unwrap()];

    let site = SiteConfig::from_config(&config, &mut rand::thread_rng());
    let urls = UrlBuilder::new(&site.frontend_url_prefix, &site.static_url);

    let result = frontend_router::<TestState>(&site, &urls);
    assert!(matches!(
        result,
        Err(marquee_config::ConfigurationError::MissingFrontendDir { .. })
    ));
}
