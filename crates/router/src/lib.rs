// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

//! URL and route-pattern construction for the frontend server

pub(crate) mod table;
mod url_builder;

pub use self::{
    table::{Endpoint, RouteSpec},
    url_builder::UrlBuilder,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> UrlBuilder {
        UrlBuilder::new("frontend", "frontend/static")
    }

    #[test]
    fn test_patterns() {
        let urls = urls();
        assert_eq!(urls.frontend_index(), "/frontend/");
        assert_eq!(
            urls.service_worker_pattern(),
            "/frontend/service-worker.js"
        );
        assert_eq!(urls.manifest_pattern(), "/frontend/manifest.json");
        assert_eq!(urls.static_pattern(), "/frontend/static");
        assert_eq!(urls.kit_assets_pattern(), "/frontend/static/marquee");
        assert_eq!(urls.app_assets_pattern(), "/frontend/static/app");
        assert_eq!(urls.kit_module_prefix(), "/frontend/static/marquee/js");
        assert_eq!(urls.app_module_prefix(), "/frontend/static/app/js");
    }

    #[test]
    fn test_absolute_static_url() {
        // An already-absolute static URL is not prefixed twice
        let urls = UrlBuilder::new("frontend", "/assets");
        assert_eq!(urls.static_pattern(), "/assets");
    }

    #[test]
    fn test_navigation_base_prefix() {
        let urls = urls();
        assert_eq!(urls.navigation_base_prefix("/"), "/frontend");
        assert_eq!(urls.navigation_base_prefix("/ext/"), "/ext/frontend");
    }

    #[test]
    fn test_static_url_at_depth() {
        let urls = urls();

        // Depth 0: the frontend prefix itself is the relative path
        assert_eq!(urls.static_url_at("", 0), Some("frontend/static".to_owned()));
        // Depth 1: assets resolve against the current directory
        assert_eq!(urls.static_url_at("", 1), Some("static".to_owned()));
        assert_eq!(urls.static_url_at("/devices", 0), Some("static".to_owned()));
        // Deeper paths climb back up
        assert_eq!(
            urls.static_url_at("/devices/lights", 0),
            Some("../static".to_owned())
        );
        assert_eq!(
            urls.static_url_at("/devices/lights/kitchen", 0),
            Some("../../static".to_owned())
        );
    }

    #[test]
    fn test_frontend_sub_path() {
        let urls = urls();
        assert_eq!(urls.frontend_sub_path("/frontend"), "");
        assert_eq!(urls.frontend_sub_path("/frontend/"), "/");
        assert_eq!(
            urls.frontend_sub_path("/frontend/devices/lights"),
            "/devices/lights"
        );
    }

    #[test]
    fn test_static_url_not_relative_to_prefix() {
        let urls = UrlBuilder::new("frontend", "https://cdn.example.com/assets");
        assert_eq!(urls.static_url_at("/devices/lights", 0), None);
    }

    #[test]
    fn test_route_ordering() {
        for debug in [false, true] {
            let table = urls().route_table(debug);

            let last_asset = table
                .iter()
                .rposition(|spec| spec.endpoint.is_asset())
                .unwrap();
            let first_shell = table
                .iter()
                .position(|spec| spec.endpoint == Endpoint::Shell)
                .unwrap();

            assert!(
                last_asset < first_shell,
                "static-asset routes must precede the shell catch-all"
            );
        }
    }

    #[test]
    fn test_route_table_modes() {
        let debug: Vec<_> = urls()
            .route_table(true)
            .into_iter()
            .map(|spec| spec.pattern)
            .collect();
        assert_eq!(
            debug,
            [
                "/frontend/static/marquee",
                "/frontend/static/app",
                "/frontend/static",
                "/",
                "/frontend/service-worker.js",
                "/frontend/manifest.json",
                "/frontend",
                "/frontend/",
                "/frontend/{*path}",
            ]
        );

        let production: Vec<_> = urls()
            .route_table(false)
            .into_iter()
            .map(|spec| spec.pattern)
            .collect();
        assert_eq!(
            production,
            [
                "/frontend/static",
                "/",
                "/frontend/service-worker.js",
                "/frontend/manifest.json",
                "/frontend",
                "/frontend/",
                "/frontend/{*path}",
            ]
        );
    }
}
