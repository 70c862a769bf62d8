// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs, rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

//! Templates rendering

use std::{collections::HashSet, sync::Arc};

use arc_swap::ArcSwap;
use camino::Utf8PathBuf;
use minijinja::UndefinedBehavior;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info};
use walkdir::DirEntry;

mod context;
mod functions;

#[macro_use]
mod macros;

pub use self::context::SiteContext;

/// Templates bundled with this crate, used when the application does not
/// override them
static BUILTIN: [(&str, &str); 3] = [
    ("index.html", include_str!("../../../templates/index.html")),
    ("manifest.json", include_str!("../../../templates/manifest.json")),
    (
        "service-worker.js",
        include_str!("../../../templates/service-worker.js"),
    ),
];

/// Template file extensions picked up from the search directories
const EXTENSIONS: [&str; 3] = ["html", "json", "js"];

/// Wrapper around [`minijinja::Environment`] helping rendering the various
/// templates
#[derive(Debug, Clone)]
pub struct Templates {
    environment: Arc<ArcSwap<minijinja::Environment<'static>>>,
    search_paths: Vec<Utf8PathBuf>,
}

/// There was an issue while loading the templates
#[derive(Error, Debug)]
pub enum TemplateLoadingError {
    /// I/O error
    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// Failed to traverse the filesystem
    #[error("failed to traverse the filesystem")]
    WalkDir(#[from] walkdir::Error),

    /// Encountered non-UTF-8 path
    #[error("encountered non-UTF-8 path")]
    NonUtf8PathBuf(#[from] camino::FromPathBufError),

    /// Encountered invalid path
    #[error("encountered invalid path")]
    InvalidPath(#[from] std::path::StripPrefixError),

    /// Some templates failed to compile
    #[error("could not load and compile some templates")]
    Compile(#[from] minijinja::Error),

    /// Could not join blocking task
    #[error("error from async runtime")]
    Runtime(#[from] JoinError),

    /// There are essential templates missing
    #[error("missing templates {missing:?}")]
    MissingTemplates {
        /// List of missing templates
        missing: HashSet<String>,
        /// List of templates that were loaded
        loaded: HashSet<String>,
    },
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

impl Templates {
    /// Load the bundled templates plus any overrides found in the given
    /// search directories, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns an error if the templates could not be loaded from disk.
    #[tracing::instrument(name = "templates.load", skip_all)]
    pub async fn load(search_paths: Vec<Utf8PathBuf>) -> Result<Self, TemplateLoadingError> {
        let environment = Self::load_(search_paths.clone()).await?;

        Ok(Self {
            environment: Arc::new(ArcSwap::new(environment)),
            search_paths,
        })
    }

    async fn load_(
        search_paths: Vec<Utf8PathBuf>,
    ) -> Result<Arc<minijinja::Environment<'static>>, TemplateLoadingError> {
        let span = tracing::Span::current();

        let (loaded, env) = tokio::task::spawn_blocking(move || {
            span.in_scope(move || {
                let mut loaded: HashSet<String> = HashSet::new();
                let mut env = minijinja::Environment::new();
                env.set_undefined_behavior(UndefinedBehavior::SemiStrict);

                for (name, source) in BUILTIN {
                    env.add_template(name, source)?;
                    loaded.insert(name.to_owned());
                }

                // Register lowest priority first, so that a later
                // registration under the same name wins
                for dir in search_paths.iter().rev() {
                    if !dir.is_dir() {
                        continue;
                    }

                    let root = dir.canonicalize_utf8()?;
                    info!(%root, "Loading templates from filesystem");
                    for entry in walkdir::WalkDir::new(&root)
                        .min_depth(1)
                        .into_iter()
                        .filter_entry(|e| !is_hidden(e))
                    {
                        let entry = entry?;
                        if !entry.file_type().is_file() {
                            continue;
                        }

                        let path = Utf8PathBuf::try_from(entry.into_path())?;
                        let Some(ext) = path.extension() else {
                            continue;
                        };

                        if !EXTENSIONS.contains(&ext) {
                            continue;
                        }

                        let relative = path.strip_prefix(&root)?;
                        debug!(%relative, "Registering template");
                        let template = std::fs::read_to_string(&path)?;
                        env.add_template_owned(relative.as_str().to_owned(), template)?;
                        loaded.insert(relative.as_str().to_owned());
                    }
                }

                self::functions::register(&mut env);

                Ok::<_, TemplateLoadingError>((loaded, env))
            })
        })
        .await??;

        let needed: HashSet<_> = TEMPLATES.into_iter().map(ToOwned::to_owned).collect();
        debug!(?loaded, ?needed, "Templates loaded");
        let missing: HashSet<_> = needed.difference(&loaded).cloned().collect();

        if missing.is_empty() {
            Ok(Arc::new(env))
        } else {
            Err(TemplateLoadingError::MissingTemplates { missing, loaded })
        }
    }

    /// Reload the templates on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the templates could not be reloaded from disk.
    #[tracing::instrument(name = "templates.reload", skip_all)]
    pub async fn reload(&self) -> Result<(), TemplateLoadingError> {
        let environment = Self::load_(self.search_paths.clone()).await?;
        self.environment.store(environment);

        Ok(())
    }
}

/// Failed to render a template
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Missing template
    #[error("missing template {template:?}")]
    Missing {
        /// The name of the template being rendered
        template: &'static str,

        /// The underlying error
        #[source]
        source: minijinja::Error,
    },

    /// Failed to render the template
    #[error("could not render template {template:?}")]
    Render {
        /// The name of the template being rendered
        template: &'static str,

        /// The underlying error
        #[source]
        source: minijinja::Error,
    },
}

register_templates! {
    /// Render the application shell page
    pub fn render_shell(SiteContext) { "index.html" }

    /// Render the PWA manifest
    pub fn render_manifest(SiteContext) { "manifest.json" }

    /// Render the service worker script
    pub fn render_service_worker(SiteContext) { "service-worker.js" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn check_builtin_templates() {
        let templates = Templates::load(Vec::new()).await.unwrap();
        let context = SiteContext::sample();

        let renders = check::all(&templates, &context).unwrap();
        assert_eq!(renders.len(), TEMPLATES.len());

        let shell = &renders["index.html"];
        assert!(shell.contains("<title>My Project</title>"));
        assert!(shell.contains("manifest.json"));

        let worker = &renders["service-worker.js"];
        assert!(worker.contains("0123456789abcdef"));
    }

    #[tokio::test]
    async fn builtin_manifest_is_valid_json() {
        let templates = Templates::load(Vec::new()).await.unwrap();
        let context = SiteContext::sample();

        let rendered = templates.render_manifest(&context).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(manifest["name"], "My Project");
        assert_eq!(manifest["theme_color"], "#62abea");
        assert_eq!(manifest["background_color"], "#444444");
    }

    #[tokio::test]
    async fn application_templates_override_bundled_ones() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "custom {{ display_name }}").unwrap();

        let path = Utf8PathBuf::try_from(dir.path().to_owned()).unwrap();
        let templates = Templates::load(vec![path]).await.unwrap();

        let rendered = templates.render_shell(&SiteContext::sample()).unwrap();
        assert_eq!(rendered, "custom My Project");

        // The other bundled templates are still available
        templates.render_manifest(&SiteContext::sample()).unwrap();
    }

    #[tokio::test]
    async fn earlier_search_paths_win() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join("index.html"), "first").unwrap();
        std::fs::write(second.path().join("index.html"), "second").unwrap();

        let templates = Templates::load(vec![
            Utf8PathBuf::try_from(first.path().to_owned()).unwrap(),
            Utf8PathBuf::try_from(second.path().to_owned()).unwrap(),
        ])
        .await
        .unwrap();

        let rendered = templates.render_shell(&SiteContext::sample()).unwrap();
        assert_eq!(rendered, "first");
    }
}
