// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Rewriting of module-import markers inside served JavaScript

use std::{borrow::Cow, sync::LazyLock};

use regex::bytes::{Captures, Regex};

/// Matches single-quoted module paths of the form `'<marker><path>'`, where
/// the marker picks an asset root and the path ends in `.js` or `.jsm`. The
/// path character set is restricted to keep arbitrary string literals from
/// matching.
static MODULE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'(\$marquee|\$app|)([a-z0-9_./-]+\.jsm?)'").expect("the pattern is valid")
});

/// URL prefixes substituted for the module-import markers
#[derive(Debug, Clone)]
pub struct ModulePrefixes {
    kit: String,
    app: String,
}

impl ModulePrefixes {
    /// Prefixes for the UI kit marker and the application marker
    #[must_use]
    pub fn new(kit: String, app: String) -> Self {
        Self { kit, app }
    }
}

/// Rewrite marker-prefixed module imports to the URLs they are served under,
/// appending the build hash as a cache-busting query parameter.
///
/// Imports without a marker keep their path and only gain the query
/// parameter. Content without any matching import is returned borrowed,
/// byte-identical to the input.
#[must_use]
pub fn rewrite_module_imports<'c>(
    content: &'c [u8],
    prefixes: &ModulePrefixes,
    build_hash: &str,
) -> Cow<'c, [u8]> {
    MODULE_IMPORT.replace_all(content, |caps: &Captures<'_>| {
        let marker = &caps[1];
        let path = &caps[2];

        let prefix: &str = if marker == b"$marquee" {
            &prefixes.kit
        } else if marker == b"$app" {
            &prefixes.app
        } else {
            ""
        };

        let mut replacement =
            Vec::with_capacity(prefix.len() + path.len() + build_hash.len() + 5);
        replacement.push(b'\'');
        replacement.extend_from_slice(prefix.as_bytes());
        replacement.extend_from_slice(path);
        replacement.extend_from_slice(b"?h=");
        replacement.extend_from_slice(build_hash.as_bytes());
        replacement.push(b'\'');
        replacement
    })
}
