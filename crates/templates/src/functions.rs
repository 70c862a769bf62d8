// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Additional filters exposed to the templates

use minijinja::Environment;

pub(crate) fn register(env: &mut Environment) {
    env.add_filter("urlquote", urlquote);
}

/// Percent-encode a string for safe URL embedding. Empty input passes
/// through unchanged.
fn urlquote(value: String) -> String {
    if value.is_empty() {
        return value;
    }

    urlencoding::encode(&value).into_owned()
}

#[cfg(test)]
mod tests {
    use minijinja::{Environment, context};

    #[test]
    fn urlquote_filter() {
        let mut env = Environment::new();
        super::register(&mut env);
        env.add_template("t", "{{ value|urlquote }}").unwrap();

        let tmpl = env.get_template("t").unwrap();
        assert_eq!(
            tmpl.render(context! { value => "a b/c?d" }).unwrap(),
            "a%20b%2Fc%3Fd"
        );
        assert_eq!(tmpl.render(context! { value => "" }).unwrap(), "");
    }
}
