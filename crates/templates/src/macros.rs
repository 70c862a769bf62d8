// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

/// Count the number of tokens. Used to have a fixed-sized array for the
/// templates list.
macro_rules! count {
    () => (0_usize);
    ( $x:tt $($xs:tt)* ) => (1_usize + count!($($xs)*));
}

/// Macro that helps generating helper functions that render a specific
/// template with a strongly-typed context. It also registers the template in
/// a static array to help detecting missing templates at load time.
macro_rules! register_templates {
    {
        $(
            $( #[ $attr:meta ] )*
            pub fn $name:ident ( $param:ty ) { $template:expr }
        )*
    } => {
        /// List of registered templates
        static TEMPLATES: [&'static str; count!( $( $template )* )] = [ $( $template, )* ];

        impl Templates {
            $(
                $(#[$attr])*
                ///
                /// # Errors
                ///
                /// Returns an error if the template fails to render.
                pub fn $name(&self, context: &$param) -> Result<String, TemplateError> {
                    let ctx = ::minijinja::value::Value::from_serialize(context);

                    let env = self.environment.load();
                    let tmpl = env.get_template($template)
                        .map_err(|source| TemplateError::Missing { template: $template, source })?;
                    tmpl.render(ctx)
                        .map_err(|source| TemplateError::Render { template: $template, source })
                }
            )*
        }

        /// Helps rendering each template with sample data
        pub mod check {
            use ::anyhow::Context as _;

            use super::*;

            /// Render all registered templates with the given context.
            ///
            /// Returns the renders in a map whose keys are template names.
            ///
            /// # Errors
            ///
            /// Returns an error if any of the templates fails to render.
            pub fn all(
                templates: &Templates,
                context: &SiteContext,
            ) -> ::anyhow::Result<::std::collections::BTreeMap<&'static str, String>> {
                let mut out = ::std::collections::BTreeMap::new();
                $(
                    let rendered = templates.$name(context)
                        .with_context(|| format!("failed to render template {:?}", $template))?;
                    out.insert($template, rendered);
                )*

                Ok(out)
            }
        }
    };
}
