// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use figment::Figment;
use serde::de::DeserializeOwned;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Trait implemented by every configuration section, tying it to its location
/// in the configuration root and letting it be loaded on its own.
pub trait ConfigurationSection: Sized + DeserializeOwned {
    /// Where this section lives relative to the root; `None` for the root
    /// itself.
    const PATH: Option<&'static str> = None;

    /// Validate the section after it has been deserialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    fn validate(&self, _figment: &Figment) -> Result<(), BoxedError> {
        Ok(())
    }

    /// Extract and validate this section from a [`Figment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration could not be loaded
    fn extract(figment: &Figment) -> Result<Self, BoxedError> {
        let this: Self = match Self::PATH {
            Some(path) => figment.extract_inner(path)?,
            None => figment.extract()?,
        };

        this.validate(figment)?;
        Ok(this)
    }
}

/// Extension trait for sections with a default value, which are allowed to be
/// absent from the configuration altogether.
pub trait ConfigurationSectionExt: ConfigurationSection + Default {
    /// Extract this section from a [`Figment`], falling back to the default
    /// value when the section is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section is invalid.
    fn extract_or_default(figment: &Figment) -> Result<Self, BoxedError> {
        if let Some(path) = Self::PATH {
            if !figment.contains(path) {
                return Ok(Self::default());
            }
        }

        Self::extract(figment)
    }
}

impl<T: ConfigurationSection + Default> ConfigurationSectionExt for T {}
