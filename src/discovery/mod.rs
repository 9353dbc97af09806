//! Best-effort discovery of formats backed by available libraries.
//!
//! The catalog is an ordered list of [`KnownFormat`]s. Each lists the
//! [`Provider`]s that can implement it, preferred first. Discovery walks
//! the catalog and, for every format that is neither excluded nor already
//! registered, loads the first provider that is available and registers
//! its codec. A format with no available provider is skipped.
//!
//! ```text
//! KnownFormat "yaml"
//!   ├── Provider serde_yaml   (feature "yaml")  ── load() -> Some(codec) ✓
//!   └── ...                                     (not tried)
//! ```
//!
//! Library availability is decided at compile time through cargo features.

mod exclude;


use std::sync::Arc;

use crate::codecs::{self, Codec};
use crate::registry::{FormatId, FormatRegistry, Metadata, codec_record};

pub use exclude::Exclude;

/// A library that may implement a format.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    /// Crate name, stored as the `library` metadata entry.
    pub library: &'static str,
    /// Returns the codec if the library is available in this build.
    pub load: fn() -> Option<Box<dyn Codec>>,
}

/// A format discovery knows how to find, with its candidate providers.
#[derive(Debug, Clone, Copy)]
pub struct KnownFormat {
    pub identifier: &'static str,
    /// Tried in order; the first that loads wins.
    pub providers: &'static [Provider],
}

impl KnownFormat {
    /// Load the first available provider.
    pub fn resolve(&self) -> Option<(&'static str, Box<dyn Codec>)> {
        self.providers
            .iter()
            .find_map(|provider| (provider.load)().map(|codec| (provider.library, codec)))
    }
}

const BUILTIN: &[KnownFormat] = &[
    KnownFormat {
        identifier: "json",
        providers: &[
            Provider {
                library: "simd-json",
                load: load_fast_json,
            },
            Provider {
                library: "serde_json",
                load: load_json,
            },
        ],
    },
    KnownFormat {
        identifier: "yaml",
        providers: &[Provider {
            library: "serde_yaml",
            load: load_yaml,
        }],
    },
    KnownFormat {
        identifier: "toml",
        providers: &[Provider {
            library: "toml",
            load: load_toml,
        }],
    },
];

/// The built-in catalog: json, yaml, toml.
pub fn builtin() -> &'static [KnownFormat] {
    BUILTIN
}

fn load_fast_json() -> Option<Box<dyn Codec>> {
    #[cfg(feature = "fast-json")]
    {
        Some(Box::new(codecs::SimdJson))
    }
    #[cfg(not(feature = "fast-json"))]
    {
        None
    }
}

fn load_json() -> Option<Box<dyn Codec>> {
    Some(Box::new(codecs::Json))
}

fn load_yaml() -> Option<Box<dyn Codec>> {
    #[cfg(feature = "yaml")]
    {
        Some(Box::new(codecs::Yaml))
    }
    #[cfg(not(feature = "yaml"))]
    {
        None
    }
}

fn load_toml() -> Option<Box<dyn Codec>> {
    #[cfg(feature = "toml")]
    {
        Some(Box::new(codecs::Toml))
    }
    #[cfg(not(feature = "toml"))]
    {
        None
    }
}

/// Run discovery over `catalog`, returning the identifiers registered.
///
/// Entries in `extra` are added to every discovered record, overriding
/// the provider's own entries of the same name.
pub(crate) fn run(
    registry: &FormatRegistry,
    catalog: &[KnownFormat],
    exclude: &Exclude,
    extra: &Metadata,
) -> Vec<FormatId> {
    let mut registered = Vec::new();
    for known in catalog {
        let identifier = known.identifier;
        if exclude.contains(identifier) {
            tracing::debug!(format = identifier, "discovery: excluded");
            continue;
        }
        if registry.contains(identifier) {
            tracing::debug!(format = identifier, "discovery: already registered");
            continue;
        }
        let Some((library, codec)) = known.resolve() else {
            tracing::debug!(format = identifier, "discovery: no provider available");
            continue;
        };

        let mut record = codec_record(Arc::from(codec));
        record.metadata.insert("library", library);
        for (key, value) in extra.iter() {
            record.metadata.insert(key.as_str(), value.clone());
        }
        if registry.insert_if_absent(FormatId::from(identifier), record) {
            tracing::debug!(format = identifier, library, "discovery: registered");
            registered.push(FormatId::from(identifier));
        }
    }
    registered
}
