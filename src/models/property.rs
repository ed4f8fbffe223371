use serde::{Deserialize, Serialize};

/// Where a resolved property value came from.
///
/// The converter only cares about the distinction between values the user set
/// (`Explicit`) and everything else, but the other variants are kept so callers can
/// report provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertySource {
    /// No value could be resolved.
    #[default]
    Unset,
    /// Set directly on this object by the user.
    Explicit,
    /// Resolved from a parent object, a style, or the theme.
    Inherited,
    /// A computed default.
    Default,
}

/// A resolved property value together with its provenance.
///
/// JSON accepts either a bare value (treated as explicitly set) or the full form
/// `{ "value": ..., "source": "inherited" }`. A missing property deserializes to
/// [`Property::unset`] through the owning struct's `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "PropertyRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Property<T> {
    pub value: Option<T>,
    pub source: PropertySource,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PropertyRepr<T> {
    Full {
        value: Option<T>,
        source: PropertySource,
    },
    Bare(T),
}

impl<T> From<PropertyRepr<T>> for Property<T> {
    fn from(repr: PropertyRepr<T>) -> Self {
        match repr {
            PropertyRepr::Full { value, source } => {
                let source = if value.is_none() {
                    PropertySource::Unset
                } else {
                    source
                };
                Property { value, source }
            }
            PropertyRepr::Bare(value) => Property::explicit(value),
        }
    }
}

impl<T> Default for Property<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> Property<T> {
    /// A value the user set on this object.
    pub fn explicit(value: T) -> Self {
        Property {
            value: Some(value),
            source: PropertySource::Explicit,
        }
    }

    /// A value resolved from a parent, style or theme.
    pub fn inherited(value: T) -> Self {
        Property {
            value: Some(value),
            source: PropertySource::Inherited,
        }
    }

    /// A computed default value.
    pub fn defaulted(value: T) -> Self {
        Property {
            value: Some(value),
            source: PropertySource::Default,
        }
    }

    pub fn unset() -> Self {
        Property {
            value: None,
            source: PropertySource::Unset,
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.source == PropertySource::Explicit && self.value.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Provenance view used by copy predicates.
    pub fn info(&self) -> PropertyInfo {
        PropertyInfo {
            has_value: self.value.is_some(),
            explicit: self.source == PropertySource::Explicit,
            source: self.source,
        }
    }
}

impl<T: Clone> Property<T> {
    /// The resolved value, or `fallback` when nothing resolved.
    pub fn resolved_or(&self, fallback: T) -> T {
        self.value.clone().unwrap_or(fallback)
    }
}

/// Value-free snapshot of a property's provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    pub has_value: bool,
    pub explicit: bool,
    pub source: PropertySource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Holder {
        flag: Property<bool>,
        size: Property<f64>,
        name: Property<String>,
    }

    #[test]
    fn test_bare_value_is_explicit() {
        let holder: Holder = serde_json::from_str(r#"{"flag": true}"#).unwrap();
        assert!(holder.flag.is_explicit());
        assert_eq!(holder.flag.get(), Some(&true));
        assert_eq!(holder.size, Property::unset());
    }

    #[test]
    fn test_full_form_keeps_source() {
        let holder: Holder = serde_json::from_str(
            r#"{"size": {"value": 12.5, "source": "inherited"}, "name": {"value": null, "source": "explicit"}}"#,
        )
        .unwrap();
        assert!(!holder.size.is_explicit());
        assert_eq!(holder.size.source, PropertySource::Inherited);
        assert_eq!(holder.size.resolved_or(0.0), 12.5);
        // A null value never counts as set.
        assert_eq!(holder.name.source, PropertySource::Unset);
    }

    #[test]
    fn test_info_reflects_provenance() {
        let info = Property::defaulted(3_u32).info();
        assert!(info.has_value);
        assert!(!info.explicit);
        assert!(!Property::<u32>::unset().info().has_value);
    }
}
