use std::fmt;

use serde_json::Value;

use crate::Result;
use crate::ValidationError;
use crate::raw;

pub const DEFAULT_SEPARATOR: &str = "|";
pub const DEFAULT_CHARSET: &str = "utf-8";

/// The single validated, build-wide SEO configuration.
///
/// Constructed once per build by [`SiteConfig::from_raw`] and immutable after
/// that.  Every field already carries its default; consumers never apply
/// defaults themselves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site/brand name appended to page titles.
    pub name: String,
    /// Exactly one character, placed between page title and site name.
    pub separator: String,
    pub charset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_images: Option<DefaultImages>,
}

/// Fallback social-sharing images used when a page supplies none of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<ImageRef>,
}

/// A reference to an image asset usable as a social-sharing preview.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

impl SiteConfig {
    /// Validates raw user options shaped `{ "site": { ... } }` and fills in
    /// defaults.
    ///
    /// Pure and idempotent.  Unknown fields at any level are ignored so old
    /// builds keep accepting newer option files.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        let site = match raw.get("site") {
            Some(site) => raw::object(site, "site")?,
            None => {
                return Err(ValidationError::missing_field(
                    "site.name",
                    "required and must be a string",
                ));
            }
        };

        let name = raw::require_string(site.get("name"), "site.name")?;

        let separator = match site.get("separator") {
            Some(value) => {
                let s = value.as_str().ok_or_else(|| {
                    ValidationError::invalid_shape("site.separator", "must be a string")
                })?;
                if s.chars().count() != 1 {
                    return Err(ValidationError::invalid_shape(
                        "site.separator",
                        "must be exactly one character",
                    ));
                }
                s.to_owned()
            }
            None => {
                log::debug!("no `site.separator` set, using `{DEFAULT_SEPARATOR}`");
                DEFAULT_SEPARATOR.to_owned()
            }
        };

        let charset = match site.get("charset") {
            Some(value) => {
                let s = value.as_str().ok_or_else(|| {
                    ValidationError::invalid_shape("site.charset", "must be a string")
                })?;
                if s.is_empty() {
                    return Err(ValidationError::invalid_shape(
                        "site.charset",
                        "must not be empty",
                    ));
                }
                s.to_owned()
            }
            None => {
                log::debug!("no `site.charset` set, using `{DEFAULT_CHARSET}`");
                DEFAULT_CHARSET.to_owned()
            }
        };

        let default_images = match site.get("defaultImages") {
            Some(value) => Some(DefaultImages::from_raw(value, "site.defaultImages")?),
            None => None,
        };

        Ok(Self {
            name,
            separator,
            charset,
            default_images,
        })
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

impl DefaultImages {
    fn from_raw(value: &Value, path: &str) -> Result<Self> {
        let images = raw::object(value, path)?;
        let open_graph = match images.get("openGraph") {
            Some(value) => Some(ImageRef::from_raw(value, &format!("{path}.openGraph"))?),
            None => None,
        };
        let twitter = match images.get("twitter") {
            Some(value) => Some(ImageRef::from_raw(value, &format!("{path}.twitter"))?),
            None => None,
        };
        Ok(Self {
            open_graph,
            twitter,
        })
    }
}

impl ImageRef {
    pub fn from_raw(value: &Value, path: &str) -> Result<Self> {
        let image = raw::object(value, path)?;
        let image_path = raw::require_string(image.get("imagePath"), &format!("{path}.imagePath"))?;
        let image_alt = raw::optional_string(image.get("imageAlt"), &format!("{path}.imageAlt"))?;
        Ok(Self {
            image_path,
            image_alt,
        })
    }
}
