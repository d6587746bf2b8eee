//! Build-time SEO configuration for static site builds.
//!
//! The host build calls [`emit_config_module`] once during its configuration
//! phase; every later build stage imports the registered virtual module and
//! sees the validated, fully-defaulted [`SiteConfig`].  Content collections
//! attach per-page overrides through a [`PageSeoSchema`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod integration;
mod page_seo;

pub use self::integration::*;
pub use self::page_seo::*;

pub use seo_max_config::DEFAULT_CHARSET;
pub use seo_max_config::DEFAULT_SEPARATOR;
pub use seo_max_config::DefaultImages;
pub use seo_max_config::ErrorKind;
pub use seo_max_config::ImageRef;
pub use seo_max_config::SiteConfig;
pub use seo_max_config::ValidationError;
