use serde_json::Value;

use seo_max_config::ValidationError;
use seo_max_config::raw;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A resolved reference to an image asset in the host's pipeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Host capability that turns an `imagePath` into a resolvable asset,
/// verifying along the way that the asset actually exists.
pub trait ImageResolver {
    fn resolve(&self, image_path: &str) -> Result<AssetRef, BoxError>;
}

/// Per-page SEO overrides for one content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSeo {
    pub open_graph: Option<PageImage>,
    pub twitter: Option<PageImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub image: AssetRef,
    pub image_alt: Option<String>,
}

/// Reusable validator for a content collection's optional `seo` field.
///
/// Built once per collection definition, then [`validate`][Self::validate]d
/// once per item.  Validation takes `&self` and touches no shared state, so
/// the host may load items in parallel against one schema.
pub struct PageSeoSchema<R> {
    resolver: R,
}

impl<R: ImageResolver> PageSeoSchema<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Validates one item's `seo` value.  Absence (or an explicit null) is
    /// valid and means "no page-level override".
    ///
    /// A failure is scoped to the item that produced it; the schema stays
    /// usable for every sibling item.
    pub fn validate(&self, value: Option<&Value>) -> Result<Option<PageSeo>, ValidationError> {
        let Some(value) = value else {
            return Ok(None);
        };
        if value.is_null() {
            return Ok(None);
        }
        let seo = raw::object(value, "seo")?;
        let open_graph = self.page_image(seo.get("openGraph"), "seo.openGraph")?;
        let twitter = self.page_image(seo.get("twitter"), "seo.twitter")?;
        Ok(Some(PageSeo {
            open_graph,
            twitter,
        }))
    }

    fn page_image(
        &self,
        value: Option<&Value>,
        path: &str,
    ) -> Result<Option<PageImage>, ValidationError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let entry = raw::object(value, path)?;
        let image_path = raw::require_string(entry.get("imagePath"), &format!("{path}.imagePath"))?;
        let image = self.resolver.resolve(&image_path).map_err(|e| {
            ValidationError::image_resolution_failed(format!("{path}.imagePath"), e.to_string())
        })?;
        let image_alt = raw::optional_string(entry.get("imageAlt"), &format!("{path}.imageAlt"))?;
        Ok(Some(PageImage { image, image_alt }))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;

    /// Accepts any path under `/assets/`, reports everything else missing.
    struct FixtureResolver;

    impl ImageResolver for FixtureResolver {
        fn resolve(&self, image_path: &str) -> Result<AssetRef, BoxError> {
            if image_path.starts_with("/assets/") {
                Ok(AssetRef {
                    src: image_path.to_owned(),
                    width: Some(1200),
                    height: Some(630),
                })
            } else {
                Err(format!("no asset found for `{image_path}`").into())
            }
        }
    }

    #[test]
    fn absent_seo_is_valid() {
        let schema = PageSeoSchema::new(FixtureResolver);
        assert_eq!(schema.validate(None).unwrap(), None);
    }

    #[test]
    fn null_seo_is_valid() {
        let schema = PageSeoSchema::new(FixtureResolver);
        assert_eq!(schema.validate(Some(&json!(null))).unwrap(), None);
    }

    #[test]
    fn resolved_image_carries_asset_metadata() {
        let schema = PageSeoSchema::new(FixtureResolver);
        let raw = json!({
            "openGraph": {"imagePath": "/assets/post.png", "imageAlt": "A post"},
        });
        let seo = schema.validate(Some(&raw)).unwrap().unwrap();
        let open_graph = seo.open_graph.unwrap();
        assert_eq!(open_graph.image.src, "/assets/post.png");
        assert_eq!(open_graph.image.width, Some(1200));
        assert_eq!(open_graph.image_alt.as_deref(), Some("A post"));
        assert_eq!(seo.twitter, None);
    }

    #[test]
    fn unresolvable_image_fails_at_its_path() {
        let schema = PageSeoSchema::new(FixtureResolver);
        let raw = json!({"openGraph": {"imagePath": "/missing.png"}});
        let err = schema.validate(Some(&raw)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ImageResolutionFailed);
        assert_eq!(err.path, "seo.openGraph.imagePath");
        assert!(err.reason.contains("/missing.png"));
    }

    #[test]
    fn failure_does_not_poison_the_schema() {
        let schema = PageSeoSchema::new(FixtureResolver);
        let bad = json!({"openGraph": {"imagePath": "/missing.png"}});
        assert!(schema.validate(Some(&bad)).is_err());

        let good = json!({"twitter": {"imagePath": "/assets/card.png"}});
        let seo = schema.validate(Some(&good)).unwrap().unwrap();
        assert_eq!(seo.twitter.unwrap().image.src, "/assets/card.png");
    }

    #[test]
    fn missing_image_path_is_rejected_before_resolution() {
        let schema = PageSeoSchema::new(FixtureResolver);
        let raw = json!({"twitter": {"imageAlt": "alt only"}});
        let err = schema.validate(Some(&raw)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
        assert_eq!(err.path, "seo.twitter.imagePath");
    }
}
