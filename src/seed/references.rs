//! Cross-references between fixture groups.
//!
//! Products name their categories, tags and attributes. Once those groups are
//! created, their `{id, name}` pairs are indexed here and product fixtures are
//! hydrated with the created resources before submission.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};
use crate::fixtures::{Download, Image, ProductAttributeFixture, ProductFixture};

/// `{id, name}` of a resource created on the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: u64,
    pub name: String,
}

impl ResourceRef {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Name-keyed index of created resources of one kind.
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    kind: &'static str,
    by_name: HashMap<String, ResourceRef>,
}

impl ReferenceIndex {
    /// Build an index. When two resources share a name, the first one wins.
    pub fn new(kind: &'static str, refs: impl IntoIterator<Item = ResourceRef>) -> Self {
        let mut by_name = HashMap::new();
        for resource in refs {
            by_name.entry(resource.name.clone()).or_insert(resource);
        }
        Self { kind, by_name }
    }

    /// Resource kind, used in error messages (`category`, `tag`, `attribute`).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Look up a created resource by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::MissingReference`] when no resource has that name.
    pub fn resolve(&self, name: &str) -> Result<&ResourceRef> {
        self.by_name
            .get(name)
            .ok_or_else(|| SeedError::MissingReference {
                kind: self.kind.to_string(),
                name: name.to_string(),
            })
    }

    fn resolve_all(&self, names: &[String]) -> Result<Vec<ResourceRef>> {
        names
            .iter()
            .map(|name| self.resolve(name).cloned())
            .collect()
    }
}

/// Indexes of everything a product may reference.
#[derive(Debug, Clone)]
pub struct CatalogRefs {
    pub categories: ReferenceIndex,
    pub tags: ReferenceIndex,
    pub attributes: ReferenceIndex,
}

impl CatalogRefs {
    #[must_use]
    pub fn new(
        categories: Vec<ResourceRef>,
        tags: Vec<ResourceRef>,
        attributes: Vec<ResourceRef>,
    ) -> Self {
        Self {
            categories: ReferenceIndex::new("category", categories),
            tags: ReferenceIndex::new("tag", tags),
            attributes: ReferenceIndex::new("attribute", attributes),
        }
    }
}

/// Product attribute after hydration: the global attribute's id with the
/// product-level settings applied on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydratedAttribute {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl HydratedAttribute {
    /// Merge a product-level override onto a created global attribute.
    /// Override fields win; the id always comes from the created attribute.
    #[must_use]
    pub fn merge(base: &ResourceRef, product: ProductAttributeFixture) -> Self {
        Self {
            id: base.id,
            name: product.name,
            position: product.position,
            visible: product.visible,
            options: product.options,
        }
    }
}

/// Product ready for `products/batch`: references replaced by created resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydratedProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub regular_price: String,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub downloadable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub downloads: Vec<Download>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<ResourceRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ResourceRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<HydratedAttribute>,
}

/// Replace a product's name references with created resources.
///
/// # Errors
///
/// Returns [`SeedError::MissingReference`] for the first name that was not created.
pub fn hydrate_product(product: ProductFixture, refs: &CatalogRefs) -> Result<HydratedProduct> {
    let categories = refs.categories.resolve_all(&product.categories)?;
    let tags = refs.tags.resolve_all(&product.tags)?;
    let attributes = product
        .attributes
        .into_iter()
        .map(|attribute| {
            let base = refs.attributes.resolve(&attribute.name)?;
            Ok(HydratedAttribute::merge(base, attribute))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HydratedProduct {
        name: product.name,
        kind: product.kind,
        regular_price: product.regular_price,
        is_virtual: product.is_virtual,
        downloadable: product.downloadable,
        downloads: product.downloads,
        images: product.images,
        categories,
        tags,
        attributes,
    })
}

/// Hydrate every product, failing on the first unresolved reference.
///
/// # Errors
///
/// Returns [`SeedError::MissingReference`] for the first name that was not created.
pub fn hydrate_products(
    products: Vec<ProductFixture>,
    refs: &CatalogRefs,
) -> Result<Vec<HydratedProduct>> {
    products
        .into_iter()
        .map(|product| hydrate_product(product, refs))
        .collect()
}
