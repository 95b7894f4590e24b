//! Catalog fixtures: categories, tags, attributes, products and reviews.

use serde::Serialize;

const COVER_IMAGE: &str =
    "http://demo.woothemes.com/woocommerce/wp-content/uploads/sites/56/2013/06/cd_4_angle.jpg";

/// Product category, created through `products/categories/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
}

/// Product tag, created through `products/tags/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
}

/// Global product attribute plus the terms to create under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeFixture {
    pub attribute: AttributeSpec,
    pub terms: Vec<AttributeTerm>,
}

/// Body of `POST products/attributes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    pub name: String,
}

/// One term of a global attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeTerm {
    pub name: String,
}

/// Downloadable file attached to a virtual product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub name: String,
    pub file: String,
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
}

/// Per-product attribute settings, referencing a global attribute by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductAttributeFixture {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Product fixture. Categories, tags and attributes are referenced by name
/// and must be hydrated with created ids before submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFixture {
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
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ProductAttributeFixture>,
}

/// Product review, created through `products/reviews/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub product_id: u64,
    pub review: String,
    pub reviewer: String,
    pub reviewer_email: String,
    pub rating: u8,
}

/// Default product categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![Category {
        name: "Music".to_string(),
    }]
}

/// Default product tags.
#[must_use]
pub fn tags() -> Vec<Tag> {
    vec![Tag {
        name: "Newest".to_string(),
    }]
}

/// Default global attributes and their terms.
#[must_use]
pub fn attributes() -> Vec<AttributeFixture> {
    vec![
        attribute("Capacity", &["32gb", "64gb", "128gb"]),
        attribute("Shade", &["Red", "Blue", "Black"]),
    ]
}

fn attribute(name: &str, terms: &[&str]) -> AttributeFixture {
    AttributeFixture {
        attribute: AttributeSpec {
            name: name.to_string(),
        },
        terms: terms
            .iter()
            .map(|term| AttributeTerm {
                name: (*term).to_string(),
            })
            .collect(),
    }
}

/// Default products.
#[must_use]
pub fn products() -> Vec<ProductFixture> {
    vec![
        ProductFixture {
            downloads: vec![download("Woo Single")],
            categories: vec!["Music".to_string()],
            ..virtual_album("Woo Single #1", "21.99")
        },
        ProductFixture {
            attributes: vec![capacity("128gb")],
            tags: vec!["Newest".to_string()],
            ..usb_stick("128GB USB Stick", "2.99")
        },
        ProductFixture {
            attributes: vec![capacity("32gb")],
            ..usb_stick("32GB USB Stick", "1.99")
        },
        ProductFixture {
            downloads: vec![download("Woo Single 2")],
            categories: vec!["Music".to_string()],
            tags: vec!["Newest".to_string()],
            ..virtual_album("Woo Single #2", "25.99")
        },
    ]
}

fn base_product(name: &str, price: &str, is_virtual: bool) -> ProductFixture {
    ProductFixture {
        name: name.to_string(),
        kind: "simple".to_string(),
        regular_price: price.to_string(),
        is_virtual,
        downloadable: is_virtual,
        downloads: Vec::new(),
        images: vec![Image {
            src: COVER_IMAGE.to_string(),
        }],
        categories: Vec::new(),
        tags: Vec::new(),
        attributes: Vec::new(),
    }
}

fn virtual_album(name: &str, price: &str) -> ProductFixture {
    base_product(name, price, true)
}

fn usb_stick(name: &str, price: &str) -> ProductFixture {
    base_product(name, price, false)
}

fn download(name: &str) -> Download {
    Download {
        name: name.to_string(),
        file: COVER_IMAGE.to_string(),
    }
}

fn capacity(option: &str) -> ProductAttributeFixture {
    ProductAttributeFixture {
        name: "Capacity".to_string(),
        position: Some(0),
        visible: Some(true),
        options: vec![option.to_string()],
    }
}

/// Default reviews for one product.
#[must_use]
pub fn reviews_for_product(product_id: u64) -> Vec<Review> {
    [
        ("Looks fine", "John Doe", 4),
        ("I love this album", "John Doe", 5),
        ("a fine review", "John Doe' niece", 5),
    ]
    .into_iter()
    .map(|(review, reviewer, rating)| Review {
        product_id,
        review: review.to_string(),
        reviewer: reviewer.to_string(),
        reviewer_email: "john.doe@example.com".to_string(),
        rating,
    })
    .collect()
}
