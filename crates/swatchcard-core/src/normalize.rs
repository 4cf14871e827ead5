//! Conversion from raw storefront payloads to the card model.

use crate::color::PaletteEntry;
use crate::products::{ImageRef, Money, PriceRange, Product, SelectedOption, Variant};
use crate::storefront::{
    ColorPaletteResponse, StorefrontImage, StorefrontMoney, StorefrontPriceRange,
    StorefrontProduct, StorefrontVariant,
};
use crate::CoreError;

/// Normalizes a raw [`StorefrontProduct`] into a [`Product`].
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if the product has no variants.
pub fn normalize_product(product: StorefrontProduct) -> Result<Product, CoreError> {
    if product.variants.nodes.is_empty() {
        return Err(CoreError::InvalidInput(format!(
            "product {} has no variants",
            product.id
        )));
    }

    Ok(Product {
        id: product.id,
        vendor: non_empty(product.vendor),
        title: product.title,
        handle: product.handle,
        variants: product
            .variants
            .nodes
            .into_iter()
            .map(normalize_variant)
            .collect(),
        images: product.images.nodes.into_iter().map(normalize_image).collect(),
        price_range: normalize_price_range(product.price_range),
        compare_at_price_range: product.compare_at_price_range.map(normalize_price_range),
    })
}

fn normalize_variant(variant: StorefrontVariant) -> Variant {
    // Every level of the metafield chain may be null.
    let hover_image = variant
        .hover_image
        .and_then(|field| field.reference)
        .and_then(|reference| reference.image)
        .map(normalize_image);

    Variant {
        id: variant.id,
        title: variant.title,
        selected_options: variant
            .selected_options
            .into_iter()
            .map(|option| SelectedOption {
                name: option.name,
                value: option.value,
            })
            .collect(),
        image: variant.image.map(normalize_image),
        hover_image,
    }
}

fn normalize_image(image: StorefrontImage) -> ImageRef {
    ImageRef {
        url: image.url,
        alt_text: non_empty(image.alt_text),
        width: image.width,
        height: image.height,
    }
}

fn normalize_price_range(range: StorefrontPriceRange) -> PriceRange {
    let StorefrontMoney {
        amount,
        currency_code,
    } = range.min_variant_price;
    PriceRange {
        min_variant_price: Money {
            amount,
            currency_code,
        },
    }
}

/// Flattens the palette metaobject connection into entries, keeping
/// half-filled nodes as entries with missing sides so the color map can skip
/// them.
#[must_use]
pub fn normalize_palette(response: ColorPaletteResponse) -> Vec<PaletteEntry> {
    response
        .metaobjects
        .edges
        .into_iter()
        .filter_map(|edge| edge.node)
        .map(|node| PaletteEntry {
            label: node.label.and_then(|field| field.value),
            hex: node.color.and_then(|field| field.value),
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::color::build_color_map;

    fn product_json(variants: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "gid://shopify/Product/1",
            "vendor": "Acme",
            "title": "Classic Tee",
            "handle": "classic-tee",
            "variants": { "nodes": variants },
            "images": { "nodes": [
                { "url": "https://cdn.example.com/front.jpg", "altText": null, "width": 800, "height": 800 }
            ]},
            "priceRange": { "minVariantPrice": { "amount": "40.00", "currencyCode": "USD" } },
            "compareAtPriceRange": { "minVariantPrice": { "amount": "50.00", "currencyCode": "USD" } }
        })
    }

    fn parse(value: serde_json::Value) -> StorefrontProduct {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn normalize_product_flattens_connections() {
        let raw = parse(product_json(json!([
            {
                "id": "gid://shopify/ProductVariant/1",
                "title": "Blue",
                "selectedOptions": [{ "name": "Color", "value": "Blue" }],
                "image": { "url": "https://cdn.example.com/blue.jpg", "altText": "Blue tee" }
            }
        ])));
        let product = normalize_product(raw).unwrap();

        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].selected_options[0].value, "Blue");
        assert_eq!(
            product.variants[0].image.as_ref().map(|i| i.url.as_str()),
            Some("https://cdn.example.com/blue.jpg")
        );
        assert_eq!(product.images.len(), 1);
        assert_eq!(product.images[0].width, Some(800));
        assert!(product.is_on_sale());
    }

    #[test]
    fn normalize_product_follows_hover_image_reference() {
        let raw = parse(product_json(json!([
            {
                "id": "v1",
                "title": "Red",
                "hoverImage": { "reference": { "image": { "url": "https://cdn.example.com/red-back.jpg" } } }
            },
            { "id": "v2", "title": "Green", "hoverImage": { "reference": null } },
            { "id": "v3", "title": "Pink", "hoverImage": null }
        ])));
        let product = normalize_product(raw).unwrap();

        assert_eq!(
            product.variants[0].hover_image.as_ref().map(|i| i.url.as_str()),
            Some("https://cdn.example.com/red-back.jpg")
        );
        assert!(product.variants[1].hover_image.is_none());
        assert!(product.variants[2].hover_image.is_none());
    }

    #[test]
    fn normalize_product_rejects_no_variants() {
        let raw = parse(product_json(json!([])));
        let err = normalize_product(raw).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(reason) if reason.contains("no variants")));
    }

    #[test]
    fn normalize_product_blanks_empty_strings() {
        let mut value = product_json(json!([{ "id": "v1", "title": "Blue" }]));
        value["vendor"] = json!("  ");
        value["images"]["nodes"][0]["altText"] = json!("");
        let product = normalize_product(parse(value)).unwrap();
        assert!(product.vendor.is_none());
        assert!(product.images[0].alt_text.is_none());
    }

    #[test]
    fn normalize_palette_keeps_order_and_skips_missing_nodes() {
        let response: ColorPaletteResponse = serde_json::from_value(json!({
            "metaobjects": { "edges": [
                { "node": { "label": { "value": "Sage" }, "color": { "value": "#9CAF88" } } },
                { "node": null },
                { "node": { "label": { "value": "Rust" }, "color": null } },
                { "node": { "label": { "value": "sage" }, "color": { "value": "#8A9A5B" } } }
            ]}
        }))
        .unwrap();
        let entries = normalize_palette(response);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].hex, None);

        let map = build_color_map(&entries);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Sage"), Some("#8A9A5B"));
    }
}
