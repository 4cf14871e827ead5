//! `inspect`, `select`, and `preview` commands.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use swatchcard_core::storefront::StorefrontProduct;
use swatchcard_core::{
    load_palette, normalize_product, AppConfig, ColorDefaults, ColorResolver, Product,
};
use swatchcard_preview::{CardView, HttpImageLoader, ProductCard};

/// Read a Storefront product JSON file and normalize it.
fn read_product(path: &Path) -> anyhow::Result<Product> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw: StorefrontProduct = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse product JSON {}: {e}", path.display()))?;
    Ok(normalize_product(raw)?)
}

fn build_resolver(config: &AppConfig, palette: Option<&Path>) -> anyhow::Result<ColorResolver> {
    let entries = match palette {
        Some(path) => load_palette(path)?,
        None => Vec::new(),
    };
    tracing::debug!(entries = entries.len(), "palette loaded");
    Ok(ColorResolver::new(
        &entries,
        ColorDefaults::with_fallback(config.default_color.clone()),
    ))
}

fn mount_card(
    config: &AppConfig,
    product_path: &Path,
    palette: Option<&Path>,
) -> anyhow::Result<ProductCard<HttpImageLoader>> {
    let product = read_product(product_path)?;
    let resolver = build_resolver(config, palette)?;
    let loader = HttpImageLoader::new(config.preload_timeout(), &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build image loader: {e}"))?;
    let card = ProductCard::mount(
        product,
        resolver,
        Arc::new(loader),
        config.hover_delay(),
    )?;
    tracing::debug!(
        product = %card.product().handle,
        variants = card.product().variants.len(),
        hover_delay = ?card.hover().hover_delay(),
        "card mounted"
    );
    Ok(card)
}

fn select_color(card: &mut ProductCard<HttpImageLoader>, color: Option<&str>) {
    let Some(color) = color else {
        return;
    };
    if card.select(color).is_none() {
        tracing::warn!(color, "no variant matches color; keeping current selection");
    }
}

fn print_view(view: &CardView) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

/// Print the card view, optionally after selecting `color`.
pub(crate) async fn run_inspect(
    config: &AppConfig,
    product_path: &Path,
    palette: Option<&Path>,
    color: Option<&str>,
) -> anyhow::Result<()> {
    let mut card = mount_card(config, product_path, palette)?;
    select_color(&mut card, color);
    // Let the mount-time preload start before reporting; the view is printed
    // whatever state it reached.
    tokio::task::yield_now().await;
    print_view(&card.view())?;
    card.unmount();
    Ok(())
}

/// Hover the card for `hover_ms` and print what the renderer would show.
pub(crate) async fn run_preview(
    config: &AppConfig,
    product_path: &Path,
    palette: Option<&Path>,
    color: Option<&str>,
    hover_ms: u64,
) -> anyhow::Result<()> {
    let mut card = mount_card(config, product_path, palette)?;
    select_color(&mut card, color);

    card.mouse_enter();
    tokio::time::sleep(Duration::from_millis(hover_ms)).await;
    let view = card.view();
    tracing::info!(
        product = %view.title,
        color = %view.selected_label,
        phase = ?view.hover.phase,
        preload = ?view.hover.preload,
        show_hover = view.hover.should_show_hover,
        "hover preview finished"
    );
    print_view(&view)?;

    card.mouse_leave();
    card.unmount();
    Ok(())
}
