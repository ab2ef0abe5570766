use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlAnchorElement, HtmlCanvasElement,
    HtmlImageElement, XmlSerializer,
};

use crate::render::{js_error_message, parse_view_box};

/// Rasterization scale relative to the diagram's own units.
const PIXEL_RATIO: f64 = 2.0;

/// Selector for the SVG currently on screen (inline card or fullscreen modal).
const RENDERED_SVG: &str = ".diagram-canvas svg";

fn js_err(err: JsValue) -> String {
    js_error_message(&err)
}

fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())
}

/// Rasterizes the rendered diagram to PNG and triggers a download.
pub async fn export_png(file_name: &str) -> Result<(), String> {
    let document = document()?;
    let svg = document
        .query_selector(RENDERED_SVG)
        .map_err(js_err)?
        .ok_or_else(|| "No rendered diagram to export".to_string())?;

    let (svg_markup, width, height) = sized_svg_markup(&svg)?;
    let image = load_image(&svg_data_url(&svg_markup)).await?;
    let png = rasterize(&document, &image, width, height)?;
    download(&document, &png, file_name)
}

/// Clones the SVG with explicit pixel dimensions so it rasterizes at its
/// natural size instead of the container-relative size it has on screen.
fn sized_svg_markup(svg: &Element) -> Result<(String, f64, f64), String> {
    let (width, height) = match svg.get_attribute("viewBox").as_deref().and_then(parse_view_box) {
        Some(vb) => (vb.width, vb.height),
        None => (f64::from(svg.client_width()), f64::from(svg.client_height())),
    };
    if width <= 0.0 || height <= 0.0 {
        return Err("Diagram has no measurable size".to_string());
    }

    let clone: Element = svg.clone_node_with_deep(true).map_err(js_err)?.dyn_into().map_err(|v| js_err(v.into()))?;
    clone.set_attribute("width", &width.to_string()).map_err(js_err)?;
    clone.set_attribute("height", &height.to_string()).map_err(js_err)?;
    clone.remove_attribute("style").map_err(js_err)?;

    let markup = XmlSerializer::new().map_err(js_err)?.serialize_to_string(&clone).map_err(js_err)?;
    Ok((markup, width, height))
}

fn svg_data_url(markup: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(markup));
    format!("data:image/svg+xml;charset=utf-8,{encoded}")
}

async fn load_image(src: &str) -> Result<HtmlImageElement, String> {
    let image = HtmlImageElement::new().map_err(js_err)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);
    JsFuture::from(loaded).await.map_err(|_| "Failed to load diagram image".to_string())?;
    Ok(image)
}

fn rasterize(
    document: &Document,
    image: &HtmlImageElement,
    width: f64,
    height: f64,
) -> Result<String, String> {
    let canvas: HtmlCanvasElement =
        document.create_element("canvas").map_err(js_err)?.dyn_into().map_err(|v| js_err(v.into()))?;
    canvas.set_width((width * PIXEL_RATIO).ceil() as u32);
    canvas.set_height((height * PIXEL_RATIO).ceil() as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| "Canvas 2D context unavailable".to_string())?
        .dyn_into()
        .map_err(|v| js_err(v.into()))?;
    ctx.scale(PIXEL_RATIO, PIXEL_RATIO).map_err(js_err)?;
    ctx.set_fill_style_str("white");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width, height)
        .map_err(js_err)?;

    canvas.to_data_url_with_type("image/png").map_err(js_err)
}

fn download(document: &Document, href: &str, file_name: &str) -> Result<(), String> {
    let anchor: HtmlAnchorElement =
        document.create_element("a").map_err(js_err)?.dyn_into().map_err(|v| js_err(v.into()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
