//! Bindings to the page's global `mermaid` object and the two layouts the
//! diagram can be drawn in.

use std::sync::Once;
use std::sync::atomic::{AtomicU32, Ordering};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mermaid, js_name = initialize)]
    fn mermaid_initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = mermaid, js_name = parse, catch)]
    async fn mermaid_parse(code: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = mermaid, js_name = render, catch)]
    async fn mermaid_render(id: &str, code: &str) -> Result<JsValue, JsValue>;
}

const MERMAID_CONFIG: &str = r#"{
    "startOnLoad": false,
    "theme": "base",
    "look": "classic",
    "securityLevel": "loose",
    "logLevel": 3,
    "fontFamily": "sans-serif",
    "flowchart": {
        "useMaxWidth": false,
        "htmlLabels": true,
        "curve": "basis",
        "rankSpacing": 30,
        "nodeSpacing": 30,
        "padding": 15
    },
    "sequence": {
        "diagramMarginX": 50,
        "diagramMarginY": 10,
        "actorMargin": 50,
        "width": 150,
        "height": 65,
        "boxMargin": 10,
        "boxTextMargin": 5,
        "noteMargin": 10,
        "messageMargin": 35
    },
    "gantt": {
        "titleTopMargin": 25,
        "barHeight": 20,
        "barGap": 4,
        "topPadding": 50,
        "leftPadding": 75,
        "gridLineStartPadding": 35,
        "fontSize": 11,
        "sectionFontSize": 11,
        "numberSectionStyles": 4
    },
    "er": {
        "diagramPadding": 20,
        "layoutDirection": "TB",
        "minEntityWidth": 100,
        "minEntityHeight": 75,
        "entityPadding": 15,
        "stroke": "gray",
        "fill": "honeydew",
        "fontSize": 12
    },
    "pie": {
        "textPosition": 0.5
    }
}"#;

/// Vertical padding added around an inline diagram.
const INLINE_PADDING: f64 = 40.0;

static INIT: Once = Once::new();
static RENDER_IDS: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Mermaid rejected the grammar.
    Syntax(String),
    /// The code parsed but no SVG came out.
    Render(String),
}

impl RenderError {
    pub fn title(&self) -> &'static str {
        match self {
            RenderError::Syntax(_) => "Invalid Mermaid syntax",
            RenderError::Render(_) => "Error rendering diagram",
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Syntax(msg) | RenderError::Render(msg) => f.write_str(msg),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Parses an SVG `viewBox` attribute (`"min-x min-y width height"`, space or comma separated).
pub fn parse_view_box(attr: &str) -> Option<ViewBox> {
    let nums: Vec<f64> = attr
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match nums.as_slice() {
        &[x, y, width, height] if width > 0.0 && height > 0.0 => Some(ViewBox { x, y, width, height }),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramLayout {
    Inline,
    Fullscreen,
}

impl DiagramLayout {
    pub fn for_fullscreen(fullscreen: bool) -> Self {
        if fullscreen { DiagramLayout::Fullscreen } else { DiagramLayout::Inline }
    }

    /// Value of the `height` attribute written onto the rendered SVG.
    pub fn svg_height(self) -> &'static str {
        match self {
            DiagramLayout::Inline => "auto",
            DiagramLayout::Fullscreen => "100%",
        }
    }

    /// Attributes written onto the rendered SVG, after its fixed `width` is removed.
    pub fn svg_attributes(self) -> [(&'static str, &'static str); 2] {
        [
            ("style", "max-width: none; height: auto; display: block;"),
            ("height", self.svg_height()),
        ]
    }

    /// CSS height of the container holding the SVG.
    pub fn container_height(self, view_box: Option<ViewBox>) -> String {
        match (self, view_box) {
            (DiagramLayout::Fullscreen, _) => "100%".to_string(),
            (DiagramLayout::Inline, Some(vb)) => format!("{}px", vb.height + INLINE_PADDING),
            (DiagramLayout::Inline, None) => "auto".to_string(),
        }
    }
}

pub struct Rendered {
    pub view_box: Option<ViewBox>,
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{err:?}")
}

fn ensure_initialized() {
    INIT.call_once(|| match js_sys::JSON::parse(MERMAID_CONFIG) {
        Ok(config) => {
            mermaid_initialize(&config);
            log::debug!("Mermaid initialized");
        }
        Err(e) => log::error!("Invalid Mermaid config: {}", js_error_message(&e)),
    });
}

/// Renders `code` into `container`, replacing whatever was there.
pub async fn render_into(
    container: &Element,
    code: &str,
    layout: DiagramLayout,
) -> Result<Rendered, RenderError> {
    ensure_initialized();
    container.set_inner_html("");

    match mermaid_parse(code).await {
        Ok(result) if result.is_falsy() => {
            return Err(RenderError::Syntax("Mermaid could not parse the diagram".to_string()));
        }
        Ok(_) => {}
        Err(e) => return Err(RenderError::Syntax(js_error_message(&e))),
    }

    let id = format!("mermaid-svg-{}", RENDER_IDS.fetch_add(1, Ordering::Relaxed));
    let output = mermaid_render(&id, code)
        .await
        .map_err(|e| RenderError::Render(js_error_message(&e)))?;
    let svg_markup = js_sys::Reflect::get(&output, &JsValue::from_str("svg"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if svg_markup.trim().is_empty() {
        return Err(RenderError::Render("Failed to render diagram - no SVG produced".to_string()));
    }

    container.set_inner_html(&svg_markup);
    let svg = container
        .query_selector("svg")
        .ok()
        .flatten()
        .ok_or_else(|| RenderError::Render("Failed to render diagram - no SVG produced".to_string()))?;

    if let Err(e) = svg.remove_attribute("width") {
        log::warn!("Could not clear the diagram width: {}", js_error_message(&e));
    }
    for (name, value) in layout.svg_attributes() {
        if let Err(e) = svg.set_attribute(name, value) {
            log::warn!("Could not set diagram {name}: {}", js_error_message(&e));
        }
    }

    let view_box = svg.get_attribute("viewBox").as_deref().and_then(parse_view_box);
    Ok(Rendered { view_box })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_box_accepts_spaces_and_commas() {
        let vb = parse_view_box("0 0 640.5 480").unwrap();
        assert_eq!(vb.width, 640.5);
        assert_eq!(vb.height, 480.0);

        let vb = parse_view_box("-8, -8, 100, 50").unwrap();
        assert_eq!(vb.x, -8.0);
        assert_eq!(vb.height, 50.0);
    }

    #[test]
    fn view_box_rejects_garbage() {
        assert_eq!(parse_view_box(""), None);
        assert_eq!(parse_view_box("0 0 100"), None);
        assert_eq!(parse_view_box("0 0 wide 50"), None);
        assert_eq!(parse_view_box("0 0 0 50"), None);
    }

    #[test]
    fn inline_layout_pads_the_view_box_height() {
        let vb = parse_view_box("0 0 300 200");
        assert_eq!(DiagramLayout::Inline.container_height(vb), "240px");
        assert_eq!(DiagramLayout::Inline.container_height(None), "auto");
        assert_eq!(DiagramLayout::Inline.svg_height(), "auto");
    }

    #[test]
    fn fullscreen_layout_fills_its_container() {
        let layout = DiagramLayout::for_fullscreen(true);
        assert_eq!(layout, DiagramLayout::Fullscreen);
        assert_eq!(layout.container_height(parse_view_box("0 0 300 200")), "100%");
        assert_eq!(layout.svg_height(), "100%");
    }

    #[test]
    fn svg_attributes_follow_the_layout() {
        let inline = DiagramLayout::Inline.svg_attributes();
        assert_eq!(inline[1], ("height", "auto"));
        assert!(inline[0].1.contains("max-width: none"));

        let fullscreen = DiagramLayout::Fullscreen.svg_attributes();
        assert_eq!(fullscreen[1], ("height", "100%"));
        assert_eq!(fullscreen[0], inline[0]);
    }

    #[test]
    fn render_errors_keep_the_raw_message() {
        let err = RenderError::Syntax("Parse error on line 2".to_string());
        assert_eq!(err.to_string(), "Parse error on line 2");
        assert_eq!(err.title(), "Invalid Mermaid syntax");
        assert_eq!(RenderError::Render(String::new()).title(), "Error rendering diagram");
    }

    #[test]
    fn mermaid_config_is_valid_json() {
        let config: serde_json::Value = serde_json::from_str(MERMAID_CONFIG).unwrap();
        assert_eq!(config["theme"], "base");
        assert_eq!(config["flowchart"]["useMaxWidth"], false);
        assert_eq!(config["startOnLoad"], false);
    }
}
