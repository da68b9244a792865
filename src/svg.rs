//! SVG visualization of a computed grid layout.
//!
//! Draws the container, the padding box, every card with its item index,
//! and a caption with the grid shape, card size, and efficiency. Useful for
//! eyeballing layouts in tests and bug reports.
//!
//! # Example
//!
//! ```
//! use cardgrid::{DeviceType, LayoutConfig, svg::render_layout_svg};
//!
//! let layout = LayoutConfig::new(800.0, 600.0, 12, DeviceType::Desktop)
//!     .compute()
//!     .unwrap();
//!
//! let svg = render_layout_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("4×3"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::grid::{CardPosition, GridLayout};
use crate::render::{GridRenderer, render};

/// Maximum pixel width of the drawn container.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height of the drawn container.
const MAX_PANEL_H: f64 = 360.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin above the caption.
const MARGIN_TOP: f64 = 20.0;
/// Height of the caption area above the panel.
const LABEL_H: f64 = 36.0;

/// Renders a [`GridLayout`] into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    svg: String,
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, line: &str) {
        self.svg.push_str(line);
        self.svg.push('\n');
    }
}

impl GridRenderer for SvgRenderer {
    type Output = String;

    fn begin(&mut self, layout: &GridLayout) {
        let (panel_w, panel_h, scale) = scale_to_fit(layout.container.width, layout.container.height);
        self.scale = scale;
        self.origin_x = MARGIN_X;
        self.origin_y = MARGIN_TOP + LABEL_H;

        let total_w = panel_w + 2.0 * MARGIN_X;
        let total_h = self.origin_y + panel_h + MARGIN_TOP;

        self.svg = String::with_capacity(4096);
        self.push_line(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
            total_w as u32, total_h as u32, total_w, total_h
        ));

        // Light/dark mode via prefers-color-scheme
        self.svg.push_str(
            r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .index { font-size: 10px; fill: #fff; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .usable { fill: none; stroke: #aaa; stroke-width: 1; stroke-dasharray: 4,2; }
  .card { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .usable { stroke: #666; }
    .card { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
        );

        let center_x = total_w / 2.0;
        let label = format!(
            "{}×{} grid  {} cards  {:.0}×{:.0}",
            layout.cols,
            layout.rows,
            layout.positions.len(),
            layout.card.width,
            layout.card.height
        );
        self.push_line(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            MARGIN_TOP + 14.0,
            escape_xml(&label)
        ));
        let annotation = format!(
            "container {:.0}×{:.0}, efficiency {:.1}%, {:?}",
            layout.container.width,
            layout.container.height,
            layout.efficiency * 100.0,
            layout.screen_orientation()
        );
        self.push_line(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            MARGIN_TOP + 30.0,
            escape_xml(&annotation)
        ));

        // Container and the padding inset
        self.push_line(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
            self.origin_x, self.origin_y, panel_w, panel_h
        ));
        let pad = layout.constraints.padding * scale;
        if pad > 0.0 && panel_w > 2.0 * pad && panel_h > 2.0 * pad {
            self.push_line(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="usable"/>"#,
                self.origin_x + pad,
                self.origin_y + pad,
                panel_w - 2.0 * pad,
                panel_h - 2.0 * pad
            ));
        }
    }

    fn card(&mut self, index: usize, position: &CardPosition) {
        let x = self.origin_x + position.left() * self.scale;
        let y = self.origin_y + position.top() * self.scale;
        let w = position.width * self.scale;
        let h = position.height * self.scale;
        self.push_line(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="card" rx="2"/>"#
        ));
        self.push_line(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text>"#,
            self.origin_x + position.x * self.scale,
            self.origin_y + position.y * self.scale + 3.5,
            index
        ));
    }

    fn finish(mut self) -> String {
        self.svg.push_str("</svg>\n");
        self.svg
    }
}

/// Render `layout` as a complete SVG document.
pub fn render_layout_svg(layout: &GridLayout) -> String {
    render(layout, SvgRenderer::new())
}

/// Scale a container to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if !(w > 0.0) || !(h > 0.0) {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::DeviceType;
    use crate::grid::LayoutConfig;

    fn layout(w: f64, h: f64, n: u32) -> GridLayout {
        LayoutConfig::new(w, h, n, DeviceType::Desktop)
            .compute()
            .unwrap()
    }

    #[test]
    fn svg_is_complete_document() {
        let svg = render_layout_svg(&layout(800.0, 600.0, 12));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("<<"));
    }

    #[test]
    fn svg_has_one_rect_per_card() {
        let svg = render_layout_svg(&layout(800.0, 600.0, 12));
        assert_eq!(svg.matches(r#"class="card""#).count(), 12);
        assert_eq!(svg.matches(r#"class="index""#).count(), 12);
    }

    #[test]
    fn svg_caption_describes_layout() {
        let svg = render_layout_svg(&layout(800.0, 600.0, 12));
        assert!(svg.contains("4×3 grid"));
        assert!(svg.contains("12 cards"));
        assert!(svg.contains("container 800×600"));
        assert!(svg.contains("efficiency"));
        assert!(svg.contains("Landscape"));
    }

    #[test]
    fn svg_cards_stay_in_panel() {
        let l = layout(1920.0, 1080.0, 36);
        let (panel_w, panel_h, _) = scale_to_fit(1920.0, 1080.0);
        let mut r = SvgRenderer::new();
        r.begin(&l);
        for p in &l.positions {
            let x = r.origin_x + p.left() * r.scale;
            let y = r.origin_y + p.top() * r.scale;
            assert!(x >= r.origin_x - 1e-9);
            assert!(y >= r.origin_y - 1e-9);
            assert!(x + p.width * r.scale <= r.origin_x + panel_w + 1e-9);
            assert!(y + p.height * r.scale <= r.origin_y + panel_h + 1e-9);
        }
    }

    #[test]
    fn escape() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
