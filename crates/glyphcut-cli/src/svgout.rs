//! SVG document wrapping for exported characters.

use svg::Document;
use svg::node::element::Path as SvgPath;

/// Wrap glyph path data in a standalone SVG document.
///
/// The viewBox fits Noto-style CJK metrics: a 1000-unit em with 200 units
/// of descender headroom. Font design units are Y-up, so the path is
/// flipped around the em box into SVG's Y-down space.
pub fn wrap_glyph(path_data: &str) -> Document {
    let path = SvgPath::new()
        .set("d", path_data)
        .set("fill", "#000")
        .set("transform", "matrix(1,0,0,-1,0,1000)");

    Document::new()
        .set("width", 500)
        .set("height", 500)
        .set("viewBox", (0, -200, 1000, 1400))
        .add(path)
}
