//! SVG document generation with light/dark colour scheme support

use std::fmt::Write;

use anyhow::Result;
use tracing::{debug, span, Level};

use super::geometry::{resolve, ShadeFill, Shape};
use crate::core::{DiagramError, Diagram, RenderConfig, Renderer, CELL_HEIGHT, CELL_WIDTH};

/// Renders a [`Diagram`] as a standalone SVG document
///
/// # Example
///
/// ```rust
/// use artline::prelude::*;
///
/// let diagram = artline::recognize("+--+\n|  |\n+--+").unwrap();
/// let config = RenderConfig::default().with_colors("#333", "#EEE");
/// let svg = SvgRenderer::new(config).render(&diagram).unwrap();
/// assert!(svg.contains("color: #333;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    config: RenderConfig,
}

impl SvgRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn document(&self, diagram: &Diagram) -> Result<String, DiagramError> {
        let width = (diagram.width as i32 + 1) * CELL_WIDTH;
        let height = diagram.height as i32 * CELL_HEIGHT + CELL_HEIGHT / 2 + 1;

        let mut svg = String::new();
        writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' version='1.1' height='{}' width='{}' font-family='Menlo,Lucida Console,monospace'>",
            height, width
        )?;

        if self.config.embed_style {
            check_color(&self.config.light_color)?;
            check_color(&self.config.dark_color)?;
            write_style(&mut svg, &self.config.light_color, &self.config.dark_color)?;
        }

        svg.push_str("<g transform='translate(8,16)'>\n");
        for drawable in &diagram.drawables {
            write_shape(&mut svg, &resolve(drawable))?;
        }
        svg.push_str("</g>\n</svg>\n");

        Ok(svg)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, diagram: &Diagram) -> Result<String> {
        let render_span = span!(
            Level::DEBUG,
            "render_svg",
            drawables = diagram.len(),
            embed_style = self.config.embed_style
        );
        let _enter = render_span.enter();

        let svg = self.document(diagram)?;
        debug!(bytes = svg.len(), "Rendered SVG document");
        Ok(svg)
    }
}

/// Reject colours that would break out of the stylesheet
fn check_color(color: &str) -> Result<(), DiagramError> {
    if color.is_empty() || color.contains(['<', '>', '{', '}', ';', '\n']) {
        return Err(DiagramError::render_error(format!(
            "Invalid colour {:?}",
            color
        )));
    }
    Ok(())
}

fn write_style(out: &mut String, light: &str, dark: &str) -> std::fmt::Result {
    write!(
        out,
        r#"<style type="text/css">
svg {{
   color: {light};
}}
@media (prefers-color-scheme: dark) {{
   svg {{
      color: {dark};
   }}
}}
text {{
   text-anchor: middle;
   font-family: "Menlo","Lucida Console","monospace";
   fill: currentColor;
   font-size: 1em;
}}
</style>
"#
    )
}

fn write_shape(out: &mut String, shape: &Shape) -> std::fmt::Result {
    match *shape {
        Shape::Path { start, stop } => writeln!(
            out,
            "<path d='M {},{} L {},{}' fill='none' stroke='currentColor'></path>",
            start.x, start.y, stop.x, stop.y
        ),
        Shape::Arc {
            start,
            stop,
            radius,
            sweep,
        } => writeln!(
            out,
            "<path d='M {},{} A {},{} 0 0,{} {},{}' fill='none' stroke='currentColor'></path>",
            start.x,
            start.y,
            radius,
            radius,
            u8::from(sweep),
            stop.x,
            stop.y
        ),
        Shape::Polygon {
            points: [(x0, y0), (x1, y1), (x2, y2)],
            rotation,
            pivot,
        } => writeln!(
            out,
            "<polygon points='{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}' fill='currentColor' transform='rotate({:.1}, {}, {})'></polygon>",
            x0, y0, x1, y1, x2, y2, rotation, pivot.x, pivot.y
        ),
        Shape::Circle {
            center,
            radius,
            filled,
        } => writeln!(
            out,
            "<circle cx='{}' cy='{}' r='{}' stroke='currentColor' fill='{}'></circle>",
            center.x,
            center.y,
            radius,
            if filled { "currentColor" } else { "none" }
        ),
        Shape::Glyph { at, ch } => writeln!(
            out,
            "<text x='{}' y='{}'>{}</text>",
            at.x,
            at.y,
            escape_xml(ch)
        ),
        Shape::Shade { origin, fill } => {
            let fill = match fill {
                ShadeFill::Solid => "currentColor".to_string(),
                ShadeFill::Gray(level) => format!("rgb({level},{level},{level})"),
            };
            writeln!(
                out,
                "<rect x='{}' y='{}' width='8' height='16' fill='{}'></rect>",
                origin.x, origin.y, fill
            )
        }
    }
}

/// Escape one character for XML text content
fn escape_xml(ch: char) -> String {
    match ch {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        _ => ch.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Circle, Position, TextRun};

    fn diagram(drawables: Vec<crate::core::Drawable>) -> Diagram {
        Diagram {
            width: 3,
            height: 2,
            drawables,
        }
    }

    #[test]
    fn test_document_frame() {
        let svg = SvgRenderer::default().render(&diagram(vec![])).unwrap();
        assert!(svg.starts_with("<svg xmlns='http://www.w3.org/2000/svg' version='1.1' height='41' width='32'"));
        assert!(svg.contains("prefers-color-scheme: dark"));
        assert!(svg.contains("color: #000;"));
        assert!(svg.contains("color: #FFF;"));
        assert!(svg.contains("<g transform='translate(8,16)'>"));
        assert!(svg.ends_with("</g>\n</svg>\n"));
    }

    #[test]
    fn test_style_can_be_omitted() {
        let renderer = SvgRenderer::new(RenderConfig::default().with_embed_style(false));
        let svg = renderer.render(&diagram(vec![])).unwrap();
        assert!(!svg.contains("<style"));
    }

    #[test]
    fn test_invalid_colour_is_rejected() {
        let renderer = SvgRenderer::new(RenderConfig::default().with_colors("red;}", "#FFF"));
        let err = renderer.render(&diagram(vec![])).unwrap_err();
        assert!(err.to_string().contains("Invalid colour"));
    }

    #[test]
    fn test_circle_and_text_elements() {
        let svg = SvgRenderer::default()
            .render(&diagram(vec![
                Circle { position: Position::new(1, 1), bold: false }.into(),
                TextRun { position: Position::new(2, 0), ch: '<' }.into(),
            ]))
            .unwrap();
        assert!(svg.contains("<circle cx='8' cy='16' r='6' stroke='currentColor' fill='none'></circle>"));
        assert!(svg.contains("<text x='16' y='4'>&lt;</text>"));
    }

    #[test]
    fn test_polygon_formatting() {
        let mut out = String::new();
        write_shape(
            &mut out,
            &Shape::Polygon {
                points: [(8.0, 0.0), (-4.0, -5.6), (-4.0, 5.6)],
                rotation: 90.0,
                pivot: crate::core::Pixel::new(0, 0),
            },
        )
        .unwrap();
        assert_eq!(
            out,
            "<polygon points='8.0,0.0 -4.0,-5.6 -4.0,5.6' fill='currentColor' transform='rotate(90.0, 0, 0)'></polygon>\n"
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml('&'), "&amp;");
        assert_eq!(escape_xml('>'), "&gt;");
        assert_eq!(escape_xml('x'), "x");
    }
}
