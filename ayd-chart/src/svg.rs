//! SVG serialization of a recorded [`Scene`].
//!
//! Hover text becomes a `<title>` child, the native SVG tooltip. All
//! user-supplied strings are XML-escaped.

use std::fmt::Write;

use crate::scene::{Element, Scene, Shape};

/// Escape the five XML special characters.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

impl Scene {
    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (vx, vy, vw, vh) = self.view_box();
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{vx} {vy} {vw} {vh}" style="max-width: 100%; height: auto; font: 10px sans-serif;">"#,
            self.width(),
            self.height(),
        );
        for element in self.elements() {
            write_element(&mut out, element);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_element(out: &mut String, element: &Element) {
    let title = element
        .hover
        .as_deref()
        .map(|hover| format!("<title>{}</title>", xml_escape(hover)));

    match &element.shape {
        Shape::Path {
            d,
            fill,
            stroke,
            stroke_width,
        } => {
            let _ = write!(out, r#"  <path d="{}""#, xml_escape(d));
            let _ = write!(out, r#" fill="{}""#, fill.as_deref().unwrap_or("none"));
            if let Some(stroke) = stroke {
                let _ = write!(
                    out,
                    r#" stroke="{}" stroke-width="{stroke_width}""#,
                    xml_escape(stroke)
                );
            }
            close_with_title(out, "path", title);
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let _ = write!(
                out,
                r#"  <rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" fill="{}""#,
                xml_escape(fill)
            );
            if let Some(stroke) = stroke {
                let _ = write!(out, r#" stroke="{}""#, xml_escape(stroke));
            }
            close_with_title(out, "rect", title);
        }
        Shape::Text {
            x,
            y,
            content,
            size,
            anchor,
            fill,
            rotate,
            bold,
            halo,
        } => {
            let _ = write!(
                out,
                r#"  <text text-anchor="{}" font-size="{size}" fill="{}""#,
                anchor.as_svg(),
                xml_escape(fill)
            );
            if let Some(angle) = rotate {
                let _ = write!(
                    out,
                    r#" transform="translate({x:.2} {y:.2}) rotate({angle:.2})""#
                );
            } else {
                let _ = write!(out, r#" x="{x:.2}" y="{y:.2}""#);
            }
            if *bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if *halo {
                out.push_str(r#" paint-order="stroke" stroke="white" stroke-width="4""#);
            }
            let _ = write!(out, ">{}", xml_escape(content));
            if let Some(title) = title {
                out.push_str(&title);
            }
            out.push_str("</text>\n");
        }
    }
}

fn close_with_title(out: &mut String, tag: &str, title: Option<String>) {
    match title {
        Some(title) => {
            let _ = writeln!(out, ">{title}</{tag}>");
        }
        None => out.push_str("/>\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TextAnchor;

    #[test]
    fn test_escapes_country_names() {
        assert_eq!(xml_escape("Trinidad & Tobago"), "Trinidad &amp; Tobago");
        assert_eq!(xml_escape("<svg>"), "&lt;svg&gt;");
    }

    #[test]
    fn test_hover_becomes_title() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.add_hoverable(
            Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: 5.0,
                height: 5.0,
                fill: "rgb(1,2,3)".into(),
                stroke: None,
            },
            "Area: Chad\nYield: 12.34".into(),
        );
        let svg = scene.to_svg();
        assert!(svg.contains("<title>Area: Chad\nYield: 12.34</title>"));
        assert!(svg.contains("</rect>"));
    }

    #[test]
    fn test_rotated_text_uses_transform() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.add(Shape::Text {
            x: 3.0,
            y: 4.0,
            content: "tilt".into(),
            size: 13.0,
            anchor: TextAnchor::End,
            fill: "#000".into(),
            rotate: Some(-45.0),
            bold: false,
            halo: false,
        });
        let svg = scene.to_svg();
        assert!(svg.contains("rotate(-45.00)"));
        assert!(svg.contains("translate(3.00 4.00)"));
    }

    #[test]
    fn test_document_shape() {
        let scene = Scene::new(20.0, 30.0);
        let svg = scene.to_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 20 30""#));
    }
}
