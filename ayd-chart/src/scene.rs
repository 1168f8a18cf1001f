//! The recorded drawing surface renderers target.
//!
//! A [`Scene`] is an ordered list of typed shapes with optional hover
//! text, standing in for a live DOM container. Renderers clear and
//! refill it on every call; tests compare scenes structurally instead of
//! inspecting markup.

/// SVG text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path {
        d: String,
        fill: Option<String>,
        stroke: Option<String>,
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        stroke: Option<String>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        anchor: TextAnchor,
        fill: String,
        /// Rotation in degrees about `(x, y)`.
        rotate: Option<f64>,
        bold: bool,
        /// Draw a white outline behind the glyphs so labels stay legible
        /// over chart content.
        halo: bool,
    },
}

impl Shape {
    /// Plain label text with the common defaults.
    pub fn label(x: f64, y: f64, content: impl Into<String>) -> Shape {
        Shape::Text {
            x,
            y,
            content: content.into(),
            size: 10.0,
            anchor: TextAnchor::Start,
            fill: "#000".to_string(),
            rotate: None,
            bold: false,
            halo: false,
        }
    }
}

/// A shape plus its interactive affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub shape: Shape,
    /// Tooltip text shown while hovering the shape, if any.
    pub hover: Option<String>,
}

/// A container's recorded visual content.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    view_box: (f64, f64, f64, f64),
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Scene {
            width,
            height,
            view_box: (0.0, 0.0, width, height),
            elements: Vec::new(),
        }
    }

    /// A scene with a custom view box (the pie chart centers its origin).
    pub fn with_view_box(width: f64, height: f64, view_box: (f64, f64, f64, f64)) -> Self {
        Scene {
            width,
            height,
            view_box,
            elements: Vec::new(),
        }
    }

    /// Discard all prior content. Every renderer calls this first.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn add(&mut self, shape: Shape) {
        self.elements.push(Element { shape, hover: None });
    }

    pub fn add_hoverable(&mut self, shape: Shape, hover: String) {
        self.elements.push(Element {
            shape,
            hover: Some(hover),
        });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn view_box(&self) -> (f64, f64, f64, f64) {
        self.view_box
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_discards_elements() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.add(Shape::label(0.0, 0.0, "hi"));
        scene.add_hoverable(Shape::label(1.0, 1.0, "there"), "tip".into());
        assert_eq!(scene.elements().len(), 2);
        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_default_view_box_matches_size() {
        let scene = Scene::new(80.0, 40.0);
        assert_eq!(scene.view_box(), (0.0, 0.0, 80.0, 40.0));
    }
}
