//! Medichat brand mark: render request, rendered document, and SVG markup.
//!
//! # Design
//! - Rendering is infallible; every width/height/class combination is accepted verbatim.
//! - Geometry and colours are constants; only the root display attributes vary.
//! - The document is the single source for both the Yew component and the markup export.

use std::fmt::{self, Display, Formatter, Write as _};

use serde::{Deserialize, Serialize, Serializer};

/// Display width used when the caller does not supply one.
pub const DEFAULT_WIDTH: f64 = 80.0;
/// Display height used when the caller does not supply one.
pub const DEFAULT_HEIGHT: f64 = 80.0;

/// SVG namespace attached to the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// Root `fill` attribute; shapes carry their own fills.
pub const ROOT_FILL: &str = "none";

/// Fixed logical coordinate system of the logo.
pub const VIEW_BOX: ViewBox = ViewBox {
    min_x: 0.0,
    min_y: 0.0,
    width: 100.0,
    height: 100.0,
};

/// Rounded badge behind the cross.
pub const BADGE: LogoShape = LogoShape::Rect {
    x: 5.0,
    y: 5.0,
    width: 90.0,
    height: 90.0,
    rx: 20.0,
    fill: "#2196F3",
};

/// Medical cross drawn over the badge.
pub const CROSS: LogoShape = LogoShape::Path {
    d: "M65 45H55V35H45V45H35V55H45V65H55V55H65V45Z",
    fill: "white",
};

/// Parameters for a single logo render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoRequest {
    /// Display width of the root element.
    pub width: f64,
    /// Display height of the root element.
    pub height: f64,
    /// Class attached verbatim to the root element.
    pub class: Option<String>,
}

impl Default for LogoRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            class: None,
        }
    }
}

impl LogoRequest {
    /// Replace the display width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Replace the display height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Attach a class to the root element.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Render the logo for this request.
    #[must_use]
    pub fn render(&self) -> LogoDocument {
        render_logo(self)
    }
}

/// Logical viewport of an SVG document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewBox {
    /// Left edge in logical units.
    pub min_x: f64,
    /// Top edge in logical units.
    pub min_y: f64,
    /// Logical width.
    pub width: f64,
    /// Logical height.
    pub height: f64,
}

impl Display for ViewBox {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} {} {} {}",
            SvgNumber(self.min_x),
            SvgNumber(self.min_y),
            SvgNumber(self.width),
            SvgNumber(self.height)
        )
    }
}

/// Fixed shapes making up the logo.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogoShape {
    /// Rounded rectangle.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Rectangle width.
        width: f64,
        /// Rectangle height.
        height: f64,
        /// Corner radius.
        rx: f64,
        /// Fill colour.
        fill: &'static str,
    },
    /// Filled path.
    Path {
        /// Path data.
        d: &'static str,
        /// Fill colour.
        fill: &'static str,
    },
}

/// Rendered logo: root attributes plus the ordered shape list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogoDocument {
    /// Display width, as requested.
    #[serde(serialize_with = "serialize_dimension")]
    pub width: f64,
    /// Display height, as requested.
    #[serde(serialize_with = "serialize_dimension")]
    pub height: f64,
    /// Always [`VIEW_BOX`].
    pub view_box: ViewBox,
    /// Root fill, always [`ROOT_FILL`].
    pub fill: &'static str,
    /// Always [`SVG_NAMESPACE`].
    pub xmlns: &'static str,
    /// Class copied from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Badge first, cross second.
    pub shapes: [LogoShape; 2],
}

/// Finite sizes stay numbers; NaN and infinities become their markup strings
/// instead of JSON `null`.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_dimension<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(&SvgNumber(*value))
    }
}

/// Render the Medichat logo for the supplied request.
///
/// Never fails: zero, negative, fractional, and non-finite sizes are carried through unchanged.
#[must_use]
pub fn render_logo(request: &LogoRequest) -> LogoDocument {
    LogoDocument {
        width: request.width,
        height: request.height,
        view_box: VIEW_BOX,
        fill: ROOT_FILL,
        xmlns: SVG_NAMESPACE,
        class: request.class.clone(),
        shapes: [BADGE, CROSS],
    }
}

impl LogoDocument {
    /// Serialize the document as standalone SVG markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl Display for LogoDocument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            r#"<svg width="{}" height="{}" viewBox="{}" fill="{}" xmlns="{}""#,
            SvgNumber(self.width),
            SvgNumber(self.height),
            self.view_box,
            self.fill,
            self.xmlns
        )?;
        if let Some(class) = &self.class {
            write!(formatter, r#" class="{}""#, EscapedAttr(class))?;
        }
        formatter.write_char('>')?;
        for shape in &self.shapes {
            write!(formatter, "{shape}")?;
        }
        formatter.write_str("</svg>")
    }
}

impl Display for LogoShape {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rect {
                x,
                y,
                width,
                height,
                rx,
                fill,
            } => write!(
                formatter,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
                SvgNumber(x),
                SvgNumber(y),
                SvgNumber(width),
                SvgNumber(height),
                SvgNumber(rx),
                EscapedAttr(fill)
            ),
            Self::Path { d, fill } => write!(
                formatter,
                r#"<path d="{}" fill="{}"/>"#,
                EscapedAttr(d),
                EscapedAttr(fill)
            ),
        }
    }
}

/// Number formatted the way a browser stringifies attribute values.
#[derive(Clone, Copy, Debug)]
pub struct SvgNumber(pub f64);

impl Display for SvgNumber {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            formatter.write_str("NaN")
        } else if value.is_infinite() {
            formatter.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            // covers -0
            formatter.write_char('0')
        } else if (1e-6..1e21).contains(&value.abs()) {
            write!(formatter, "{value}")
        } else {
            let exponent = format!("{value:e}");
            match exponent.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(formatter, "{mantissa}e+{power}")
                }
                _ => formatter.write_str(&exponent),
            }
        }
    }
}

struct EscapedAttr<'a>(&'a str);

impl Display for EscapedAttr<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => formatter.write_str("&amp;")?,
                '<' => formatter.write_str("&lt;")?,
                '>' => formatter.write_str("&gt;")?,
                '"' => formatter.write_str("&quot;")?,
                other => formatter.write_char(other)?,
            }
        }
        Ok(())
    }
}
