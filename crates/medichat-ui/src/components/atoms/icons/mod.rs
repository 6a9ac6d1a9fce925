//! Brand icons rendered from the fixed logo geometry.

use yew::prelude::*;
use yew::virtual_dom::VTag;

use crate::logo::{DEFAULT_HEIGHT, DEFAULT_WIDTH, LogoRequest, LogoShape, SvgNumber};

mod medichat_logo;

pub use medichat_logo::MedichatLogoIcon;

/// Properties accepted by [`MedichatLogoIcon`].
#[derive(Properties, PartialEq, Clone)]
pub struct LogoProps {
    /// Display width; defaults to 80.
    #[prop_or(DEFAULT_WIDTH)]
    pub width: f64,
    /// Display height; defaults to 80.
    #[prop_or(DEFAULT_HEIGHT)]
    pub height: f64,
    /// Class attached verbatim to the `<svg>` root.
    #[prop_or_default]
    pub class: Option<AttrValue>,
}

impl From<&LogoProps> for LogoRequest {
    fn from(props: &LogoProps) -> Self {
        Self {
            width: props.width,
            height: props.height,
            class: props.class.as_ref().map(ToString::to_string),
        }
    }
}

fn number_attr(value: f64) -> AttrValue {
    AttrValue::from(SvgNumber(value).to_string())
}

fn shape_html(shape: &LogoShape) -> Html {
    match *shape {
        LogoShape::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
        } => html! {
            <rect
                x={number_attr(x)}
                y={number_attr(y)}
                width={number_attr(width)}
                height={number_attr(height)}
                rx={number_attr(rx)}
                fill={fill}
            />
        },
        LogoShape::Path { d, fill } => html! { <path d={d} fill={fill} /> },
    }
}

/// Root `<svg>` built attribute by attribute; `class` bypasses `Classes` so the
/// value is neither split nor dropped when empty.
fn logo_svg(request: &LogoRequest) -> Html {
    let document = request.render();
    let mut svg = VTag::new("svg");
    svg.add_attribute("width", number_attr(document.width));
    svg.add_attribute("height", number_attr(document.height));
    svg.add_attribute("viewBox", document.view_box.to_string());
    svg.add_attribute("fill", document.fill);
    svg.add_attribute("xmlns", document.xmlns);
    if let Some(class) = document.class {
        svg.add_attribute("class", class);
    }
    for shape in &document.shapes {
        svg.add_child(shape_html(shape));
    }
    svg.into()
}
