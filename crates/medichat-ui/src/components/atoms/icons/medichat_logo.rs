use yew::prelude::*;

use super::{LogoProps, logo_svg};
use crate::logo::LogoRequest;

/// Medichat brand mark: blue rounded badge with a white medical cross.
#[function_component(MedichatLogoIcon)]
pub fn medichat_logo_icon(props: &LogoProps) -> Html {
    logo_svg(&LogoRequest::from(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[function_component(DefaultLogo)]
    fn default_logo() -> Html {
        html! { <MedichatLogoIcon /> }
    }

    async fn render_with(width: f64, height: f64, class: Option<&'static str>) -> String {
        ServerRenderer::<MedichatLogoIcon>::with_props(move || LogoProps {
            width,
            height,
            class: class.map(AttrValue::from),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn default_props_render_reference_logo() {
        let markup = ServerRenderer::<DefaultLogo>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(markup.contains(r#"width="80""#));
        assert!(markup.contains(r#"height="80""#));
        assert!(markup.contains(r#"viewBox="0 0 100 100""#));
        assert!(markup.contains(r##"fill="#2196F3""##));
        assert!(markup.contains(r#"d="M65 45H55V35H45V45H35V55H45V65H55V55H65V45Z""#));
        assert!(markup.contains(r#"fill="white""#));
        assert!(!markup.contains("class="));
        assert_eq!(markup.matches("<rect").count(), 1);
        assert_eq!(markup.matches("<path").count(), 1);
    }

    #[tokio::test]
    async fn server_markup_matches_document_markup() {
        let markup = ServerRenderer::<DefaultLogo>::new()
            .hydratable(false)
            .render()
            .await;
        let normalised = markup.replace("></rect>", "/>").replace("></path>", "/>");
        assert_eq!(normalised, LogoRequest::default().render().to_markup());
    }

    #[tokio::test]
    async fn nav_icon_props_set_root_size_and_class() {
        let markup = render_with(32.0, 32.0, Some("nav-icon")).await;
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="32""#));
        assert!(markup.contains(r#"height="32""#));
        assert_eq!(markup.matches(r#"class="nav-icon""#).count(), 1);
        assert!(markup.contains(r#"<rect x="5" y="5" width="90" height="90" rx="20""#));
    }

    #[tokio::test]
    async fn class_with_inner_whitespace_is_kept_verbatim() {
        let markup = render_with(24.5, 0.0, Some("brand  logo")).await;
        assert!(markup.contains(r#"width="24.5""#));
        assert!(markup.contains(r#"height="0""#));
        assert!(markup.contains(r#"class="brand  logo""#));
    }

    #[test]
    fn props_convert_to_render_request() {
        let props = LogoProps {
            width: -4.0,
            height: 12.0,
            class: Some(AttrValue::from("x")),
        };
        let request = LogoRequest::from(&props);
        assert_eq!(
            request,
            LogoRequest::default()
                .with_width(-4.0)
                .with_height(12.0)
                .with_class("x")
        );
    }
}
