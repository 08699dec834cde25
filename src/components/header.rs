use crate::hooks::use_parallax;
use crate::model::ParallaxConfig;
use yew::prelude::*;

/// Hero header. Title and subtitle sit on two parallax layers with
/// different speeds, so scrolling pulls them apart for a depth effect.
#[function_component(Header)]
pub fn header() -> Html {
    let title_ref = use_parallax(ParallaxConfig {
        speed: 0.6,
        ..Default::default()
    });
    let subtitle_ref = use_parallax(ParallaxConfig {
        speed: 0.4,
        ..Default::default()
    });

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; text-align:center; padding:0 24px;">
            <h1
                ref={title_ref}
                style="margin:0; font-size:56px; font-weight:700; letter-spacing:-1px; will-change:transform;"
            >
                {"Aurora"}
            </h1>
            <p
                ref={subtitle_ref}
                style="margin:0; font-size:18px; opacity:0.8; max-width:480px; will-change:transform;"
            >
                {"A scroll-reactive landing page rendered with Yew and WebAssembly"}
            </p>
            <div style="display:flex; gap:10px; margin-top:10px;">
                <FeatureBadge label="Layered parallax" />
                <FeatureBadge label="60 Hz sampling" />
                <FeatureBadge label="Motion aware" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct FeatureBadgeProps {
    pub label: &'static str,
}

#[function_component(FeatureBadge)]
fn feature_badge(props: &FeatureBadgeProps) -> Html {
    html! {
        <span style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:999px; padding:5px 14px; font-size:12px; opacity:0.9;">
            { props.label }
        </span>
    }
}
