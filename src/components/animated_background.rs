use crate::hooks::use_scroll_y;
use crate::model::fade_opacity;
use yew::prelude::*;

/// Decorative backdrop: two blurred gradient orbs on a fixed full-viewport
/// layer that fades out over the first stretch of scroll.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let scroll_y = use_scroll_y();
    let opacity = fade_opacity(scroll_y);

    html! {
        <div
            id="animated-background"
            style={format!("position:fixed; top:0; left:0; right:0; bottom:0; z-index:0; overflow:hidden; pointer-events:none; opacity:{opacity};")}
        >
            <div
                class="gradient-orb"
                style="top:-12%; left:-8%; width:46vw; height:46vw; background:radial-gradient(circle at 30% 30%, rgba(31,111,235,0.55), rgba(31,111,235,0) 70%);"
            ></div>
            <div
                class="gradient-orb"
                style="bottom:-16%; right:-6%; width:38vw; height:38vw; background:radial-gradient(circle at 70% 70%, rgba(137,87,229,0.5), rgba(137,87,229,0) 70%); animation-delay:-9s;"
            ></div>
        </div>
    }
}
