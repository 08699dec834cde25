use super::{animated_background::AnimatedBackground, header::Header};
use yew::prelude::*;

// Orb drift runs in CSS so it keeps animating between scroll samples; it is
// switched off wholesale under prefers-reduced-motion.
const GLOBAL_CSS: &str = r#"
html, body {
    margin: 0;
    background: #0e1116;
    color: #e6edf3;
    font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
}
.gradient-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(60px);
    animation: orb-drift 18s ease-in-out infinite alternate;
}
@keyframes orb-drift {
    from { transform: translate3d(0, 0, 0) scale(1); }
    to   { transform: translate3d(40px, -30px, 0) scale(1.15); }
}
@media (prefers-reduced-motion: reduce) {
    .gradient-orb { animation: none; }
}
"#;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div id="app" style="position:relative;">
            <style>{ GLOBAL_CSS }</style>
            <AnimatedBackground />
            <div style="position:relative; z-index:1;">
                <Header />
                // Empty space that gives the page something to scroll over
                <div style="height:160vh;"></div>
            </div>
        </div>
    }
}
