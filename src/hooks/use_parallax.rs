use super::use_scroll::use_scroll_y;
use crate::model::ParallaxConfig;
use crate::util;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Binds a vertical parallax translation to the returned node ref.
///
/// Attach the ref to exactly one rendered element; while it is mounted its
/// transform tracks `-(scroll_y * speed) + offset`. When the user prefers
/// reduced motion the element is pinned to the identity transform instead.
/// Never attaching the ref is a no-op.
#[hook]
pub fn use_parallax(config: ParallaxConfig) -> NodeRef {
    let node_ref = use_node_ref();
    let scroll_y = use_scroll_y();

    {
        let node_ref = node_ref.clone();
        use_effect_with((scroll_y, config), move |deps| {
            let (scroll_y, config) = *deps;
            if let Some(el) = node_ref.cast::<HtmlElement>() {
                // A trailing throttle run can outlive the element; never
                // write to a detached node
                if el.is_connected() {
                    let value = if util::prefers_reduced_motion() {
                        "none".to_string()
                    } else {
                        config.transform(scroll_y)
                    };
                    el.style().set_property("transform", &value).ok();
                }
            }
            || ()
        });
    }

    node_ref
}
