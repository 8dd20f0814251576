use yew::prelude::*;

use deckview_core::{page_image_src, page_numbers, SurfaceSlot};

const IMAGE_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%;\
object-fit:contain;pointer-events:none;user-select:none;-webkit-user-drag:none;";

#[derive(Properties, PartialEq)]
pub(crate) struct SlideStackProps {
    pub(crate) pages_dir: AttrValue,
    pub(crate) page_count: u32,
    pub(crate) current_page: u32,
    pub(crate) slot: SurfaceSlot,
}

/// Every page image of the deck stacked in one box, with only the page for
/// `slot` displayed. Images stay mounted across page changes.
#[function_component(SlideStack)]
pub(crate) fn slide_stack(props: &SlideStackProps) -> Html {
    let opacity = match props.slot {
        SurfaceSlot::Current => "1",
        SurfaceSlot::LookAhead => "0.5",
    };
    let container_style = format!("position:relative;width:100%;height:100%;opacity:{opacity};");
    let images = page_numbers(props.page_count).map(|page| {
        let shown = props
            .slot
            .is_visible(page, props.current_page, props.page_count);
        let display = if shown { "block" } else { "none" };
        html! {
            <img
                key={page}
                src={page_image_src(&props.pages_dir, page)}
                alt={format!("Slide {page}")}
                draggable="false"
                style={format!("{IMAGE_STYLE}display:{display};")}
            />
        }
    });
    html! {
        <div class="slide-stack" style={container_style}>
            { for images }
        </div>
    }
}
