use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;
use yew::prelude::*;

use crate::animation::use_spring;
use crate::config::StickerConfig;
use crate::model::{StickerAction, StickerSource, StickerState};
use crate::state::{PanRecognizer, TapRecognizer};
use crate::util::{clog, fmt_px};

#[derive(Properties, PartialEq, Clone)]
pub struct EmojiStickerProps {
    /// Edge length of the square sticker at 1x.
    pub image_size: f64,
    pub sticker_source: StickerSource,
}

fn client_pos(e: &PointerEvent) -> (f64, f64) {
    (e.client_x() as f64, e.client_y() as f64)
}

/// Draggable sticker. A one-finger drag anywhere on it moves it; a double tap on the image
/// toggles between the base size and twice that, with a spring transition.
#[function_component(EmojiSticker)]
pub fn emoji_sticker(props: &EmojiStickerProps) -> Html {
    let config = use_context::<StickerConfig>().unwrap_or_default();
    let debug = config.debug_log;
    let sticker = {
        let base = props.image_size;
        use_reducer(move || StickerState::new(base))
    };
    let pan = {
        let activation = config.pan.activation_distance;
        use_mut_ref(move || PanRecognizer::new(activation))
    };
    let tap = {
        let settings = config.tap.clone();
        use_mut_ref(move || TapRecognizer::new(settings))
    };
    let size = use_spring(sticker.size, config.spring);

    // Move/up are watched on the window so a drag survives leaving the sticker.
    {
        let pan = pan.clone();
        let tap = tap.clone();
        let sticker = sticker.clone();
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|win| {
                let on_move = {
                    let pan = pan.clone();
                    let tap = tap.clone();
                    let sticker = sticker.clone();
                    EventListener::new(&win, "pointermove", move |e| {
                        let Some(e) = e.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        // Nothing held: the release happened where we could not see it.
                        if e.buttons() == 0 {
                            tap.borrow_mut().release_elsewhere(e.pointer_id());
                            if pan.borrow_mut().up(e.pointer_id()) {
                                clog(debug, "sticker: pan ended without a release");
                            }
                            return;
                        }
                        let (x, y) = client_pos(e);
                        let change = pan.borrow_mut().moved(e.pointer_id(), x, y);
                        if let Some(change) = change {
                            if change.began {
                                tap.borrow_mut().reset();
                                clog(debug, "sticker: pan began");
                            }
                            sticker.dispatch(StickerAction::Drag {
                                dx: change.dx,
                                dy: change.dy,
                            });
                        }
                    })
                };
                let on_up = {
                    let pan = pan.clone();
                    let tap = tap.clone();
                    EventListener::new(&win, "pointerup", move |e| {
                        let Some(e) = e.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        // The image's own handler has already run if the release hit it.
                        tap.borrow_mut().release_elsewhere(e.pointer_id());
                        if pan.borrow_mut().up(e.pointer_id()) {
                            clog(debug, "sticker: pan ended");
                        }
                    })
                };
                let on_cancel = {
                    let pan = pan.clone();
                    let tap = tap.clone();
                    EventListener::new(&win, "pointercancel", move |e| {
                        let Some(e) = e.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        pan.borrow_mut().up(e.pointer_id());
                        tap.borrow_mut().reset();
                    })
                };
                (on_move, on_up, on_cancel)
            });
            move || drop(listeners)
        });
    }

    let on_container_down = {
        let pan = pan.clone();
        Callback::from(move |e: PointerEvent| {
            let (x, y) = client_pos(&e);
            if pan.borrow_mut().down(e.pointer_id(), x, y) {
                e.prevent_default();
            }
        })
    };

    let on_image_down = {
        let tap = tap.clone();
        Callback::from(move |e: PointerEvent| {
            let (x, y) = client_pos(&e);
            tap.borrow_mut().down(e.pointer_id(), x, y, e.time_stamp());
        })
    };
    let on_image_move = {
        let tap = tap.clone();
        Callback::from(move |e: PointerEvent| {
            let (x, y) = client_pos(&e);
            tap.borrow_mut().moved(e.pointer_id(), x, y);
        })
    };
    let on_image_up = {
        let tap = tap.clone();
        let sticker = sticker.clone();
        Callback::from(move |e: PointerEvent| {
            let (x, y) = client_pos(&e);
            let fired = tap.borrow_mut().up(e.pointer_id(), x, y, e.time_stamp());
            if fired {
                clog(
                    debug,
                    &format!(
                        "sticker: double tap {} -> {}",
                        fmt_px(sticker.size),
                        fmt_px(sticker.toggled_size())
                    ),
                );
                sticker.dispatch(StickerAction::DoubleTap);
            }
        })
    };

    let container_style = format!(
        "position:relative; top:{}px; transform:translate({}px, {}px); touch-action:none; width:fit-content;",
        config.vertical_shift, sticker.offset.dx, sticker.offset.dy
    );
    let image_style = format!(
        "width:{size}px; height:{size}px; object-fit:contain; display:block; touch-action:none; user-select:none;"
    );

    html! {
        <div class="sticker" style={container_style} onpointerdown={on_container_down}>
            <img
                class="sticker-image"
                src={props.sticker_source.to_attr()}
                draggable="false"
                style={image_style}
                onpointerdown={on_image_down}
                onpointermove={on_image_move}
                onpointerup={on_image_up}
            />
        </div>
    }
}
