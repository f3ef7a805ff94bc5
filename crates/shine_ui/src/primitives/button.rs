use wasm_bindgen::JsCast;

use super::*;

#[component]
/// Button with a soft radial highlight that follows the pointer.
///
/// The highlight center is tracked in the button's own coordinate space and
/// is only visible while hovered and enabled. When `node_ref` is supplied it
/// receives the rendered `<button>` and is also the element measured for
/// pointer tracking; otherwise an internal reference is used.
pub fn ShineButton(
    #[prop(default = ShineVariant::Default)] variant: ShineVariant,
    #[prop(default = ShineSize::Default)] size: ShineSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional)] overlay: ShineOverlay,
    #[prop(optional)] node_ref: Option<NodeRef<html::Button>>,
    /// Native `type` attribute. Defaults to `"button"`, so the button does not
    /// submit an enclosing form; pass `"submit"` to restore form submission.
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(create_node_ref::<html::Button>);
    let state = create_rw_signal(ShineState::default());

    let label = match children {
        Some(children) => children().into_view(),
        None => DEFAULT_LABEL.into_view(),
    };

    let on_mousemove = move |ev: MouseEvent| {
        let is_disabled = disabled.get_untracked();
        if is_disabled {
            return;
        }
        let Some(origin) = element_origin(node_ref, &ev) else {
            return;
        };
        let position = PointerPosition::relative_to(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            origin,
        );

        let mut next = state.get_untracked();
        if next.pointer_move(position, is_disabled) {
            state.set(next);
        }
    };

    view! {
        <button
            type=button_type
            class=move || button_class(variant, size, disabled.get(), class_name.as_deref())
            id=id
            title=title
            aria-label=aria_label
            node_ref=node_ref
            disabled=move || disabled.get()
            aria-disabled=move || bool_token(disabled.get())
            data-ui-primitive="true"
            data-ui-kind="shine-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-hover=move || bool_token(state.with(|state| state.hovering))
            on:mousemove=on_mousemove
            on:mouseenter=move |_| state.update(ShineState::pointer_enter)
            on:mouseleave=move |_| state.update(ShineState::pointer_leave)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            <div
                class=move || overlay_class(state.with(|state| state.overlay_visible(disabled.get())))
                style=move || {
                    format!("background: {}", state.with(|state| overlay.background(state.position)))
                }
                aria-hidden="true"
                data-ui-slot="shine"
            ></div>
            <span class=LABEL_CLASSES data-ui-slot="label">
                {label}
            </span>
        </button>
    }
}

/// Viewport origin of the button's bounding box.
///
/// Falls back to the event's current target when the reference has not been
/// mounted yet.
fn element_origin(node_ref: NodeRef<html::Button>, ev: &MouseEvent) -> Option<ElementOrigin> {
    let rect = match node_ref.get_untracked() {
        Some(button) => button.get_bounding_client_rect(),
        None => {
            logging::warn!("shine button moved before its node ref mounted; using event target");
            ev.current_target()?
                .dyn_into::<web_sys::Element>()
                .ok()?
                .get_bounding_client_rect()
        }
    };
    Some(ElementOrigin {
        left: rect.left(),
        top: rect.top(),
    })
}
