use leptos::*;
use leptos_meta::*;
use shine_ui::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Variant and size of the featured button, chosen through the page query.
pub struct FeaturedSelection {
    pub variant: ShineVariant,
    pub size: ShineSize,
}

impl FeaturedSelection {
    /// Reads `variant` and `size` from a `?key=value&...` query string.
    ///
    /// Unknown keys are logged and leave the default in place.
    pub fn from_query(search: &str) -> Self {
        let mut selection = Self::default();
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='));
        for (key, value) in pairs {
            match key {
                "variant" => match value.parse() {
                    Ok(variant) => selection.variant = variant,
                    Err(err) => logging::warn!("featured button query ignored: {err}"),
                },
                "size" => match value.parse() {
                    Ok(size) => selection.size = size,
                    Err(err) => logging::warn!("featured button query ignored: {err}"),
                },
                _ => {}
            }
        }
        selection
    }
}

fn current_query() -> String {
    window().location().search().unwrap_or_default()
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let featured = FeaturedSelection::from_query(&current_query());
    let featured_overlay = ShineOverlay {
        radius_px: 160,
        color: "rgba(255,255,255,0.45)".to_string(),
        fade_percent: 60,
    };

    view! {
        <Title text="Shine UI" />
        <Meta name="description" content="Pointer-tracked shine buttons for Leptos." />

        <main class="min-h-screen bg-zinc-100 p-10 text-zinc-900">
            <header class="mb-10">
                <h1 class="text-3xl font-semibold">"Shine buttons"</h1>
                <p class="text-sm text-zinc-600">
                    "Move the pointer across any button to see the highlight follow it."
                </p>
            </header>

            <section class="mb-10 flex flex-col gap-4">
                <h2 class="text-xl font-medium">"Variants and sizes"</h2>
                <VariantGallery />
            </section>

            <section class="mb-10 flex flex-col gap-4">
                <h2 class="text-xl font-medium">"Featured"</h2>
                <p class="text-sm text-zinc-600">
                    {format!(
                        "Showing {} / {}. Try ?variant=destructive&size=lg.",
                        featured.variant.token(),
                        featured.size.token(),
                    )}
                </p>
                <ShineButton
                    variant=featured.variant
                    size=featured.size
                    class_name="w-64 rounded-full"
                    overlay=featured_overlay
                >
                    "Featured"
                </ShineButton>
            </section>

            <section class="flex flex-col gap-4">
                <h2 class="text-xl font-medium">"Interaction"</h2>
                <InteractionDemo />
            </section>
        </main>
    }
}

#[component]
fn VariantGallery() -> impl IntoView {
    ShineVariant::ALL
        .into_iter()
        .map(|variant| {
            view! {
                <div class="flex items-center gap-4" data-variant=variant.token()>
                    {ShineSize::ALL
                        .into_iter()
                        .map(|size| {
                            view! {
                                <ShineButton variant size>
                                    {format!("{} / {}", variant.token(), size.token())}
                                </ShineButton>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
        .collect_view()
}

#[component]
fn InteractionDemo() -> impl IntoView {
    let clicks = create_rw_signal(0u32);
    let locked = create_rw_signal(false);
    let measured = create_node_ref::<html::Button>();
    let measured_width = create_rw_signal(None::<f64>);

    create_effect(move |_| {
        if let Some(button) = measured.get() {
            measured_width.set(Some(button.get_bounding_client_rect().width()));
        }
    });

    view! {
        <div class="flex items-center gap-4">
            <ShineButton
                variant=ShineVariant::Primary
                disabled=locked
                on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
            >
                {move || format!("Clicked {} times", clicks.get())}
            </ShineButton>
            <ShineButton
                variant=ShineVariant::Outline
                size=ShineSize::Sm
                on_click=Callback::new(move |_| locked.update(|locked| *locked = !*locked))
            >
                {move || if locked.get() { "Unlock" } else { "Lock" }}
            </ShineButton>
        </div>
        <div class="flex items-center gap-4">
            <ShineButton node_ref=measured variant=ShineVariant::Secondary />
            <span class="text-sm text-zinc-600">
                {move || {
                    measured_width
                        .get()
                        .map(|width| format!("The default-label button is {width:.0}px wide."))
                        .unwrap_or_default()
                }}
            </span>
        </div>
    }
}
