use crate::components::ui::{LoadingIndicator, SpinnerSize, StyledInput};
use crate::config::ShowcaseConfig;
use leptos::prelude::*;
use leptos_ui::clx;
use strum::IntoEnumIterator;

mod layout {
    use super::*;
    clx! {Page, main, "mx-auto flex max-w-xl flex-col gap-8 px-4 py-10"}
    clx! {Section, section, "flex flex-col gap-3 rounded-xl border p-6 shadow-sm"}
    clx! {SectionTitle, h2, "text-sm font-semibold leading-none"}
    clx! {Caption, p, "text-xs text-muted-foreground"}
    clx! {Row, div, "flex items-center gap-4"}
}

use layout::*;

#[derive(Clone)]
pub(crate) struct ShowcaseContext(pub ShowcaseConfig);

#[component]
pub fn App() -> impl IntoView {
    provide_context(ShowcaseContext(ShowcaseConfig::from_window()));

    view! {
        <Page>
            <InputDemo />
            <SpinnerDemo />
        </Page>
    }
}

#[component]
fn InputDemo() -> impl IntoView {
    let config = expect_context::<ShowcaseContext>().0;
    let text: RwSignal<String> = RwSignal::new(String::new());
    let keystrokes: RwSignal<usize> = RwSignal::new(0);

    view! {
        <Section>
            <SectionTitle>"StyledInput"</SectionTitle>
            <StyledInput
                id="showcase-input"
                name="showcase"
                placeholder=config.placeholder
                aria_label="Showcase input"
                bind_value=text
                on_input=move |_: String| keystrokes.update(|n| *n += 1)
            />
            <StyledInput placeholder="Disabled" disabled=true class="bg-muted" />
            <Caption>
                {move || format!("Value: {:?} ({} input events)", text.get(), keystrokes.get())}
            </Caption>
        </Section>
    }
}

#[component]
fn SpinnerDemo() -> impl IntoView {
    let spinner_size = expect_context::<ShowcaseContext>().0.spinner_size;
    let loading: RwSignal<bool> = RwSignal::new(true);

    view! {
        <Section>
            <SectionTitle>"LoadingIndicator"</SectionTitle>
            <Row>
                <button
                    class="rounded-md border px-3 py-1 text-sm hover:bg-muted"
                    on:click=move |_| loading.update(|on| *on = !*on)
                >
                    {move || if loading.get() { "Stop" } else { "Start" }}
                </button>
                <Show when=move || loading.get()>
                    <LoadingIndicator size=spinner_size />
                </Show>
            </Row>
            <Row>
                {SpinnerSize::iter()
                    .map(|size| {
                        view! {
                            <div class="flex flex-col items-center gap-1">
                                <LoadingIndicator size=size />
                                <Caption>{size.to_string()}</Caption>
                            </div>
                        }
                    })
                    .collect_view()}
            </Row>
        </Section>
    }
}
