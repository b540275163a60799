use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::api;
use crate::config;
use crate::guard::{RejectPolicy, MARKUP_ALERT};
use crate::state::{Area, Edit, HumanizeOutcome, HumanizePlan, PageAction, PageState};
use crate::text::count_words;
use crate::theme::{self, Theme};

fn reload_page() {
    let Some(w) = web_sys::window() else {
        log::warn!("no window to reload");
        return;
    };
    if let Err(e) = w.location().reload() {
        log::warn!("page reload failed: {e:?}");
    }
}

fn reject_markup(policy: RejectPolicy, area: Area, el: &HtmlTextAreaElement, restore: &str) {
    log::warn!("markup rejected in {area:?} area ({policy:?})");
    alert(MARKUP_ALERT);
    match policy {
        RejectPolicy::Reload => reload_page(),
        RejectPolicy::Restore => el.set_value(restore),
    }
}

fn on_edit(state: &UseReducerHandle<PageState>, area: Area) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let el: HtmlTextAreaElement = e.target_unchecked_into();
        let value = el.value();
        match state.screen_edit(area, &value) {
            Edit::Rejected { policy, restore } => reject_markup(policy, area, &el, &restore),
            Edit::Accepted(text) => {
                if text != value {
                    el.set_value(&text);
                }
                state.dispatch(area.edited(text));
            }
        }
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PageState::default);
    let tickets = use_mut_ref(|| 0u64);

    // Load the optional page config once
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                state.dispatch(PageAction::ConfigLoaded(config::load_or_default().await));
            });
            || ()
        });
    }

    use_effect_with(state.theme, |theme| {
        if let Err(e) = theme::apply_to_body(*theme) {
            log::warn!("could not apply {} theme: {e:?}", theme.label());
        }
        || ()
    });

    let on_settings = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PageAction::ToggleSettings))
    };

    let on_theme = |t: Theme| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PageAction::SetTheme(t)))
    };

    let on_advanced = Callback::from(|_: MouseEvent| alert("Advanced features coming soon 👀"));
    let on_logout = Callback::from(|_: MouseEvent| alert("Logging out..."));

    let on_humanize = {
        let state = state.clone();
        let tickets = tickets.clone();
        Callback::from(move |_: MouseEvent| {
            let text = match state.plan_humanize() {
                HumanizePlan::Empty => {
                    state.dispatch(PageAction::NothingToHumanize);
                    return;
                }
                HumanizePlan::Send(text) => text,
            };

            let ticket = {
                let mut n = tickets.borrow_mut();
                *n += 1;
                *n
            };
            let endpoint = state.config.endpoint.clone();
            log::debug!(
                "humanize #{ticket}: sending {} words to {endpoint}",
                count_words(&text)
            );
            state.dispatch(PageAction::HumanizeStarted {
                ticket,
                text: text.clone(),
            });

            let state = state.clone();
            spawn_local(async move {
                let outcome = match api::humanize(&endpoint, &text).await {
                    Ok(reply) => HumanizeOutcome::Reply(reply),
                    Err(e) => {
                        log::error!("Humanize Error: {e}");
                        HumanizeOutcome::TransportFailed
                    }
                };
                state.dispatch(PageAction::HumanizeFinished { ticket, outcome });
            });
        })
    };

    let popup_style = if state.settings_open {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div class="wrap">
            <header class="topbar">
                <div class="brand">
                    <h1>{"Humanizer"}</h1>
                    <p>{"Paste AI-generated text, get something that reads like a person wrote it."}</p>
                </div>
                <div class="actions">
                    <button id="advancedBtn" onclick={on_advanced}>{"Advanced"}</button>
                    <button id="logoutBtn" onclick={on_logout}>{"Logout"}</button>
                    <button id="settingsBtn" onclick={on_settings}>{"⚙"}</button>
                </div>
            </header>

            <div id="settingsPopup" class="popup" style={popup_style}>
                <h3>{"Theme"}</h3>
                <button id="lightMode" class={Theme::Light.button_class(state.theme)} onclick={on_theme(Theme::Light)}>
                    { Theme::Light.label() }
                </button>
                <button id="darkMode" class={Theme::Dark.button_class(state.theme)} onclick={on_theme(Theme::Dark)}>
                    { Theme::Dark.label() }
                </button>
            </div>

            <div class="grid">
                <div class="card">
                    <div class="hd">
                        <h3>{"AI Text"}</h3>
                    </div>
                    <textarea
                        id="aiInput"
                        placeholder="Paste your text here..."
                        value={state.input.clone()}
                        oninput={on_edit(&state, Area::Input)}
                    />
                    <div class="counter">
                        {"Words: "}<span id="inputWordCount">{ state.input_words }</span>{ format!(" / {}", state.word_limit()) }
                    </div>
                </div>

                <div class="card">
                    <div class="hd">
                        <h3>{"Humanized Text"}</h3>
                        <span id="similarityScore" class="small" title="Similarity to the original">{ state.similarity.clone() }</span>
                    </div>
                    <textarea
                        id="humanizedOutput"
                        placeholder="Your humanized text will appear here..."
                        value={state.output.clone()}
                        oninput={on_edit(&state, Area::Output)}
                    />
                    <div class="counter">
                        {"Words: "}<span id="outputWordCount">{ state.output_words }</span>{ format!(" / {}", state.word_limit()) }
                    </div>
                </div>
            </div>

            <button class="primary humanize-btn" onclick={on_humanize}>{"Humanize"}</button>
        </div>
    }
}
