//! Everything the page shows, and how each user action changes it.
//!
//! `PageState` is a Yew reducer. Side effects (alerts, reloads, network) stay
//! in `app.rs`; the reducer only ever receives text that already passed the
//! markup guard.

use std::rc::Rc;

use yew::Reducible;

use crate::api::{format_similarity, HumanizeReply};
use crate::config::PageConfig;
use crate::guard::{contains_markup, RejectPolicy};
use crate::text::{count_words, is_blank, limit_words};
use crate::theme::Theme;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to humanize";
pub const WORKING_MESSAGE: &str = "Humanizing... please wait 🧠✨";
pub const UNEXPECTED_MESSAGE: &str = "Unexpected response from server.";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "❌ Error humanizing text. Make sure the server is running.";

/// Shown while a request is in flight.
pub const SIMILARITY_RESET: &str = "0.00%";
/// Shown after any failed request.
pub const SIMILARITY_ZERO: &str = "Similarity: 0.00%";

/// Identifies one click of the humanize button.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum HumanizeOutcome {
    Reply(HumanizeReply),
    TransportFailed,
}

/// Result of reading the input box when the humanize button is pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum HumanizePlan {
    Empty,
    Send(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub config: PageConfig,
    pub theme: Theme,
    pub settings_open: bool,
    pub input: String,
    pub input_words: usize,
    pub output: String,
    pub output_words: usize,
    pub similarity: String,
    latest_ticket: Option<Ticket>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

/// One of the two editable text areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Input,
    Output,
}

impl Area {
    pub fn edited(self, text: String) -> PageAction {
        match self {
            Area::Input => PageAction::InputEdited(text),
            Area::Output => PageAction::OutputEdited(text),
        }
    }
}

/// What to do with the raw value of a text area after an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Markup found: nothing is stored. `restore` is the last accepted value.
    Rejected { policy: RejectPolicy, restore: String },
    /// Clean text, already cut to the word limit.
    Accepted(String),
}

pub enum PageAction {
    ToggleSettings,
    SetTheme(Theme),
    ConfigLoaded(PageConfig),
    InputEdited(String),
    OutputEdited(String),
    /// Humanize pressed with nothing to send.
    NothingToHumanize,
    HumanizeStarted { ticket: Ticket, text: String },
    HumanizeFinished { ticket: Ticket, outcome: HumanizeOutcome },
}

impl PageState {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            theme: Theme::default(),
            settings_open: false,
            input: String::new(),
            input_words: 0,
            output: String::new(),
            output_words: 0,
            similarity: SIMILARITY_RESET.to_string(),
            latest_ticket: None,
        }
    }

    pub fn word_limit(&self) -> usize {
        self.config.word_limit
    }

    /// Decides whether pressing humanize should send anything.
    pub fn plan_humanize(&self) -> HumanizePlan {
        let text = limit_words(&self.input, self.word_limit());
        if is_blank(&text) {
            HumanizePlan::Empty
        } else {
            HumanizePlan::Send(text)
        }
    }

    pub fn current(&self, area: Area) -> &str {
        match area {
            Area::Input => &self.input,
            Area::Output => &self.output,
        }
    }

    /// Screens a freshly typed value before it may reach the reducer.
    pub fn screen_edit(&self, area: Area, value: &str) -> Edit {
        if contains_markup(value) {
            return Edit::Rejected {
                policy: self.config.on_markup,
                restore: self.current(area).to_string(),
            };
        }
        Edit::Accepted(limit_words(value, self.word_limit()))
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest_ticket == Some(ticket)
    }

    fn finish(&mut self, outcome: HumanizeOutcome) {
        match outcome {
            HumanizeOutcome::Reply(HumanizeReply::Humanized { text, similarity }) => {
                self.output = limit_words(&text, self.word_limit());
                self.output_words = count_words(&self.output);
                self.similarity = format_similarity(similarity);
            }
            HumanizeOutcome::Reply(HumanizeReply::ServerError(msg)) => {
                self.output = format!("Error: {msg}");
                self.similarity = SIMILARITY_ZERO.to_string();
            }
            HumanizeOutcome::Reply(HumanizeReply::Unexpected) => {
                self.output = UNEXPECTED_MESSAGE.to_string();
                self.similarity = SIMILARITY_ZERO.to_string();
            }
            HumanizeOutcome::TransportFailed => {
                self.output = TRANSPORT_FAILURE_MESSAGE.to_string();
                self.similarity = SIMILARITY_ZERO.to_string();
            }
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let PageAction::HumanizeFinished { ticket, .. } = &action {
            if !self.is_latest(*ticket) {
                log::debug!("dropping stale humanize response #{ticket}");
                return self;
            }
        }

        let mut next = (*self).clone();
        match action {
            PageAction::ToggleSettings => next.settings_open = !next.settings_open,
            PageAction::SetTheme(theme) => next.theme = theme,
            PageAction::ConfigLoaded(config) => {
                next.config = config;
                next.input = limit_words(&next.input, next.word_limit());
                next.input_words = count_words(&next.input);
                next.output = limit_words(&next.output, next.word_limit());
                next.output_words = count_words(&next.output);
            }
            PageAction::InputEdited(text) => {
                next.input = limit_words(&text, next.word_limit());
                next.input_words = count_words(&next.input);
            }
            PageAction::OutputEdited(text) => {
                next.output = limit_words(&text, next.word_limit());
                next.output_words = count_words(&next.output);
            }
            PageAction::NothingToHumanize => next.output = EMPTY_INPUT_MESSAGE.to_string(),
            PageAction::HumanizeStarted { ticket, text } => {
                next.input_words = count_words(&text);
                next.input = text;
                next.output = WORKING_MESSAGE.to_string();
                next.similarity = SIMILARITY_RESET.to_string();
                next.latest_ticket = Some(ticket);
            }
            PageAction::HumanizeFinished { outcome, .. } => {
                next.latest_ticket = None;
                next.finish(outcome);
            }
        }
        Rc::new(next)
    }
}
