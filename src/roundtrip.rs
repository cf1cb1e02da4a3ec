use tracing::{error, info};

use crate::translate::TranslateInterface;

const SOURCE_LANG: &str = "en";
const TARGET_LANG: &str = "de";

pub const EMPTY_INPUT_NOTICE: &str = "Please enter a sentence in English.";
pub const GENERIC_ERROR_NOTICE: &str = "An error occurred during translation.";

/// Named output locations on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    OriginalEnglish,
    German,
    FinalEnglish,
}

/// How one run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    /// Input was empty after trimming; no network call was made.
    RejectedEmptyInput,
    /// One of the two hops failed.
    TranslationFailed,
}

/// Where the orchestrator writes its results.
///
/// Keeps the two-hop workflow independent of any delivery surface: the HTTP
/// handler supplies a collecting session, tests supply a recording view.
pub trait TranslationView {
    fn set_output(&mut self, slot: Slot, text: &str);
    fn notify_error(&mut self, message: &str);
}

/// Transient results of one run. Created fresh per trigger, discarded after
/// the response is written; never persisted across runs.
#[derive(Debug, Default)]
pub struct RoundTripSession {
    pub original: Option<String>,
    pub german: Option<String>,
    pub final_english: Option<String>,
    pub error: Option<String>,
}

impl TranslationView for RoundTripSession {
    fn set_output(&mut self, slot: Slot, text: &str) {
        let target = match slot {
            Slot::OriginalEnglish => &mut self.original,
            Slot::German => &mut self.german,
            Slot::FinalEnglish => &mut self.final_english,
        };
        *target = Some(text.to_string());
    }

    fn notify_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

/// Run the two-hop workflow: en -> de, then de -> en.
///
/// The reverse hop is only issued once the forward hop has produced its
/// German text; there is no parallelism between the two calls. Slots already
/// written stay written when a later hop fails - only the remaining steps
/// are abandoned.
pub async fn run_round_trip(
    input: &str,
    translator: &dyn TranslateInterface,
    view: &mut (dyn TranslationView + Send),
) -> RunOutcome {
    let english = input.trim();
    if english.is_empty() {
        view.notify_error(EMPTY_INPUT_NOTICE);
        return RunOutcome::RejectedEmptyInput;
    }

    // Echo the input before any network call so the user sees it
    // regardless of translation outcome.
    view.set_output(Slot::OriginalEnglish, english);

    let german = match translator
        .translate(english, SOURCE_LANG, TARGET_LANG)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            error!("Forward hop ({}->{}) failed: {}", SOURCE_LANG, TARGET_LANG, e);
            view.notify_error(GENERIC_ERROR_NOTICE);
            return RunOutcome::TranslationFailed;
        }
    };
    view.set_output(Slot::German, &german);

    match translator
        .translate(&german, TARGET_LANG, SOURCE_LANG)
        .await
    {
        Ok(text) => {
            view.set_output(Slot::FinalEnglish, &text);
            info!("Round trip completed: {} chars in, {} chars out", english.len(), text.len());
            RunOutcome::Succeeded
        }
        Err(e) => {
            error!("Reverse hop ({}->{}) failed: {}", TARGET_LANG, SOURCE_LANG, e);
            view.notify_error(GENERIC_ERROR_NOTICE);
            RunOutcome::TranslationFailed
        }
    }
}
