//! View model derived from interaction state. Rendering reads only this.

use crate::controller::{events::FailureNotice, state::InteractionState};

pub const TITLE: &str = "Deteksi Sentimen Depresi";
pub const INPUT_PLACEHOLDER: &str = "Tuliskan apa yang Anda rasakan...";
pub const SUBMIT_LABEL: &str = "Analisis Teks";
pub const SUBMIT_BUSY_LABEL: &str = "Menganalisis...";
pub const RESET_LABEL: &str = "Bersihkan";
pub const VERDICT_CAPTION: &str = "Hasil Prediksi:";
pub const WARNING_ADVICE: &str = "Tulisan ini menunjukkan indikasi depresi. Pertimbangkan untuk \
     berbicara dengan orang terdekat atau tenaga profesional kesehatan mental.";
pub const STABLE_ADVICE: &str = "Tidak ditemukan indikasi depresi. Tetap jaga kesehatan mental \
     Anda dan jangan ragu mencari dukungan bila diperlukan.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictPanel<'a> {
    pub tone: Tone,
    pub caption: &'static str,
    pub headline: &'a str,
    pub advisory: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModel<'a> {
    pub input_text: &'a str,
    pub submit: SubmitControl,
    pub reset_enabled: bool,
    pub verdict: Option<VerdictPanel<'a>>,
    pub failure: Option<&'a FailureNotice>,
}

pub fn project(state: &InteractionState) -> ViewModel<'_> {
    let busy = state.is_submitting();
    let submit = SubmitControl {
        enabled: state.can_submit(),
        busy,
        label: if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL },
    };

    let verdict = state.result().map(|result| {
        let (tone, advisory) = if result.label().is_positive() {
            (Tone::Warning, WARNING_ADVICE)
        } else {
            (Tone::Stable, STABLE_ADVICE)
        };
        VerdictPanel {
            tone,
            caption: VERDICT_CAPTION,
            headline: result.status(),
            advisory,
        }
    });

    ViewModel {
        input_text: state.input_text(),
        submit,
        reset_enabled: !state.is_pristine(),
        verdict,
        failure: state.failure(),
    }
}
