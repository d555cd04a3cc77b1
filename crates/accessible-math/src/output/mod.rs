//! Output renderers - turn a semantic tree into speech, Braille or text.

pub mod braille;
pub mod plain;
pub mod speech;

pub use braille::{
    BraillePass, BrailleRule, NEMETH_RENDERER, NemethRenderer, UEB_RENDERER, UebRenderer,
    renderer_for_notation, to_braille,
};
pub use plain::{PLAIN_TEXT_RENDERER, PlainTextRenderer};
pub use speech::{Phrase, SPEECH_RENDERER, SpeechPass, SpeechRenderer, SpeechRule};
