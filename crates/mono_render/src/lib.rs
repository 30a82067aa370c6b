pub mod import;
pub mod raster;
pub mod wordle;

pub use import::{
    load_frames, EdgeMode, FitMode, ImageConverter, ImportError, ImportOptions, Placement,
    SourceFrame,
};
pub use raster::{
    bmp::{encode_1bit, encode_base64, BmpError, BmpInfo},
    canvas::Canvas,
    font::{draw_text, draw_text_centered, text_height, text_width},
    series::{CanvasFrame, FrameSeries, DEFAULT_FRAME_DELAY},
};
pub use wordle::{
    dictionary::{Dictionary, DictionaryError},
    scoring::{LetterResult, LetterState},
    session::{GameSession, GuessRejection, Phase},
    store::{SessionStore, UserKey},
    GameConfig, SharedEngine, Transcript, WordleEngine, WORD_LENGTH,
};
