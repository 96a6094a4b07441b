mod hint_timer;

pub use hint_timer::HintTimer;
