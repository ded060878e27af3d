// Display text templates.

pub const APP_NAME: &str = "Timefighter";
pub const TAP_ME: &str = "Tap Me!";
pub const ABOUT_ITEM: &str = "About";
pub const ABOUT_MESSAGE: &str =
    "Tap the button as many times as you can before the time runs out. The clock starts on your first tap.";

pub fn your_score(score: u32) -> String {
    format!("Your Score: {}", score)
}

pub fn time_left(secs: u32) -> String {
    format!("Time Left: {}", secs)
}

pub fn game_over_message(score: u32) -> String {
    format!("Game over! Your score was {}.", score)
}

pub fn about_title() -> String {
    format!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"))
}
