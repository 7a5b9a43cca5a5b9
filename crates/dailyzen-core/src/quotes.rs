//! Daily mindfulness quote rotation.
//!
//! The table rotates by day of year so everyone sees the same quote on a
//! given date and it changes once a day.

use chrono::{Datelike, Local, NaiveDate};

/// A quote with attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const QUOTES: [Quote; 10] = [
    Quote {
        text: "The present moment is the only moment available to us, and it is the door to all moments.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "Mindfulness isn't difficult. We just need to remember to do it.",
        author: "Sharon Salzberg",
    },
    Quote {
        text: "The best way to capture moments is to pay attention. This is how we cultivate mindfulness.",
        author: "Jon Kabat-Zinn",
    },
    Quote {
        text: "Drink your tea slowly and reverently, as if it is the axis on which the world earth revolves.",
        author: "Thich Nhat Hanh",
    },
    Quote {
        text: "Be where you are, otherwise you will miss your life.",
        author: "Buddha",
    },
    Quote {
        text: "The little things? The little moments? They aren't little.",
        author: "Jon Kabat-Zinn",
    },
    Quote {
        text: "Wherever you are, be there totally.",
        author: "Eckhart Tolle",
    },
    Quote {
        text: "You can't stop the waves, but you can learn to surf.",
        author: "Jon Kabat-Zinn",
    },
    Quote {
        text: "Every moment is a fresh beginning.",
        author: "T.S. Eliot",
    },
    Quote {
        text: "Peace comes from within. Do not seek it without.",
        author: "Buddha",
    },
];

/// The quote shown on a given date.
pub fn quote_for(date: NaiveDate) -> &'static Quote {
    &QUOTES[date.ordinal0() as usize % QUOTES.len()]
}

/// Today's quote.
pub fn quote_of_the_day() -> &'static Quote {
    quote_for(Local::now().date_naive())
}
