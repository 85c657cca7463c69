//! Built-in game script

use super::model::{Question, Topic};
use super::text::Card;

fn question(prompt: (&str, &str), answer: (&str, &str)) -> Question {
    Question::new(Card::new(prompt.0, prompt.1), Card::new(answer.0, answer.1))
}

/// Three topics of three questions each, easiest first
pub fn default_topics() -> [Topic; 3] {
    [
        Topic::new(
            "Space",
            [
                question(("Closest planet", "to the Sun?"), ("Mercury", "")),
                question(("Planet with the", "Great Red Spot?"), ("Jupiter", "")),
                question(("Year of first", "Moon landing?"), ("1969", "Apollo 11")),
            ],
        ),
        Topic::new(
            "Animals",
            [
                question(("Fastest land", "animal?"), ("Cheetah", "")),
                question(("How many hearts", "has an octopus?"), ("Three", "")),
                question(("Largest living", "bird?"), ("Ostrich", "")),
            ],
        ),
        Topic::new(
            "Kitchen",
            [
                question(("Main ingredient", "of guacamole?"), ("Avocado", "")),
                question(("Spice from a", "crocus flower?"), ("Saffron", "")),
                question(("Pasta shaped", "like bow ties?"), ("Farfalle", "")),
            ],
        ),
    ]
}
