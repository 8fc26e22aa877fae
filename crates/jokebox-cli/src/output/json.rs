//! JSON output formatting.

use serde::Serialize;

use jokebox_core::Joke;

/// A joke merged with the user's stored rating.
pub fn joke_json(joke: &Joke, rating: i32) -> serde_json::Value {
    serde_json::json!({
        "id": joke.id,
        "value": joke.value,
        "url": joke.url,
        "icon_url": joke.icon_url,
        "categories": joke.category_labels(),
        "rating": rating,
    })
}

pub fn jokes_json<'a, I>(jokes: I) -> Vec<serde_json::Value>
where
    I: IntoIterator<Item = (&'a Joke, i32)>,
{
    jokes
        .into_iter()
        .map(|(joke, rating)| joke_json(joke, rating))
        .collect()
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
