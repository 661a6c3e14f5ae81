use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;
use tracing::info;

const SEED: &[(u64, &str, &str, i64, &str)] = &[
    (1, "Madonna in a Fur Coat", "Sabahattin Ali", 1943, "Novel"),
    (2, "Notes from Underground", "Fyodor Dostoevsky", 1864, "Novel"),
    (3, "Crime and Punishment", "Fyodor Dostoevsky", 1866, "Novel"),
    (4, "White Nights", "Fyodor Dostoevsky", 1848, "Novel"),
    (5, "Letters to Milena", "Franz Kafka", 1952, "Novel"),
    (6, "The Metamorphosis", "Franz Kafka", 1915, "Novel"),
    (7, "The First Man", "Albert Camus", 1994, "Novel"),
    (8, "The Stranger", "Albert Camus", 1942, "Novel"),
    (9, "The Idiot", "Fyodor Dostoevsky", 1869, "Novel"),
    (10, "No Longer Human", "Osamu Dazai", 1948, "Novel"),
    (11, "Kokoro", "Natsume Sōseki", 1914, "Novel"),
    (12, "I Am a Cat", "Natsume Sōseki", 1906, "Novel"),
    (13, "Pachinko", "Min Jin Lee", 2017, "Novel"),
    (14, "I Have the Right to Destroy Myself", "Kim Young-ha", 1996, "Novel"),
    (15, "Ali and Nino", "Kurban Said", 1937, "Novel"),
    (16, "The Devil", "Huseyn Javid", 1924, "Novel"),
    (17, "The Bell Jar", "Sylvia Plath", 1963, "Novel"),
    (18, "Orlando: A Biography", "Virginia Woolf", 1928, "Novel"),
    (19, "On Truth and Lies in a Nonmoral Sense", "Friedrich Nietzsche", 1896, "Philosophy"),
    (
        20,
        "Beyond Good and Evil: Prelude to a Philosophy of the Future",
        "Friedrich Nietzsche",
        1886,
        "Philosophy",
    ),
    (21, "A Room of One's Own", "Virginia Woolf", 1929, "Philosophy"),
    (22, "Milk and honey", "Rupi Kaur", 2014, "Poetry"),
    (23, "Tulips", "Sylvia Plath", 1965, "Poetry"),
];

/// The starter catalog written on first run.
pub fn seed_books() -> Vec<Book> {
    SEED.iter()
        .map(|&(id, name, author, date, category)| Book {
            id,
            name: name.to_string(),
            author: author.to_string(),
            date,
            category: category.to_string(),
        })
        .collect()
}

/// Writes the starter catalog if no catalog exists yet. An existing catalog,
/// even an empty or corrupt one, is left alone.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_initialized() {
        result.add_message(CmdMessage::info(format!(
            "Catalog already exists at {}, not seeding",
            store.location().display()
        )));
        return Ok(result);
    }

    let books = seed_books();
    store.save_books(&books)?;
    info!(count = books.len(), path = %store.location().display(), "seeded catalog");

    result.add_message(CmdMessage::success(format!(
        "Seeded catalog with {} books",
        books.len()
    )));
    Ok(result.with_affected_books(books))
}
