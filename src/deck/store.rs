/*!
 * Deck container persistence.
 *
 * The deck container is a JSON tree; opening and saving go through serde so
 * unknown shapes and formatting attributes survive a round-trip untouched.
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;

use crate::errors::DeckError;

use super::model::Deck;

/// Opens and saves deck containers
pub struct DeckStore;

impl DeckStore {
    /// Open a deck file and parse it into the in-memory tree
    pub fn open(path: &Path) -> Result<Deck, DeckError> {
        let file = File::open(path)
            .map_err(|e| DeckError::Open(format!("{}: {}", path.display(), e)))?;
        let deck: Deck = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DeckError::Parse(format!("{}: {}", path.display(), e)))?;
        info!("opened deck {} with {} slide(s)", path.display(), deck.slides.len());
        Ok(deck)
    }

    /// Persist a deck to the given path
    pub fn save(deck: &Deck, path: &Path) -> Result<(), DeckError> {
        let file = File::create(path)
            .map_err(|e| DeckError::Save(format!("{}: {}", path.display(), e)))?;
        serde_json::to_writer_pretty(BufWriter::new(file), deck)
            .map_err(|e| DeckError::Save(format!("{}: {}", path.display(), e)))?;
        info!("saved deck to {}", path.display());
        Ok(())
    }
}
