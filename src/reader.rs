use crate::action::Action;
use crate::error::{ListError, Result};
use std::io::Read;

/// Reads user actions from a CSV script.
///
/// Wraps `csv::Reader` and yields an iterator of `Result<Action>`, trimming
/// whitespace and tolerating short records so hand-written scripts stay
/// forgiving. A malformed row surfaces as an error for that row only; the
/// iterator keeps going.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes actions.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ListError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, id, name, price\nadd, , Watch, 500\nedit, 0, , ";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.action, ActionKind::Add);
        assert_eq!(first.price.as_deref(), Some("500"));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.action, ActionKind::Edit);
        assert_eq!(second.id, Some(0));
    }

    #[test]
    fn test_reader_malformed_line_keeps_going() {
        let data = "action, id, name, price\nshoplift, , , \nadd, , Watch, 500";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_non_numeric_id_is_an_error() {
        let data = "action, id, name, price\nedit, first, , ";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert!(results[0].is_err());
    }
}
