//! Maps heuristic signals into the canonical vocabulary.

use tracing::debug;

use crate::types::record::{Record, TYPE_KEY};
use crate::types::signal::Signal;

/// Build a canonical record from signals, in the order given.
///
/// No de-duplication happens here; that is the merge engine's job.
pub fn map_signals(signals: &[Signal]) -> Record {
    let mut record = Record::canonical();

    for signal in signals {
        match signal {
            Signal::Address(email) => record.push("email", email.as_str()),
            Signal::Place(name) => record.push("place", place(name)),
            Signal::Phone(number) => record.push("telephone", number.as_str()),
            Signal::Link(url) => record.push("sameAs", url.as_str()),
            Signal::Unknown { tag, .. } => {
                debug!(tag = %tag, "Skipping signal of unknown kind");
            }
        }
    }

    record
}

fn place(name: &str) -> Record {
    Record::new().with(TYPE_KEY, "Place").with("name", name)
}
