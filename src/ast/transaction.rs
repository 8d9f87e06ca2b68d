use std::rc::Rc;

use super::header::Header;
use super::posting::Posting;

/// A header plus its (non-empty, by construction of the grammar) list of
/// postings — the unit of double-entry bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub header: Rc<Header>,
    pub postings: Vec<Posting>,
}

impl Transaction {
    pub fn new(header: Rc<Header>, postings: Vec<Posting>) -> Transaction {
        Transaction { header, postings }
    }
}
