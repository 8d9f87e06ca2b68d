use std::rc::Rc;

use super::amount::AmountValue;
use super::header::Header;

/// One indented line of a transaction, debiting or crediting a single
/// account.
///
/// `header` is a non-owning back-reference to the enclosing transaction's
/// header, attached purely for the convenience of later passes; it can
/// never form a cycle since `Header` holds nothing back.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub header: Rc<Header>,
    /// 1-based line number at which the posting starts.
    pub line: usize,
    pub account: Vec<String>,
    pub amount: AmountValue,
    pub comment: Option<String>,
}

impl Posting {
    pub fn new(
        header: Rc<Header>,
        line: usize,
        account: Vec<String>,
        amount: AmountValue,
        comment: Option<String>,
    ) -> Posting {
        Posting {
            header,
            line,
            account,
            amount,
            comment,
        }
    }

    /// The account rendered as a single `:`-joined path, e.g.
    /// `Assets:Savings:Bank`.
    pub fn account_path(&self) -> String {
        self.account.join(":")
    }
}
