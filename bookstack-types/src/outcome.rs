//! Outcomes of the borrow and return state transitions.
//!
//! These are business-rule results, not errors: every variant is an
//! expected, recoverable answer that the frontend turns into a printed
//! message. The `Display` impls carry that message.

use std::fmt;

/// Result of a borrow attempt, checked in this priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// The member index did not resolve to a person.
    MemberNotFound,
    /// The member already holds this book.
    AlreadyBorrowed,
    /// The member is at the borrow cap.
    LimitReached,
    /// No copies are on the shelf.
    NoCopiesAvailable,
    /// The book was borrowed; one copy left the shelf.
    Borrowed,
}

impl BorrowOutcome {
    /// Returns true for the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Borrowed)
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MemberNotFound => "Member not found",
            Self::AlreadyBorrowed => "Book already borrowed",
            Self::LimitReached => "Member has borrowed 3 books already",
            Self::NoCopiesAvailable => "No copies of this book available",
            Self::Borrowed => "Book borrowed successfully",
        };
        f.write_str(msg)
    }
}

/// Result of a return attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The member index did not resolve to a person.
    MemberNotFound,
    /// The member does not hold this book.
    NotBorrowed,
    /// The book was returned; one copy came back to the shelf.
    Returned,
}

impl ReturnOutcome {
    /// Returns true for the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Returned)
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MemberNotFound => "Member not found",
            Self::NotBorrowed => "Book not borrowed by member",
            Self::Returned => "Book returned successfully",
        };
        f.write_str(msg)
    }
}
