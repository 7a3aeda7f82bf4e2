//! Group markers
//!
//! Users fold sets of rules together with specially formatted single-line comments:
//!
//!     // $<Expressions
//!     expr : ... ;
//!     term : ... ;
//!     // $>
//!
//! Each marker becomes a [Group] anchored to the last rule completed before it. The exact
//! prefixes are configurable, see [GroupMarkers](crate::outline::parsing::GroupMarkers).

use crate::outline::token::{Token, TokenIndex};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Open,
    Close,
}

/// A begin or end fold marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    kind: GroupKind,
    name: Option<&'a str>,
    anchor: Option<usize>,
    token: TokenIndex,
    comment: &'a Token<'a>,
}

impl<'a> Group<'a> {
    pub(crate) fn open(
        name: &'a str,
        anchor: Option<usize>,
        token: TokenIndex,
        comment: &'a Token<'a>,
    ) -> Self {
        Self {
            kind: GroupKind::Open,
            name: Some(name),
            anchor,
            token,
            comment,
        }
    }

    pub(crate) fn close(anchor: Option<usize>, token: TokenIndex, comment: &'a Token<'a>) -> Self {
        Self {
            kind: GroupKind::Close,
            name: None,
            anchor,
            token,
            comment,
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.kind == GroupKind::Open
    }

    /// Group name; only open markers have one
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Index into the rule list of the last rule completed before this marker.
    /// `None` when the marker precedes every rule.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn token_index(&self) -> TokenIndex {
        self.token
    }

    /// The marker comment
    pub fn token(&self) -> &'a Token<'a> {
        self.comment
    }

    pub fn line(&self) -> usize {
        self.comment.line
    }
}

impl fmt::Display for Group<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group {}, open = {}, rule = ",
            self.name.unwrap_or("-"),
            self.is_open()
        )?;
        match self.anchor {
            Some(index) => write!(f, "{}", index),
            None => write!(f, "none"),
        }
    }
}
