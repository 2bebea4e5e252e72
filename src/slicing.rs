// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use crate::record::Part;
use crate::Url;

impl Index<RangeFull> for Url {
    type Output = str;
    fn index(&self, _: RangeFull) -> &str {
        &self.serialization
    }
}

impl Index<RangeFrom<Position>> for Url {
    type Output = str;
    fn index(&self, range: RangeFrom<Position>) -> &str {
        &self.serialization[self.index(range.start)..]
    }
}

impl Index<RangeTo<Position>> for Url {
    type Output = str;
    fn index(&self, range: RangeTo<Position>) -> &str {
        &self.serialization[..self.index(range.end)]
    }
}

impl Index<Range<Position>> for Url {
    type Output = str;
    fn index(&self, range: Range<Position>) -> &str {
        &self.serialization[self.index(range.start)..self.index(range.end)]
    }
}

/// Indicates a position within a URL based on its components.
///
/// A range of positions can be used for slicing `Url`:
///
/// ```rust
/// use whatwg_url::{Position, Url};
/// # fn main() -> Result<(), whatwg_url::ParseError> {
/// let url = Url::parse("https://u@example.com:8080/api/v1?q=1#top")?;
/// assert_eq!(&url[Position::BeforeHost..Position::AfterPort], "example.com:8080");
/// assert_eq!(&url[..Position::AfterPath], "https://u@example.com:8080/api/v1");
/// assert_eq!(&url[Position::BeforeQuery..], "q=1#top");
/// # Ok(())
/// # }
/// ```
///
/// The positions of the separator characters (`:`, `@`, `?`, `#`) fall
/// between the `After*` position of one component and the `Before*`
/// position of the next; a missing component has equal `Before*` and
/// `After*` positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    BeforeScheme,
    AfterScheme,
    BeforeUsername,
    AfterUsername,
    BeforePassword,
    AfterPassword,
    BeforeHost,
    AfterHost,
    BeforePort,
    AfterPort,
    BeforePath,
    AfterPath,
    BeforeQuery,
    AfterQuery,
    BeforeFragment,
    AfterFragment,
}

impl Url {
    #[inline]
    fn end(&self, part: Part) -> usize {
        self.part_end[part.i()] as usize
    }

    fn index(&self, position: Position) -> usize {
        match position {
            Position::BeforeScheme => 0,
            Position::AfterScheme => self.end(Part::Scheme),
            Position::BeforeUsername => self.end(Part::SchemeSep),
            Position::AfterUsername => self.end(Part::Username),
            Position::BeforePassword => {
                if self.is_empty_part(Part::Password) {
                    self.end(Part::Username)
                } else {
                    self.end(Part::Username) + 1 // skip ':'
                }
            }
            Position::AfterPassword => self.end(Part::Password).max(self.end(Part::Username)),
            Position::BeforeHost => self.end(Part::HostStart),
            Position::AfterHost => self.end(Part::Host),
            Position::BeforePort => {
                if self.is_null_part(Part::Port) || self.is_empty_part(Part::Port) {
                    self.end(Part::Host)
                } else {
                    self.end(Part::Host) + 1 // skip ':'
                }
            }
            Position::AfterPort => self.end(Part::Port).max(self.end(Part::Host)),
            Position::BeforePath => self.end(Part::PathPrefix).max(self.end(Part::Port)),
            Position::AfterPath => self.end(Part::Path),
            Position::BeforeQuery => {
                if self.is_null_part(Part::Query) || self.end(Part::Query) == 0 {
                    self.end(Part::Path)
                } else {
                    self.end(Part::Path) + 1 // skip '?'
                }
            }
            Position::AfterQuery => self.end(Part::Query).max(self.end(Part::Path)),
            Position::BeforeFragment => {
                if self.is_null_part(Part::Fragment) || self.end(Part::Fragment) == 0 {
                    self.index(Position::AfterQuery)
                } else {
                    self.index(Position::AfterQuery) + 1 // skip '#'
                }
            }
            Position::AfterFragment => self.serialization.len(),
        }
    }
}
