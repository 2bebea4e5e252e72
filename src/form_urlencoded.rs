// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parser and serializer for the `application/x-www-form-urlencoded`
//! syntax, as used by HTML forms and URL query strings, plus the ordered
//! name/value-pair view kept in sync with a URL's query.
//!
//! <https://url.spec.whatwg.org/#application/x-www-form-urlencoded>

use std::borrow::Cow;
use std::fmt;

use crate::percent_encoding::{percent_decode, push_percent_encoded};
use crate::Url;

/// `+` means space, `%HH` is a byte; the decoded bytes are UTF-8 with
/// U+FFFD for ill-formed sequences.
fn decode_component(input: &str) -> String {
    let plus_replaced: Cow<'_, [u8]> = if input.as_bytes().contains(&b'+') {
        Cow::Owned(
            input
                .bytes()
                .map(|byte| if byte == b'+' { b' ' } else { byte })
                .collect(),
        )
    } else {
        Cow::Borrowed(input.as_bytes())
    };
    let decoded = percent_decode(&plus_replaced);
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Spaces serialize as `+`; bytes outside `[A-Za-z0-9*\-._]` as `%HH`.
fn append_form_encoded(output: &mut String, input: &str) {
    for &byte in input.as_bytes() {
        match byte {
            b' ' => output.push('+'),
            b'*' | b'-' | b'.' | b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' => {
                output.push(byte as char)
            }
            _ => push_percent_encoded(output, byte),
        }
    }
}

/// An ordered list of name/value pairs, parsed from and serialized to
/// the `application/x-www-form-urlencoded` syntax.
///
/// Standalone values work like the `URLSearchParams` class detached from
/// a URL; [`Url::search_params_mut`] yields the coupled variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    list: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with one leading `?` ignored.
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        let mut list = Vec::new();
        for piece in input.split('&') {
            if piece.is_empty() {
                continue;
            }
            let (name, value) = match piece.find('=') {
                Some(eq) => (&piece[..eq], &piece[eq + 1..]),
                None => (piece, ""),
            };
            list.push((decode_component(name), decode_component(value)));
        }
        SearchParams { list }
    }

    /// Append a name/value pair at the end of the list.
    pub fn append(&mut self, name: &str, value: &str) {
        self.list.push((name.to_owned(), value.to_owned()));
    }

    /// Remove every pair with the given name.
    pub fn delete(&mut self, name: &str) {
        self.list.retain(|(n, _)| n != name);
    }

    /// Remove every pair with the given name and value.
    pub fn delete_value(&mut self, name: &str, value: &str) {
        self.list.retain(|(n, v)| n != name || v != value);
    }

    /// The value of the first pair with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.list
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The values of every pair with the given name, in order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.list
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.list.iter().any(|(n, _)| n == name)
    }

    pub fn has_value(&self, name: &str, value: &str) -> bool {
        self.list.iter().any(|(n, v)| n == name && v == value)
    }

    /// Replace every pair with the given name by one pair with the new
    /// value, kept at the position of the first match; append when there
    /// is no match.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut matched = false;
        self.list.retain_mut(|(n, v)| {
            if n != name {
                return true;
            }
            if matched {
                return false;
            }
            matched = true;
            *v = value.to_owned();
            true
        });
        if !matched {
            self.append(name, value);
        }
    }

    /// Stable-sort the pairs by name, comparing names as sequences of
    /// UTF-16 code units. Pairs with equal names keep their order.
    ///
    /// <https://url.spec.whatwg.org/#dom-urlsearchparams-sort>
    pub fn sort(&mut self) {
        self.list
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// The pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.list.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub(crate) fn append_serialization(&self, output: &mut String) {
        for (i, (name, value)) in self.list.iter().enumerate() {
            if i > 0 {
                output.push('&');
            }
            append_form_encoded(output, name);
            output.push('=');
            append_form_encoded(output, value);
        }
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.append_serialization(&mut out);
        f.write_str(&out)
    }
}

impl std::iter::FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        SearchParams {
            list: iter.into_iter().collect(),
        }
    }
}

/// The query-parameter view of one URL. Every mutation re-serializes the
/// list into the URL's query component; the exclusive borrow of the URL
/// guarantees the query cannot change underneath the view, so the two
/// stay synchronized for the view's whole lifetime.
pub struct SearchParamsMut<'a> {
    url: &'a mut Url,
    params: SearchParams,
}

impl<'a> SearchParamsMut<'a> {
    pub(crate) fn new(url: &'a mut Url) -> Self {
        let params = SearchParams::parse(url.query().unwrap_or(""));
        SearchParamsMut { url, params }
    }

    pub fn append(&mut self, name: &str, value: &str) -> &mut Self {
        self.params.append(name, value);
        self.write();
        self
    }

    pub fn delete(&mut self, name: &str) -> &mut Self {
        self.params.delete(name);
        self.write();
        self
    }

    pub fn delete_value(&mut self, name: &str, value: &str) -> &mut Self {
        self.params.delete_value(name, value);
        self.write();
        self
    }

    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        self.params.set(name, value);
        self.write();
        self
    }

    pub fn sort(&mut self) -> &mut Self {
        self.params.sort();
        self.write();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.params.clear();
        self.write();
        self
    }

    /// Detach the pair list from the URL; further changes to it no
    /// longer affect the query.
    pub fn into_detached(self) -> SearchParams {
        self.params
    }

    /// An empty list serializes to a null query, not an empty one.
    fn write(&mut self) {
        if self.params.is_empty() {
            self.url.set_query_encoded(None);
        } else {
            let mut query = String::new();
            self.params.append_serialization(&mut query);
            self.url.set_query_encoded(Some(&query));
        }
    }
}

impl std::ops::Deref for SearchParamsMut<'_> {
    type Target = SearchParams;
    fn deref(&self) -> &SearchParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &SearchParams) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(n, v)| (n.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn parse_splits_and_decodes() {
        let params = SearchParams::parse("?a=1&&b=2+3&c&=d&%61=%C3%A9");
        assert_eq!(
            pairs(&params),
            vec![
                ("a".to_owned(), "1".to_owned()),
                ("b".to_owned(), "2 3".to_owned()),
                ("c".to_owned(), String::new()),
                (String::new(), "d".to_owned()),
                ("a".to_owned(), "é".to_owned()),
            ]
        );
    }

    #[test]
    fn parse_only_first_equals_splits() {
        let params = SearchParams::parse("a=b=c");
        assert_eq!(params.get("a"), Some("b=c"));
    }

    #[test]
    fn parse_replaces_ill_formed_utf8() {
        let params = SearchParams::parse("a=%FF");
        assert_eq!(params.get("a"), Some("\u{fffd}"));
    }

    #[test]
    fn serialize_uses_form_set() {
        let mut params = SearchParams::new();
        params.append("a b", "c/d");
        params.append("é", "*-._");
        assert_eq!(params.to_string(), "a+b=c%2Fd&%C3%A9=*-._");
    }

    #[test]
    fn get_set_delete() {
        let mut params = SearchParams::parse("a=1&b=2&a=3");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get_all("a"), vec!["1", "3"]);
        assert!(params.has("b"));
        assert!(params.has_value("a", "3"));
        assert!(!params.has_value("a", "2"));

        params.set("a", "9");
        assert_eq!(params.to_string(), "a=9&b=2");

        params.set("c", "1");
        assert_eq!(params.to_string(), "a=9&b=2&c=1");

        params.delete("a");
        assert_eq!(params.to_string(), "b=2&c=1");

        params.append("b", "5");
        params.delete_value("b", "2");
        assert_eq!(params.to_string(), "c=1&b=5");
    }

    #[test]
    fn sort_is_stable_and_compares_utf16_code_units() {
        let mut params = SearchParams::parse("b=1&a=first&c=2&a=second");
        params.sort();
        assert_eq!(params.to_string(), "a=first&a=second&b=1&c=2");

        // U+10000 is a surrogate pair (0xD800 0xDC00) in UTF-16 and
        // sorts before U+FFFF, unlike in code-point order.
        let mut params = SearchParams::new();
        params.append("\u{ffff}", "bmp");
        params.append("\u{10000}", "astral");
        params.sort();
        assert_eq!(
            pairs(&params),
            vec![
                ("\u{10000}".to_owned(), "astral".to_owned()),
                ("\u{ffff}".to_owned(), "bmp".to_owned()),
            ]
        );
    }
}
