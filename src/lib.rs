// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!

whatwg-url is an implementation of the [URL Standard](https://url.spec.whatwg.org/)
for the [Rust](https://rust-lang.org/) programming language.

# URL parsing and data structures

First, URL parsing may fail for various reasons and therefore returns a `Result`.

```
use whatwg_url::{Url, ParseError};

assert!(Url::parse("http://[:::1]") == Err(ParseError::InvalidIpv6Address))
```

Let's parse a valid URL and look at its components.

```
use whatwg_url::{Url, ParseError};
# fn run() -> Result<(), ParseError> {
let issue_list_url = Url::parse(
    "https://github.com/rust-lang/rust/issues?labels=E-easy&state=open"
)?;

assert!(issue_list_url.scheme() == "https");
assert!(issue_list_url.username() == "");
assert!(issue_list_url.password() == None);
assert!(issue_list_url.host_str() == Some("github.com"));
assert!(issue_list_url.port() == None);
assert!(issue_list_url.path() == "/rust-lang/rust/issues");
assert!(issue_list_url.query() == Some("labels=E-easy&state=open"));
assert!(issue_list_url.fragment() == None);
assert!(!issue_list_url.cannot_be_a_base());
# Ok(())
# }
# run().unwrap();
```

A URL is stored as one canonical string: `as_str()` and the component
getters are all zero-copy views into it.

# Base URL

Some URL strings are only valid relative to a base:

```
use whatwg_url::{Url, ParseError};

assert!(Url::parse("../main.css").is_err());

# fn run() -> Result<(), ParseError> {
let this_document = Url::parse("http://servo.github.io/rust-url/url/index.html")?;
let css_url = this_document.join("../main.css")?;
assert_eq!(css_url.as_str(), "http://servo.github.io/rust-url/main.css");
# Ok(())
# }
# run().unwrap();
```

# Setters

Each attribute of the JavaScript `URL` class has a corresponding setter
that re-enters the URL parser at the matching state. Setters are atomic:
either the whole new value is adopted or the URL is left unchanged.

```
use whatwg_url::{Url, ParseError};
# fn run() -> Result<(), ParseError> {
let mut url = Url::parse("http://example.com/path")?;
url.set_port("8080")?;
url.set_hash("top")?;
assert_eq!(url.as_str(), "http://example.com:8080/path#top");
# Ok(())
# }
# run().unwrap();
```

*/

pub use crate::form_urlencoded::{SearchParams, SearchParamsMut};
pub use crate::host::{Host, HostType};
pub use crate::origin::{OpaqueOrigin, Origin};
pub use crate::parser::{ParseError, SyntaxViolation};
pub use crate::slicing::Position;

mod form_urlencoded;
mod host;
mod origin;
mod parser;
pub mod percent_encoding;
pub mod quirks;
mod record;
mod slicing;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::parser::{parse_url, report, ParseRun, SchemeInfo, State, ViolationFn};
use crate::percent_encoding::{append_percent_encoded, AsciiSet, PATH, USERINFO};
use crate::record::{Part, RecordBuilder, RecordEditor, UrlWriter, PART_COUNT};

/// A parsed URL record.
#[derive(Clone)]
pub struct Url {
    /// The canonical serialization; components are ranges over it.
    pub(crate) serialization: String,
    /// End offset of each part, in `Part` order. Zero means the part
    /// (and everything after it) was never written.
    pub(crate) part_end: [u32; PART_COUNT],
    /// Per-part non-null bits, the cannot-be-a-base flag and the host
    /// type tag.
    pub(crate) flags: u32,
    pub(crate) path_segment_count: u32,
    pub(crate) scheme_inf: Option<&'static SchemeInfo>,
}

/// Full configuration for parsing a URL: an optional base and an
/// optional callback for non-fatal syntax violations.
#[derive(Copy, Clone)]
pub struct ParseOptions<'a> {
    base_url: Option<&'a Url>,
    violation_fn: ViolationFn<'a>,
}

impl<'a> ParseOptions<'a> {
    /// Change the base URL.
    pub fn base_url(mut self, new: Option<&'a Url>) -> Self {
        self.base_url = new;
        self
    }

    /// Call the provided function on non-fatal parser violations, like
    /// ignored whitespace or a `\` used as a path separator.
    pub fn syntax_violation_callback(mut self, new: Option<&'a dyn Fn(SyntaxViolation)>) -> Self {
        self.violation_fn = new;
        self
    }

    /// Parse a URL string with the configuration so far.
    pub fn parse(self, input: &str) -> Result<Url, ParseError> {
        // Remove any leading and trailing C0 control or space.
        let trimmed = input.trim_matches(|c: char| c <= ' ');
        if trimmed.len() != input.len() {
            report(self.violation_fn, SyntaxViolation::C0SpaceIgnored);
        }
        let mut builder = RecordBuilder::new();
        parse_url(
            &mut builder,
            trimmed,
            self.base_url,
            None,
            self.violation_fn,
        )?;
        let url = builder.into_url();
        debug_assert_eq!(url.check_invariants(), Ok(()));
        Ok(url)
    }
}

impl Url {
    /// Parse an absolute URL from a string.
    #[inline]
    pub fn parse(input: &str) -> Result<Url, ParseError> {
        Url::options().parse(input)
    }

    /// Parse a string as a URL, with this URL as the base.
    ///
    /// Note: a trailing slash is significant. Without it, the last path
    /// component is considered to be a "file" name to be removed to get
    /// at the "directory" that is used as the base.
    #[inline]
    pub fn join(&self, input: &str) -> Result<Url, ParseError> {
        Url::options().base_url(Some(self)).parse(input)
    }

    /// Return a default `ParseOptions` that can fully configure the URL
    /// parser.
    pub fn options<'a>() -> ParseOptions<'a> {
        ParseOptions {
            base_url: None,
            violation_fn: None,
        }
    }

    /// Build a `file:` URL from an absolute file path: a POSIX path
    /// starting with `/`, or a Windows path with a drive letter, a UNC
    /// share, or a `\\?\` / `\\.\` DOS device prefix.
    ///
    /// Fails with [`ParseError::EmptyPath`] for an empty string and
    /// [`ParseError::UnsupportedPath`] for relative paths and
    /// unrecognized forms.
    pub fn from_file_path(path: &str) -> Result<Url, ParseError> {
        // The path percent-encode set with '%', so escapes in file
        // names stay literal...
        const RAW_PATH: &AsciiSet = &PATH.add(b'%');
        // ...and for POSIX paths also ':', '\' and '|', which would
        // otherwise read as a drive letter or a separator.
        const POSIX_PATH: &AsciiSet = &RAW_PATH.add(b':').add(b'\\').add(b'|');

        if path.is_empty() {
            return Err(ParseError::EmptyPath);
        }
        let mut url_str = String::with_capacity(path.len() + 8);
        url_str.push_str("file://");
        if path.starts_with('/') {
            append_percent_encoded(path, POSIX_PATH, &mut url_str);
        } else {
            let mut rest = path;
            let mut is_unc = false;
            if let Some(after) = rest.strip_prefix("\\\\") {
                rest = after;
                if let Some(after) = rest
                    .strip_prefix("?\\")
                    .or_else(|| rest.strip_prefix(".\\"))
                {
                    // DOS device path: either UNC or a drive path.
                    rest = after;
                    if let Some(after) = rest.strip_prefix("UNC\\") {
                        rest = after;
                        is_unc = true;
                    }
                } else {
                    is_unc = true;
                }
            }
            let supported = if is_unc {
                is_unc_path(rest)
            } else {
                starts_with_windows_drive_absolute(rest)
            };
            if !supported {
                return Err(ParseError::UnsupportedPath);
            }
            if !is_unc {
                url_str.push('/');
            }
            append_percent_encoded(rest, RAW_PATH, &mut url_str);
        }
        Url::parse(&url_str)
    }

    /// Return the serialization of this URL.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    /// The scheme, lower-cased, without the `:` delimiter.
    #[inline]
    pub fn scheme(&self) -> &str {
        self.part_view(Part::Scheme)
    }

    /// Whether the scheme is one of `ftp`, `file`, `http`, `https`,
    /// `ws`, `wss`.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.is_special_scheme()
    }

    /// The username, possibly empty.
    #[inline]
    pub fn username(&self) -> &str {
        self.part_view(Part::Username)
    }

    /// The password, if any is recorded.
    pub fn password(&self) -> Option<&str> {
        if self.is_empty_part(Part::Password) {
            None
        } else {
            Some(self.part_view(Part::Password))
        }
    }

    /// Whether the URL has a non-null host.
    #[inline]
    pub fn has_authority(&self) -> bool {
        !self.is_null_part(Part::Host)
    }

    /// The host as it appears in the serialization: `None` when the
    /// host is null, `Some("")` for the empty host of `file:` URLs.
    pub fn host_str(&self) -> Option<&str> {
        if self.is_null_part(Part::Host) {
            None
        } else {
            Some(self.part_view(Part::Host))
        }
    }

    /// The host, typed. `None` when the host is null or empty.
    pub fn host(&self) -> Option<Host<&str>> {
        match self.record_host_type()? {
            HostType::Empty => None,
            HostType::Opaque => Some(Host::Opaque(self.part_view(Part::Host))),
            HostType::Domain => Some(Host::Domain(self.part_view(Part::Host))),
            HostType::Ipv4 => {
                host::ipv4_from_canonical(self.part_view(Part::Host)).map(Host::Ipv4)
            }
            HostType::Ipv6 => {
                host::ipv6_from_canonical(self.part_view(Part::Host)).map(Host::Ipv6)
            }
        }
    }

    /// What kind of host the URL has, `None` when it has none.
    #[inline]
    pub fn host_type(&self) -> Option<HostType> {
        self.record_host_type()
    }

    /// The explicit port number. The scheme's default port is never
    /// stored, so this is `None` for `http://example.com:80/`.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port_number()
    }

    /// The explicit port number, or the scheme's default.
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.port_number()
            .or_else(|| self.scheme_inf.and_then(|inf| inf.default_port))
    }

    /// The path: `/`-separated segments, or the opaque string of a
    /// cannot-be-a-base URL. The `/.` serialization prefix, when one is
    /// needed, is not part of the path.
    #[inline]
    pub fn path(&self) -> &str {
        self.part_view(Part::Path)
    }

    /// The query string, if any, without the `?` delimiter.
    pub fn query(&self) -> Option<&str> {
        if self.is_null_part(Part::Query) {
            None
        } else {
            Some(self.part_view(Part::Query))
        }
    }

    /// The fragment, if any, without the `#` delimiter.
    pub fn fragment(&self) -> Option<&str> {
        if self.is_null_part(Part::Fragment) {
            None
        } else {
            Some(self.part_view(Part::Fragment))
        }
    }

    /// Whether the URL is of the no-authority, opaque-path form, like
    /// `data:text/plain,Stuff` or `mailto:person@example.com`.
    #[inline]
    pub fn cannot_be_a_base(&self) -> bool {
        self.cannot_be_a_base_flag()
    }

    /// The origin of this URL.
    pub fn origin(&self) -> Origin {
        origin::url_origin(self)
    }

    /// Equality with the fragments of both URLs ignored.
    pub fn eq_ignoring_fragment(&self, other: &Url) -> bool {
        self.serialization_excluding_fragment() == other.serialization_excluding_fragment()
    }

    /// A parsed, ordered snapshot of the query parameters. Changes to it
    /// do not affect the URL; use [`Url::search_params_mut`] for that.
    pub fn search_params(&self) -> SearchParams {
        SearchParams::parse(self.query().unwrap_or(""))
    }

    /// The query-parameter view of this URL: mutations write through to
    /// the query component.
    pub fn search_params_mut(&mut self) -> SearchParamsMut<'_> {
        SearchParamsMut::new(self)
    }

    /// Reparse `input` and replace this URL on success; the URL is
    /// unchanged on error.
    pub fn set_href(&mut self, input: &str) -> Result<(), ParseError> {
        *self = Url::parse(input)?;
        Ok(())
    }

    /// Change the scheme, re-entering the parser at the scheme start
    /// state.
    ///
    /// A change crossing the special/non-special boundary, giving a
    /// `file:` URL credentials or a port, or moving a host-less `file:`
    /// URL to a scheme that requires a host is refused as a no-op
    /// (`Ok`, URL unchanged), matching the JavaScript attribute model.
    pub fn set_scheme(&mut self, input: &str) -> Result<(), ParseError> {
        self.reenter(input, State::SchemeStart)
    }

    /// Percent-encode `input` with the userinfo set and make it the
    /// username. A no-op when the URL cannot have credentials (no host,
    /// cannot-be-a-base, or a `file:` URL).
    pub fn set_username(&mut self, input: &str) -> Result<(), ParseError> {
        if !self.can_have_credentials_or_port() {
            return Ok(());
        }
        self.edit(|editor| {
            append_percent_encoded(input, USERINFO, editor.start_part(Part::Username));
            editor.save_part();
        });
        Ok(())
    }

    /// Percent-encode `input` with the userinfo set and make it the
    /// password; an empty input removes the password. A no-op under the
    /// same conditions as [`Url::set_username`].
    pub fn set_password(&mut self, input: &str) -> Result<(), ParseError> {
        if !self.can_have_credentials_or_port() {
            return Ok(());
        }
        self.edit(|editor| {
            append_percent_encoded(input, USERINFO, editor.start_part(Part::Password));
            editor.save_part();
        });
        Ok(())
    }

    /// Change the host, accepting an optional trailing `:port`. A no-op
    /// for cannot-be-a-base URLs.
    pub fn set_host(&mut self, input: &str) -> Result<(), ParseError> {
        if self.cannot_be_a_base() {
            return Ok(());
        }
        self.reenter(input, State::Host)
    }

    /// Change the host; a port in the input is refused as a no-op. A
    /// no-op for cannot-be-a-base URLs.
    pub fn set_hostname(&mut self, input: &str) -> Result<(), ParseError> {
        if self.cannot_be_a_base() {
            return Ok(());
        }
        self.reenter(input, State::Hostname)
    }

    /// Change the port; an empty input removes it. The scheme's default
    /// port is stored as no port. A no-op when the URL cannot have a
    /// port.
    pub fn set_port(&mut self, input: &str) -> Result<(), ParseError> {
        if !self.can_have_credentials_or_port() {
            return Ok(());
        }
        if input.is_empty() {
            self.edit(|editor| editor.clear_part(Part::Port));
            return Ok(());
        }
        self.reenter(input, State::Port)
    }

    /// Change the path, re-entering the parser at the path start state.
    /// A no-op for cannot-be-a-base URLs.
    pub fn set_pathname(&mut self, input: &str) -> Result<(), ParseError> {
        if self.cannot_be_a_base() {
            return Ok(());
        }
        self.reenter(input, State::PathStart)
    }

    /// Change the query. An empty input makes the query null; otherwise
    /// one leading `?` is stripped and the rest is parsed in the query
    /// state.
    pub fn set_search(&mut self, input: &str) -> Result<(), ParseError> {
        if input.is_empty() {
            self.edit(|editor| editor.clear_part(Part::Query));
            return Ok(());
        }
        let input = input.strip_prefix('?').unwrap_or(input);
        self.reenter(input, State::Query)
    }

    /// Change the fragment. An empty input makes the fragment null;
    /// otherwise one leading `#` is stripped and the rest is parsed in
    /// the fragment state.
    pub fn set_hash(&mut self, input: &str) -> Result<(), ParseError> {
        if input.is_empty() {
            self.edit(|editor| editor.clear_part(Part::Fragment));
            return Ok(());
        }
        let input = input.strip_prefix('#').unwrap_or(input);
        self.reenter(input, State::Fragment)
    }

    /// Run a series of checks on the offset representation, for use by
    /// tests. A `Url` produced by parsing or by setters always passes.
    pub fn check_invariants(&self) -> Result<(), String> {
        macro_rules! ensure {
            ($cond: expr, $($arg: tt)+) => {
                if !$cond {
                    return Err(format!($($arg)+));
                }
            }
        }

        let len = self.serialization.len() as u32;
        let scheme = self.part_view(Part::Scheme);
        ensure!(!scheme.is_empty(), "empty scheme");
        ensure!(
            scheme.bytes().next().map_or(false, |b| b.is_ascii_lowercase()),
            "scheme {:?} does not start with a lower-case letter",
            scheme
        );
        ensure!(
            scheme
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')),
            "invalid scheme characters in {:?}",
            scheme
        );

        // Offsets are non-decreasing, within bounds, zero only at the
        // tail, and the last recorded offset is the total length.
        let mut prev = self.part_end[0];
        let mut tail = false;
        let mut last_set = self.part_end[0];
        for &end in &self.part_end[1..] {
            if end == 0 {
                tail = true;
                continue;
            }
            ensure!(!tail, "non-zero offset after a zero one: {:?}", self.part_end);
            ensure!(end >= prev, "decreasing offsets: {:?}", self.part_end);
            ensure!(end <= len, "offset beyond the serialization: {:?}", self.part_end);
            prev = end;
            last_set = end;
        }
        ensure!(
            last_set == len,
            "serialized length {} not covered by offsets {:?}",
            len,
            self.part_end
        );

        let sep = {
            let b = self.part_end[Part::Scheme.i()] as usize;
            let e = (self.part_end[Part::SchemeSep.i()] as usize).max(b);
            &self.serialization[b..e]
        };
        ensure!(sep == ":" || sep == "://", "bad scheme separator {:?}", sep);
        if self.part_end[Part::SchemeSep.i()] != 0 {
            ensure!(
                (sep == "://") == !self.is_null_part(Part::Host),
                "separator {:?} does not match host nullness",
                sep
            );
        }

        // Opaque paths keep literal spaces (they are only C0-encoded);
        // everywhere else nothing below U+0021 survives unescaped.
        let opaque_path = if self.cannot_be_a_base() {
            Some(self.part_pos(Part::Path) as usize..self.part_end[Part::Path.i()] as usize)
        } else {
            None
        };
        for (i, byte) in self.serialization.bytes().enumerate() {
            let in_opaque_path = opaque_path.as_ref().map_or(false, |r| r.contains(&i));
            ensure!(
                byte >= 0x21 || (byte == 0x20 && in_opaque_path),
                "unescaped control or space at byte {} of {:?}",
                i,
                self.serialization
            );
        }

        let host_start = self.part_view(Part::HostStart);
        ensure!(
            host_start.is_empty() || host_start == "@",
            "bad userinfo terminator {:?}",
            host_start
        );
        if !self.is_null_part(Part::Host) {
            ensure!(
                (host_start == "@") == self.has_credentials(),
                "userinfo terminator does not match credentials"
            );
        }
        if !self.is_empty_part(Part::Password) {
            let b = self.part_pos(Part::Password) as usize;
            ensure!(
                self.serialization.as_bytes()[b] == b':',
                "password without its ':'"
            );
        }

        if let Some(port) = self.port_number() {
            let digits = self.part_view(Part::Port);
            ensure!(
                !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
                "non-digit port {:?}",
                digits
            );
            ensure!(
                digits == port.to_string(),
                "port {:?} is not canonical",
                digits
            );
            ensure!(
                self.scheme_inf.and_then(|inf| inf.default_port) != Some(port),
                "default port {} was stored",
                port
            );
        }

        if self.is_special_scheme() && !self.is_file_scheme() {
            ensure!(
                matches!(
                    self.record_host_type(),
                    Some(HostType::Domain) | Some(HostType::Ipv4) | Some(HostType::Ipv6)
                ) && !self.is_empty_part(Part::Host),
                "special URL without a host"
            );
        }
        if self.cannot_be_a_base() {
            ensure!(!self.is_special_scheme(), "special cannot-be-a-base URL");
            ensure!(self.is_null_part(Part::Host), "cannot-be-a-base URL with a host");
            ensure!(self.is_null_part(Part::Port), "cannot-be-a-base URL with a port");
            ensure!(
                self.path_segment_count == 1,
                "cannot-be-a-base URL without a single opaque path"
            );
        }
        match self.record_host_type() {
            Some(HostType::Empty) => {
                ensure!(self.is_empty_part(Part::Host), "non-empty host tagged empty")
            }
            Some(_) => ensure!(
                !self.is_empty_part(Part::Host) && !self.cannot_be_a_base(),
                "host type does not match content"
            ),
            None => {}
        }

        let prefix = self.part_view(Part::PathPrefix);
        ensure!(prefix.is_empty() || prefix == "/.", "bad path prefix {:?}", prefix);
        let needs_prefix = self.is_null_part(Part::Host)
            && self.path_segment_count > 1
            && self.path().starts_with("//");
        ensure!(
            (prefix == "/.") == needs_prefix,
            "path prefix {:?} does not match {:?}",
            prefix,
            self.path()
        );

        if !self.is_null_part(Part::Query) && self.part_end[Part::Query.i()] != 0 {
            let b = self.part_pos(Part::Query) as usize;
            ensure!(
                self.serialization.as_bytes().get(b) == Some(&b'?'),
                "query without its '?'"
            );
        }
        if !self.is_null_part(Part::Fragment) && self.part_end[Part::Fragment.i()] != 0 {
            let b = self.part_pos(Part::Fragment) as usize;
            ensure!(
                self.serialization.as_bytes().get(b) == Some(&b'#'),
                "fragment without its '#'"
            );
        }

        let expected_inf = parser::get_scheme_info(scheme);
        ensure!(
            match (expected_inf, self.scheme_inf) {
                (None, None) => true,
                (Some(a), Some(b)) => std::ptr::eq(a, b),
                _ => false,
            },
            "stale scheme info for {:?}",
            scheme
        );

        Ok(())
    }

    // Internal plumbing.

    pub(crate) fn empty_record() -> Url {
        Url {
            serialization: String::new(),
            part_end: [0; PART_COUNT],
            flags: record::INITIAL_FLAGS,
            path_segment_count: 0,
            scheme_inf: None,
        }
    }

    #[inline]
    pub(crate) fn scheme_info(&self) -> Option<&'static SchemeInfo> {
        self.scheme_inf
    }

    #[inline]
    pub(crate) fn is_special_scheme(&self) -> bool {
        self.scheme_inf.map_or(false, |inf| inf.special)
    }

    #[inline]
    pub(crate) fn is_file_scheme(&self) -> bool {
        self.scheme_inf.map_or(false, |inf| inf.file)
    }

    fn serialization_excluding_fragment(&self) -> &str {
        if self.is_null_part(Part::Fragment) {
            &self.serialization
        } else {
            &self.serialization[..self.part_end[Part::Query.i()] as usize]
        }
    }

    /// <https://url.spec.whatwg.org/#include-credentials>, extended with
    /// the port per the standard's setter preconditions.
    fn can_have_credentials_or_port(&self) -> bool {
        !(self.is_empty_part(Part::Host) || self.cannot_be_a_base() || self.is_file_scheme())
    }

    /// Re-enter the parser on a staged copy; commit on success only.
    fn reenter(&mut self, input: &str, state: State) -> Result<(), ParseError> {
        let mut editor = RecordEditor::new(self.clone());
        match parse_url(&mut editor, input, None, Some(state), None)? {
            ParseRun::Done => {
                let url = editor.into_url();
                debug_assert_eq!(url.check_invariants(), Ok(()));
                *self = url;
                Ok(())
            }
            ParseRun::Ignored => Ok(()),
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut RecordEditor)) {
        let mut editor = RecordEditor::new(self.clone());
        f(&mut editor);
        let url = editor.into_url();
        debug_assert_eq!(url.check_invariants(), Ok(()));
        *self = url;
    }

    /// Write an already form-urlencoded string as the query (`None`
    /// makes it null), without re-entering the parser. Used by the
    /// search-params view, whose serialization is always a subset of
    /// the query encode set.
    pub(crate) fn set_query_encoded(&mut self, query: Option<&str>) {
        debug_assert!(query.map_or(true, |q| q
            .bytes()
            .all(|b| (0x21..0x7f).contains(&b) && b != b'#')));
        self.edit(|editor| match query {
            None => editor.clear_part(Part::Query),
            Some(query) => {
                editor.start_part(Part::Query).push_str(query);
                editor.save_part();
                editor.set_part_nonnull(Part::Query);
            }
        });
    }
}

fn is_unc_path(path: &str) -> bool {
    // Path components must be non-empty and free of NULs; a share
    // needs at least host and share name.
    let mut components = 0;
    for component in path.split('\\') {
        if component.is_empty() || component.bytes().any(|b| b == 0) {
            return false;
        }
        components += 1;
    }
    components >= 2
}

fn starts_with_windows_drive_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && matches!(bytes[1], b':' | b'|')
        && (bytes.len() == 2 || matches!(bytes[2], b'/' | b'\\'))
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Url")
            .field("scheme", &self.scheme())
            .field("username", &self.username())
            .field("password", &self.password())
            .field("host", &self.host_str())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl FromStr for Url {
    type Err = ParseError;
    #[inline]
    fn from_str(input: &str) -> Result<Url, ParseError> {
        Url::parse(input)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> String {
        url.serialization
    }
}

impl PartialEq for Url {
    #[inline]
    fn eq(&self, other: &Url) -> bool {
        self.serialization == other.serialization
    }
}

impl Eq for Url {}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialization.hash(state)
    }
}

impl PartialOrd for Url {
    fn partial_cmp(&self, other: &Url) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Url {
    fn cmp(&self, other: &Url) -> std::cmp::Ordering {
        self.serialization.cmp(&other.serialization)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Serializes this URL into a `serde` stream as its href string.
#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes this URL from a `serde` stream by parsing an href
/// string.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Url, D::Error> {
        use serde::de::{Deserialize, Error};
        let string = String::deserialize(deserializer)?;
        Url::parse(&string).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_reuse() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        let options = Url::options().base_url(Some(&base));
        assert_eq!(options.parse("c").unwrap().as_str(), "http://example.com/a/c");
        assert_eq!(options.parse("/d").unwrap().as_str(), "http://example.com/d");
    }

    #[test]
    fn url_ordering_follows_serialization() {
        let a = Url::parse("http://a/").unwrap();
        let b = Url::parse("http://b/").unwrap();
        assert!(a < b);
        assert_eq!(a, Url::parse("http:a").unwrap().join("//a").unwrap());
    }
}
