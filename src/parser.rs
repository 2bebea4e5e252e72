// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The basic URL parser.
//!
//! <https://url.spec.whatwg.org/#concept-basic-url-parser>
//!
//! One function drives both fresh parses and setter re-entry: a state
//! override starts the machine in the middle and gates the transitions
//! that behave differently under the JavaScript attribute model. States
//! only ever flow forward, so the machine is written as a sequence of
//! state blocks over a slice cursor rather than a per-code-point loop.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::host::write_host;
use crate::percent_encoding::{append_percent_encoded, FRAGMENT, PATH, QUERY, SPECIAL_QUERY};
use crate::record::{is_windows_drive, Part, PathOp, UrlWriter};
use crate::Url;

/// Inputs longer than this fail with `ParseError::Overflow` instead of
/// being silently truncated.
pub(crate) const MAX_INPUT_LENGTH: usize = 1 << 30;

macro_rules! simple_enum_error {
    ($($name: ident => $description: literal,)+) => {
        /// Errors that can occur during parsing.
        ///
        /// This may be extended in the future so exhaustive matching is
        /// discouraged.
        #[derive(PartialEq, Eq, Clone, Copy, Debug)]
        #[non_exhaustive]
        pub enum ParseError {
            $($name,)+
        }

        impl fmt::Display for ParseError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match *self {
                    $(ParseError::$name => f.write_str($description),)+
                }
            }
        }
    }
}

simple_enum_error! {
    EmptyHost => "empty host",
    IdnaError => "invalid international domain name",
    InvalidPort => "invalid port number",
    InvalidIpv4Address => "invalid IPv4 address",
    InvalidIpv6Address => "invalid IPv6 address",
    InvalidDomainCharacter => "invalid domain character",
    InvalidSchemeCharacter => "invalid scheme character",
    RelativeUrlWithoutBase => "relative URL without a base",
    RelativeUrlWithCannotBeABase => "relative URL with a cannot-be-a-base base",
    InvalidBase => "invalid base URL",
    Overflow => "URL is too long",
    EmptyPath => "file path cannot be empty",
    UnsupportedPath => "unsupported file path",
}

impl std::error::Error for ParseError {}

macro_rules! syntax_violation_enum {
    ($($name: ident => $description: literal,)+) => {
        /// Non-fatal syntax violations, reported through the callback
        /// registered with
        /// [`ParseOptions::syntax_violation_callback`](crate::ParseOptions::syntax_violation_callback).
        #[derive(PartialEq, Eq, Clone, Copy, Debug)]
        #[non_exhaustive]
        pub enum SyntaxViolation {
            $($name,)+
        }

        impl SyntaxViolation {
            pub fn description(&self) -> &'static str {
                match *self {
                    $(SyntaxViolation::$name => $description,)+
                }
            }
        }
    }
}

syntax_violation_enum! {
    C0SpaceIgnored => "leading or trailing control or space character are ignored in URLs",
    TabOrNewlineIgnored => "tabs or newlines are ignored in URLs",
    ExpectedDoubleSlash => "expected //",
    ExpectedFileDoubleSlash => "expected // after file:",
    Backslash => "backslash",
    EmbeddedCredentials => "embedding authentication information (username or password) \
         in an URL is not recommended",
    FileWithHostAndWindowsDrive => "file: with host and Windows drive letter",
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

pub(crate) type ViolationFn<'a> = Option<&'a dyn Fn(SyntaxViolation)>;

#[inline]
pub(crate) fn report(vfn: ViolationFn<'_>, violation: SyntaxViolation) {
    if let Some(f) = vfn {
        f(violation)
    }
}

/// Static description of a scheme: its default port and whether it gets
/// the stricter "special" authority handling.
///
/// <https://url.spec.whatwg.org/#special-scheme>
pub(crate) struct SchemeInfo {
    pub(crate) default_port: Option<u16>,
    pub(crate) special: bool,
    pub(crate) file: bool,
}

static SCHEMES: &[(&str, SchemeInfo)] = &[
    (
        "ftp",
        SchemeInfo {
            default_port: Some(21),
            special: true,
            file: false,
        },
    ),
    (
        "file",
        SchemeInfo {
            default_port: None,
            special: true,
            file: true,
        },
    ),
    (
        "http",
        SchemeInfo {
            default_port: Some(80),
            special: true,
            file: false,
        },
    ),
    (
        "https",
        SchemeInfo {
            default_port: Some(443),
            special: true,
            file: false,
        },
    ),
    (
        "ws",
        SchemeInfo {
            default_port: Some(80),
            special: true,
            file: false,
        },
    ),
    (
        "wss",
        SchemeInfo {
            default_port: Some(443),
            special: true,
            file: false,
        },
    ),
];

pub(crate) fn get_scheme_info(scheme: &str) -> Option<&'static SchemeInfo> {
    SCHEMES
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|(_, info)| info)
}

/// Parser states. Setters re-enter the machine at one of these.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum State {
    SchemeStart,
    Scheme,
    NoScheme,
    SpecialRelativeOrAuthority,
    PathOrAuthority,
    Relative,
    RelativeSlash,
    SpecialAuthoritySlashes,
    SpecialAuthorityIgnoreSlashes,
    Authority,
    Host,
    Hostname,
    Port,
    File,
    FileSlash,
    FileHost,
    PathStart,
    Path,
    OpaquePath,
    Query,
    Fragment,
}

/// Successful outcomes of a parser run. `Ignored` is the standard's
/// internal "false" signal: the setter's input violates a precondition
/// and the record must be left untouched, but the caller sees no error.
#[derive(PartialEq, Eq, Debug)]
pub(crate) enum ParseRun {
    Done,
    Ignored,
}

#[inline]
fn is_scheme_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
}

#[inline]
fn is_authority_end(byte: u8, special: bool) -> bool {
    matches!(byte, b'/' | b'?' | b'#') || (special && byte == b'\\')
}

fn find_authority_end(bytes: &[u8], from: usize, special: bool) -> usize {
    bytes[from..]
        .iter()
        .position(|&byte| is_authority_end(byte, special))
        .map_or(bytes.len(), |p| from + p)
}

/// ASCII alpha, then `:` or `|`, then nothing or a terminator.
pub(crate) fn starts_with_windows_drive(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && matches!(bytes[1], b':' | b'|')
        && (bytes.len() == 2 || matches!(bytes[2], b'/' | b'\\' | b'?' | b'#'))
}

#[inline]
fn is_escaped_dot(bytes: &[u8]) -> bool {
    bytes[0] == b'%' && bytes[1] == b'2' && (bytes[2] | 0x20) == b'e'
}

fn is_single_dot(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    match bytes.len() {
        1 => bytes[0] == b'.',
        3 => is_escaped_dot(bytes),
        _ => false,
    }
}

fn is_double_dot(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    match bytes.len() {
        2 => bytes == b"..",
        4 => {
            (bytes[0] == b'.' && is_escaped_dot(&bytes[1..]))
                || (is_escaped_dot(bytes) && bytes[3] == b'.')
        }
        6 => is_escaped_dot(bytes) && is_escaped_dot(&bytes[3..]),
        _ => false,
    }
}

/// Run the basic URL parser over `input`, writing parts through `w`.
///
/// `input` must already be stripped of leading/trailing C0 controls and
/// spaces when parsing a full URL; interior tabs and newlines are
/// removed here (setters feed their input through unstripped).
pub(crate) fn parse_url<W: UrlWriter>(
    w: &mut W,
    input: &str,
    base: Option<&Url>,
    state_override: Option<State>,
    vfn: ViolationFn<'_>,
) -> Result<ParseRun, ParseError> {
    if input.len() > MAX_INPUT_LENGTH {
        return Err(ParseError::Overflow);
    }

    // Remove all ASCII tab or newline. Stripping ASCII bytes cannot
    // break UTF-8, so the lossy conversion below never replaces
    // anything.
    let mut no_ws = SmallVec::<[u8; 1024]>::new();
    let filtered: Cow<'_, str>;
    let s: &str = if input
        .bytes()
        .any(|byte| matches!(byte, b'\t' | b'\n' | b'\r'))
    {
        report(vfn, SyntaxViolation::TabOrNewlineIgnored);
        no_ws.extend(
            input
                .bytes()
                .filter(|&byte| !matches!(byte, b'\t' | b'\n' | b'\r')),
        );
        filtered = String::from_utf8_lossy(&no_ws);
        &filtered
    } else {
        input
    };

    w.reserve(s.len() + 32);

    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    let mut state = state_override.unwrap_or(State::SchemeStart);

    if state == State::SchemeStart {
        if i < len && bytes[i].is_ascii_alphabetic() {
            state = State::Scheme;
        } else if state_override.is_none() {
            state = State::NoScheme;
        } else {
            return Err(ParseError::InvalidSchemeCharacter);
        }
    }

    if state == State::Scheme {
        // The first byte was validated in the scheme start state.
        let end_of_scheme = bytes[i + 1..]
            .iter()
            .position(|&byte| !is_scheme_byte(byte))
            .map_or(len, |p| i + 1 + p);
        // With a state override, end of input terminates the scheme as
        // well, so the protocol setter accepts input without a ":".
        let is_scheme = if end_of_scheme < len {
            bytes[end_of_scheme] == b':'
        } else {
            state_override.is_some()
        };
        if is_scheme {
            let mut scheme = String::with_capacity(end_of_scheme - i);
            for &byte in &bytes[i..end_of_scheme] {
                scheme.push(byte.to_ascii_lowercase() as char);
            }

            if state_override.is_some() {
                let new_inf = get_scheme_info(&scheme);
                let new_special = new_inf.map_or(false, |inf| inf.special);
                let new_file = new_inf.map_or(false, |inf| inf.file);
                // A scheme change may not cross the special/non-special
                // boundary, give a file URL credentials or a port, or
                // move a host-less file URL to a scheme that requires a
                // host.
                if w.u().is_special_scheme() != new_special {
                    return Ok(ParseRun::Ignored);
                }
                if new_file && (w.u().has_credentials() || !w.u().is_null_part(Part::Port)) {
                    return Ok(ParseRun::Ignored);
                }
                if w.u().is_file_scheme() && w.u().is_empty_part(Part::Host) {
                    return Ok(ParseRun::Ignored);
                }

                w.start_scheme().push_str(&scheme);
                w.save_scheme();

                // https://github.com/whatwg/url/pull/328
                if let Some(default_port) = new_inf.and_then(|inf| inf.default_port) {
                    if w.u().port_number() == Some(default_port) {
                        w.clear_part(Part::Port);
                    }
                }
                return Ok(ParseRun::Done);
            }

            w.start_scheme().push_str(&scheme);
            w.save_scheme();
            i = end_of_scheme + 1; // skip ':'

            if w.u().is_file_scheme() {
                if !s[i..].starts_with("//") {
                    report(vfn, SyntaxViolation::ExpectedFileDoubleSlash);
                }
                state = State::File;
            } else if w.u().is_special_scheme() {
                let same_scheme_base =
                    base.map_or(false, |b| b.part_view(Part::Scheme) == scheme);
                state = if same_scheme_base {
                    // The base's cannot-be-a-base flag is necessarily
                    // unset: special URLs always have an authority.
                    State::SpecialRelativeOrAuthority
                } else {
                    State::SpecialAuthoritySlashes
                };
            } else if bytes.get(i) == Some(&b'/') {
                state = State::PathOrAuthority;
                i += 1;
            } else {
                w.set_cannot_be_a_base();
                w.start_opaque_path();
                w.save_opaque_path();
                state = State::OpaquePath;
            }
        } else if state_override.is_none() {
            state = State::NoScheme;
        } else {
            return Err(ParseError::InvalidSchemeCharacter);
        }
    }

    if state == State::NoScheme {
        let base = match base {
            Some(base) => base,
            None => return Err(ParseError::RelativeUrlWithoutBase),
        };
        if base.cannot_be_a_base_flag() {
            if bytes.get(i) != Some(&b'#') {
                return Err(ParseError::RelativeUrlWithCannotBeABase);
            }
            w.set_cannot_be_a_base();
            w.copy_scheme(base);
            w.append_parts(base, Part::Path, Part::Query, PathOp::Copy);
            state = State::Fragment;
            i += 1;
        } else if base.is_file_scheme() {
            state = State::File;
        } else {
            state = State::Relative;
        }
    }

    if state == State::SpecialRelativeOrAuthority {
        if bytes[i..].starts_with(b"//") {
            state = State::SpecialAuthorityIgnoreSlashes;
            i += 2;
        } else {
            report(vfn, SyntaxViolation::ExpectedDoubleSlash);
            state = State::Relative;
        }
    }

    if state == State::PathOrAuthority {
        if bytes.get(i) == Some(&b'/') {
            state = State::Authority;
            i += 1;
        } else {
            state = State::Path;
        }
    }

    if state == State::Relative {
        let base = match base {
            Some(base) => base,
            None => return Err(ParseError::RelativeUrlWithoutBase),
        };
        w.copy_scheme(base);
        match bytes.get(i).copied() {
            None => {
                w.append_parts(base, Part::Username, Part::Query, PathOp::Copy);
                return Ok(ParseRun::Done);
            }
            Some(b'/') => {
                state = State::RelativeSlash;
                i += 1;
            }
            Some(b'\\') if w.u().is_special_scheme() => {
                report(vfn, SyntaxViolation::Backslash);
                state = State::RelativeSlash;
                i += 1;
            }
            Some(b'?') => {
                w.append_parts(base, Part::Username, Part::Path, PathOp::Copy);
                state = State::Query;
                i += 1;
            }
            Some(b'#') => {
                w.append_parts(base, Part::Username, Part::Query, PathOp::Copy);
                state = State::Fragment;
                i += 1;
            }
            Some(_) => {
                w.append_parts(base, Part::Username, Part::Path, PathOp::RemoveLast);
                state = State::Path;
            }
        }
    }

    if state == State::RelativeSlash {
        let base = match base {
            Some(base) => base,
            None => return Err(ParseError::RelativeUrlWithoutBase),
        };
        match bytes.get(i).copied() {
            Some(b'/') => {
                state = if w.u().is_special_scheme() {
                    State::SpecialAuthorityIgnoreSlashes
                } else {
                    State::Authority
                };
                i += 1;
            }
            Some(b'\\') if w.u().is_special_scheme() => {
                report(vfn, SyntaxViolation::Backslash);
                state = State::SpecialAuthorityIgnoreSlashes;
                i += 1;
            }
            _ => {
                w.append_parts(base, Part::Username, Part::Port, PathOp::Copy);
                state = State::Path;
            }
        }
    }

    if state == State::SpecialAuthoritySlashes {
        if bytes[i..].starts_with(b"//") {
            i += 2;
        } else {
            report(vfn, SyntaxViolation::ExpectedDoubleSlash);
        }
        state = State::SpecialAuthorityIgnoreSlashes;
    }

    if state == State::SpecialAuthorityIgnoreSlashes {
        let skipped = bytes[i..]
            .iter()
            .position(|&byte| byte != b'/' && byte != b'\\')
            .map_or(len - i, |p| p);
        if skipped != 0 {
            report(vfn, SyntaxViolation::ExpectedDoubleSlash);
        }
        i += skipped;
        state = State::Authority;
    }

    if state == State::Authority {
        let special = w.u().is_special_scheme();
        let end_of_authority = find_authority_end(bytes, i, special);
        if let Some(at) = bytes[i..end_of_authority]
            .iter()
            .rposition(|&byte| byte == b'@')
        {
            let at = i + at;
            report(vfn, SyntaxViolation::EmbeddedCredentials);
            if at + 1 == end_of_authority {
                return Err(ParseError::EmptyHost);
            }
            let colon = bytes[i..at]
                .iter()
                .position(|&byte| byte == b':')
                .map_or(at, |p| i + p);
            let username = &s[i..colon];
            let password = if colon < at { &s[colon + 1..at] } else { "" };
            if !username.is_empty() || !password.is_empty() {
                append_percent_encoded(
                    username,
                    crate::percent_encoding::USERINFO,
                    w.start_part(Part::Username),
                );
                w.save_part();
                if !password.is_empty() {
                    append_percent_encoded(
                        password,
                        crate::percent_encoding::USERINFO,
                        w.start_part(Part::Password),
                    );
                    w.save_part();
                }
            }
            i = at + 1;
        }
        state = State::Host;
    }

    if state == State::Host || state == State::Hostname {
        if state_override.is_some() && w.u().is_file_scheme() {
            state = State::FileHost;
        } else {
            let special = w.u().is_special_scheme();
            let end_of_authority = find_authority_end(bytes, i, special);
            let mut in_brackets = false;
            let mut host_end = end_of_authority;
            let mut has_port = false;
            for (j, &byte) in bytes[i..end_of_authority].iter().enumerate() {
                match byte {
                    b':' if !in_brackets => {
                        host_end = i + j;
                        has_port = true;
                        break;
                    }
                    b'[' => in_brackets = true,
                    b']' => in_brackets = false,
                    _ => {}
                }
            }

            if i == host_end {
                if has_port || special {
                    return Err(ParseError::EmptyHost);
                }
                if state_override.is_some()
                    && (w.u().has_credentials() || !w.u().is_null_part(Part::Port))
                {
                    return Ok(ParseRun::Ignored);
                }
            }
            if has_port && state_override == Some(State::Hostname) {
                return Ok(ParseRun::Ignored);
            }

            let kind = {
                let host_input = &s[i..host_end];
                let buf = w.start_part(Part::Host);
                write_host(host_input, special, buf)?
            };
            w.finish_host(kind);

            if has_port {
                i = host_end + 1;
                state = State::Port;
            } else {
                i = host_end;
                if state_override.is_some() {
                    return Ok(ParseRun::Done);
                }
                state = State::PathStart;
            }
        }
    }

    if state == State::Port {
        let special = w.u().is_special_scheme();
        let end_of_digits = bytes[i..]
            .iter()
            .position(|byte| !byte.is_ascii_digit())
            .map_or(len, |p| i + p);
        let at_authority_end =
            end_of_digits == len || is_authority_end(bytes[end_of_digits], special);
        if !at_authority_end && state_override.is_none() {
            return Err(ParseError::InvalidPort);
        }
        if i < end_of_digits {
            let mut port: u32 = 0;
            for &byte in &bytes[i..end_of_digits] {
                port = port * 10 + u32::from(byte - b'0');
                if port > 0xffff {
                    return Err(ParseError::InvalidPort);
                }
            }
            let port = port as u16;
            let is_default = w
                .u()
                .scheme_info()
                .and_then(|inf| inf.default_port)
                == Some(port);
            if is_default {
                w.clear_part(Part::Port);
            } else {
                let mut digits = String::with_capacity(5);
                let mut value = port;
                let mut stack = [0u8; 5];
                let mut n = 0;
                loop {
                    stack[n] = b'0' + (value % 10) as u8;
                    value /= 10;
                    n += 1;
                    if value == 0 {
                        break;
                    }
                }
                while n > 0 {
                    n -= 1;
                    digits.push(stack[n] as char);
                }
                w.start_part(Part::Port).push_str(&digits);
                w.save_part();
                w.set_part_nonnull(Part::Port);
            }
        }
        if state_override.is_some() {
            return Ok(ParseRun::Done);
        }
        state = State::PathStart;
        i = end_of_digits;
    }

    if state == State::File {
        if !w.u().is_file_scheme() {
            w.set_file_scheme();
        }
        // A file URL's host is never null.
        w.set_empty_host();
        match bytes.get(i).copied() {
            Some(b'/') => {
                state = State::FileSlash;
                i += 1;
            }
            Some(b'\\') => {
                report(vfn, SyntaxViolation::Backslash);
                state = State::FileSlash;
                i += 1;
            }
            first => match base.filter(|b| b.is_file_scheme()) {
                Some(base) => match first {
                    None => {
                        w.append_parts(base, Part::Host, Part::Query, PathOp::Copy);
                        return Ok(ParseRun::Done);
                    }
                    Some(b'?') => {
                        w.append_parts(base, Part::Host, Part::Path, PathOp::Copy);
                        state = State::Query;
                        i += 1;
                    }
                    Some(b'#') => {
                        w.append_parts(base, Part::Host, Part::Query, PathOp::Copy);
                        state = State::Fragment;
                        i += 1;
                    }
                    Some(_) => {
                        if starts_with_windows_drive(&s[i..]) {
                            report(vfn, SyntaxViolation::FileWithHostAndWindowsDrive);
                            w.append_parts(base, Part::Host, Part::Host, PathOp::Copy);
                        } else {
                            w.append_parts(base, Part::Host, Part::Path, PathOp::Shorten);
                        }
                        state = State::Path;
                    }
                },
                None => state = State::Path,
            },
        }
    }

    if state == State::FileSlash {
        match bytes.get(i).copied() {
            Some(b'/') => {
                state = State::FileHost;
                i += 1;
            }
            Some(b'\\') => {
                report(vfn, SyntaxViolation::Backslash);
                state = State::FileHost;
                i += 1;
            }
            _ => {
                if let Some(base) = base.filter(|b| b.is_file_scheme()) {
                    // Host first, path after, or the serializer's offsets
                    // go backwards.
                    w.append_parts(base, Part::Host, Part::Host, PathOp::Copy);
                    if !starts_with_windows_drive(&s[i..]) {
                        if let Some(first) = base.path_first_two() {
                            if crate::record::is_normalized_windows_drive(first) {
                                // The base's drive letter survives into
                                // the new path.
                                w.start_path_segment().push_str(first);
                                w.save_path_segment();
                            }
                        }
                    }
                }
                state = State::Path;
            }
        }
    }

    if state == State::FileHost {
        let end_of_authority = find_authority_end(bytes, i, true);
        let host_input = &s[i..end_of_authority];
        if host_input.is_empty() {
            w.set_empty_host();
            if state_override.is_some() {
                return Ok(ParseRun::Done);
            }
            state = State::PathStart;
        } else if state_override.is_none() && is_windows_drive(host_input) {
            report(vfn, SyntaxViolation::FileWithHostAndWindowsDrive);
            // Not consumed: the drive letter parses as the first path
            // segment instead of a host.
            state = State::Path;
        } else {
            let kind = {
                let buf = w.start_part(Part::Host);
                write_host(host_input, true, buf)?
            };
            w.finish_host(kind);
            if w.u().part_view(Part::Host) == "localhost" {
                w.empty_host();
            }
            if state_override.is_some() {
                return Ok(ParseRun::Done);
            }
            i = end_of_authority;
            state = State::PathStart;
        }
    }

    if state == State::PathStart {
        if w.u().is_special_scheme() {
            match bytes.get(i).copied() {
                Some(b'/') => i += 1,
                Some(b'\\') => {
                    report(vfn, SyntaxViolation::Backslash);
                    i += 1;
                }
                _ => {}
            }
            state = State::Path;
        } else if i < len {
            if state_override.is_none() {
                match bytes[i] {
                    b'?' => {
                        state = State::Query;
                        i += 1;
                    }
                    b'#' => {
                        state = State::Fragment;
                        i += 1;
                    }
                    byte => {
                        if byte == b'/' {
                            i += 1;
                        }
                        state = State::Path;
                    }
                }
            } else {
                if bytes[i] == b'/' {
                    i += 1;
                }
                state = State::Path;
            }
        } else {
            if state_override.is_some() && w.u().is_null_part(Part::Host) {
                w.append_empty_segment();
            }
            w.commit_path();
            return Ok(ParseRun::Done);
        }
    }

    if state == State::Path {
        let end_of_path = if state_override.is_some() {
            len
        } else {
            bytes[i..]
                .iter()
                .position(|&byte| byte == b'?' || byte == b'#')
                .map_or(len, |p| i + p)
        };
        parse_path(w, &s[i..end_of_path], vfn);
        w.commit_path();
        i = end_of_path;
        match bytes.get(i).copied() {
            None => return Ok(ParseRun::Done),
            Some(b'?') => {
                state = State::Query;
                i += 1;
            }
            _ => {
                state = State::Fragment;
                i += 1;
            }
        }
    }

    if state == State::OpaquePath {
        let end_of_path = bytes[i..]
            .iter()
            .position(|&byte| byte == b'?' || byte == b'#')
            .map_or(len, |p| i + p);
        append_percent_encoded(
            &s[i..end_of_path],
            crate::percent_encoding::C0_CONTROLS,
            w.start_opaque_path(),
        );
        w.save_opaque_path();
        i = end_of_path;
        match bytes.get(i).copied() {
            None => return Ok(ParseRun::Done),
            Some(b'?') => {
                state = State::Query;
                i += 1;
            }
            _ => {
                state = State::Fragment;
                i += 1;
            }
        }
    }

    if state == State::Query {
        let end_of_query = if state_override.is_some() {
            len
        } else {
            bytes[i..]
                .iter()
                .position(|&byte| byte == b'#')
                .map_or(len, |p| i + p)
        };
        let set = if w.u().is_special_scheme() {
            SPECIAL_QUERY
        } else {
            QUERY
        };
        append_percent_encoded(&s[i..end_of_query], set, w.start_part(Part::Query));
        w.save_part();
        w.set_part_nonnull(Part::Query);
        i = end_of_query;
        if i == len {
            return Ok(ParseRun::Done);
        }
        state = State::Fragment;
        i += 1; // skip '#'
    }

    if state == State::Fragment {
        append_percent_encoded(&s[i..], FRAGMENT, w.start_part(Part::Fragment));
        w.save_part();
        w.set_part_nonnull(Part::Fragment);
    }
    Ok(ParseRun::Done)
}

/// Split the path into segments and canonicalize dot segments.
///
/// <https://url.spec.whatwg.org/#path-state>
fn parse_path<W: UrlWriter>(w: &mut W, input: &str, vfn: ViolationFn<'_>) {
    let special = w.u().is_special_scheme();
    let bytes = input.as_bytes();
    let mut seg_start = 0;
    loop {
        let seg_end = bytes[seg_start..]
            .iter()
            .position(|&byte| byte == b'/' || (special && byte == b'\\'))
            .map_or(bytes.len(), |p| seg_start + p);
        let segment = &input[seg_start..seg_end];
        let is_last = seg_end == bytes.len();

        if is_double_dot(segment) {
            w.shorten_path();
            if is_last {
                w.append_empty_segment();
            }
        } else if is_single_dot(segment) {
            if is_last {
                w.append_empty_segment();
            }
        } else if segment.len() == 2
            && w.u().is_file_scheme()
            && w.path_is_empty()
            && is_windows_drive(segment)
        {
            // Normalize "C|" to "C:".
            let first = segment.as_bytes()[0];
            let buf = w.start_path_segment();
            buf.push(first as char);
            buf.push(':');
            w.save_path_segment();
        } else {
            append_percent_encoded(segment, PATH, w.start_path_segment());
            w.save_path_segment();
        }

        if is_last {
            break;
        }
        if bytes[seg_end] == b'\\' {
            report(vfn, SyntaxViolation::Backslash);
        }
        seg_start = seg_end + 1;
    }
}
