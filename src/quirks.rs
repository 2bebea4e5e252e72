// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Getters and setters for URL attributes with the exact semantics of
//! the `URL` class of the JavaScript API: separators included in the
//! getter results, and setter failures swallowed into silent no-ops.
//!
//! <https://url.spec.whatwg.org/#api>

use crate::parser::ParseError;
use crate::record::Part;
use crate::Url;

/// Getter for <https://url.spec.whatwg.org/#dom-url-href>
pub fn href(url: &Url) -> &str {
    url.as_str()
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-href>
pub fn set_href(url: &mut Url, value: &str) -> Result<(), ParseError> {
    url.set_href(value)
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-origin>
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-protocol>: the
/// scheme with its trailing `:`.
pub fn protocol(url: &Url) -> &str {
    debug_assert_eq!(
        url.as_str().as_bytes()[url.part_end[Part::Scheme.i()] as usize],
        b':'
    );
    &url.as_str()[..url.part_end[Part::Scheme.i()] as usize + 1]
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-protocol>
pub fn set_protocol(url: &mut Url, new_protocol: &str) {
    let _ = url.set_scheme(new_protocol);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-username>
pub fn username(url: &Url) -> &str {
    url.username()
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-username>
pub fn set_username(url: &mut Url, new_username: &str) {
    let _ = url.set_username(new_username);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-password>
pub fn password(url: &Url) -> &str {
    url.password().unwrap_or("")
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-password>
pub fn set_password(url: &mut Url, new_password: &str) {
    let _ = url.set_password(new_password);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-host>: the host with
/// the port, when one is recorded.
pub fn host(url: &Url) -> &str {
    let start = url.part_end[Part::HostStart.i()] as usize;
    let end = url.part_end[Part::Port.i()].max(url.part_end[Part::Host.i()]) as usize;
    if end > start {
        &url.as_str()[start..end]
    } else {
        ""
    }
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-host>
pub fn set_host(url: &mut Url, new_host: &str) {
    let _ = url.set_host(new_host);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-hostname>
pub fn hostname(url: &Url) -> &str {
    url.host_str().unwrap_or("")
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-hostname>
pub fn set_hostname(url: &mut Url, new_hostname: &str) {
    let _ = url.set_hostname(new_hostname);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-port>
pub fn port(url: &Url) -> &str {
    url.part_view(Part::Port)
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-port>
pub fn set_port(url: &mut Url, new_port: &str) {
    let _ = url.set_port(new_port);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-pathname>
pub fn pathname(url: &Url) -> &str {
    url.path()
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-pathname>
pub fn set_pathname(url: &mut Url, new_pathname: &str) {
    let _ = url.set_pathname(new_pathname);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-search>: `?` plus
/// the query, or the empty string when the query is null or empty.
pub fn search(url: &Url) -> &str {
    match url.query() {
        Some(query) if !query.is_empty() => {
            let start = url.part_end[Part::Path.i()] as usize;
            &url.as_str()[start..url.part_end[Part::Query.i()] as usize]
        }
        _ => "",
    }
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-search>
pub fn set_search(url: &mut Url, new_search: &str) {
    let _ = url.set_search(new_search);
}

/// Getter for <https://url.spec.whatwg.org/#dom-url-hash>: `#` plus the
/// fragment, or the empty string when the fragment is null or empty.
pub fn hash(url: &Url) -> &str {
    match url.fragment() {
        Some(fragment) if !fragment.is_empty() => {
            let start = url.part_end[Part::Query.i()].max(url.part_end[Part::Path.i()]) as usize;
            &url.as_str()[start..]
        }
        _ => "",
    }
}

/// Setter for <https://url.spec.whatwg.org/#dom-url-hash>
pub fn set_hash(url: &mut Url, new_hash: &str) {
    let _ = url.set_hash(new_hash);
}
