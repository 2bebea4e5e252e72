// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::host::Host;
use crate::Url;

/// Get the origin from a URL according to the specification:
/// <https://url.spec.whatwg.org/#origin>
pub(crate) fn url_origin(url: &Url) -> Origin {
    origin_of(url, true)
}

fn origin_of(url: &Url, follow_blob: bool) -> Origin {
    let scheme = url.scheme();
    match scheme {
        // Without a blob URL store to consult, fall back to parsing the
        // path as a URL, one level deep: "blob:https://a/b" takes its
        // origin from "https://a/b".
        "blob" if follow_blob => match Url::parse(url.path()) {
            Ok(inner) => origin_of(&inner, false),
            Err(_) => Origin::new_opaque(),
        },
        // The tuple-origin schemes are exactly the special non-file
        // ones; "file" is left to the implementation and stays opaque
        // here, like every unknown scheme.
        _ if url.is_special() && scheme != "file" => match url.host() {
            Some(host) => Origin::Tuple(scheme.to_owned(), host.to_owned(), url.port()),
            None => Origin::new_opaque(),
        },
        _ => Origin::new_opaque(),
    }
}

/// The security origin of a URL: a (scheme, host, port) triple, or an
/// opaque value that is only equal to itself.
///
/// Two URLs whose origins compare equal may be treated as coming from
/// the same entity.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Origin {
    /// The scheme together with the host and the explicit port (`None`
    /// when the scheme's default port applies).
    Tuple(String, Host<String>, Option<u16>),

    /// An unguessable identifier; serializes as `null`.
    Opaque(OpaqueOrigin),
}

impl Origin {
    /// Creates a new opaque origin that is only equal to itself.
    pub fn new_opaque() -> Origin {
        Origin::Opaque(OpaqueOrigin::unique())
    }

    /// Whether this is a (scheme, host, port) triple rather than an
    /// opaque origin.
    pub fn is_tuple(&self) -> bool {
        matches!(self, Origin::Tuple(..))
    }

    /// <https://html.spec.whatwg.org/multipage/#ascii-serialisation-of-an-origin>
    pub fn ascii_serialization(&self) -> String {
        self.serialize(false)
    }

    /// The serialization with punycode domain labels decoded back to
    /// Unicode.
    ///
    /// <https://html.spec.whatwg.org/multipage/#unicode-serialisation-of-an-origin>
    pub fn unicode_serialization(&self) -> String {
        self.serialize(true)
    }

    /// Both serializations only differ in how a domain host is written.
    fn serialize(&self, unicode_host: bool) -> String {
        let (scheme, host, port) = match self {
            Origin::Opaque(_) => return "null".to_owned(),
            Origin::Tuple(scheme, host, port) => (scheme, host, *port),
        };
        let mut out = String::with_capacity(scheme.len() + 24);
        out.push_str(scheme);
        out.push_str("://");
        match host {
            Host::Domain(name) if unicode_host => {
                out.push_str(&idna::domain_to_unicode(name).0);
            }
            other => out.push_str(&other.to_string()),
        }
        if let Some(port) = port {
            out.push(':');
            out.push_str(&port.to_string());
        }
        out
    }
}

/// Identifier backing an opaque origin; every one handed out is
/// distinct.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct OpaqueOrigin(u64);

impl OpaqueOrigin {
    fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        OpaqueOrigin(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
