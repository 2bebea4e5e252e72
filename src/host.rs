// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::parser::ParseError;
use crate::percent_encoding::{
    append_percent_encoded, percent_decode_utf8_lossy, C0_CONTROLS, FORBIDDEN_DOMAIN,
    FORBIDDEN_HOST,
};

/// The kind of host stored in a URL record.
///
/// `Empty` is distinct from the *absence* of a host: `file:///x` has an
/// empty host while `data:text/plain` has none.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HostType {
    Empty,
    Opaque,
    Domain,
    Ipv4,
    Ipv6,
}

/// The host name of a URL.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Host<S = String> {
    /// A DNS domain name, as `.` dot-separated labels.
    /// Non-ASCII labels are encoded in punycode per IDNA if this is the
    /// host of a special URL, or percent encoded for non-special URLs.
    Domain(S),

    /// The host of a non-special URL, kept verbatim apart from C0
    /// percent-encoding.
    Opaque(S),

    /// An IPv4 address.
    /// `Url::parse` *will* try to match the host of a special URL as an
    /// IPv4 address whenever its last `.`-separated label reads as a
    /// number, so `http://0x7f.1/` and `http://127.0.0.1/` are the same.
    Ipv4(Ipv4Addr),

    /// An IPv6 address, represented inside `[...]` square brackets so
    /// that `:` colon characters in the address are not ambiguous with
    /// the port number delimiter.
    Ipv6(Ipv6Addr),
}

impl Host<String> {
    /// Parse a host for a URL with a special scheme: a bracketed IPv6
    /// address, an IPv4 address in any of its numeric spellings, or a
    /// domain run through IDNA.
    ///
    /// <https://url.spec.whatwg.org/#concept-host-parser>
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cooked = String::new();
        let kind = write_host(input, true, &mut cooked)?;
        Ok(Host::from_cooked(kind, cooked))
    }

    /// Parse the host of a non-special URL: a bracketed IPv6 address or
    /// an opaque host.
    ///
    /// <https://url.spec.whatwg.org/#concept-opaque-host-parser>
    pub fn parse_opaque(input: &str) -> Result<Self, ParseError> {
        let mut cooked = String::new();
        let kind = write_host(input, false, &mut cooked)?;
        Ok(Host::from_cooked(kind, cooked))
    }

    fn from_cooked(kind: HostType, cooked: String) -> Self {
        match kind {
            HostType::Domain => Host::Domain(cooked),
            HostType::Empty | HostType::Opaque => Host::Opaque(cooked),
            HostType::Ipv4 => match ipv4_from_canonical(&cooked) {
                Some(address) => Host::Ipv4(address),
                None => Host::Opaque(cooked),
            },
            HostType::Ipv6 => match ipv6_from_canonical(&cooked) {
                Some(address) => Host::Ipv6(address),
                None => Host::Opaque(cooked),
            },
        }
    }
}

impl<S: AsRef<str>> Host<S> {
    /// Return a copy of this host with an owned string.
    pub fn to_owned(&self) -> Host<String> {
        match *self {
            Host::Domain(ref s) => Host::Domain(s.as_ref().to_owned()),
            Host::Opaque(ref s) => Host::Opaque(s.as_ref().to_owned()),
            Host::Ipv4(address) => Host::Ipv4(address),
            Host::Ipv6(address) => Host::Ipv6(address),
        }
    }
}

impl<S: AsRef<str>> fmt::Display for Host<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Host::Domain(ref domain) => f.write_str(domain.as_ref()),
            Host::Opaque(ref host) => f.write_str(host.as_ref()),
            Host::Ipv4(address) => {
                let mut buf = String::with_capacity(15);
                write_ipv4(u32::from(address), &mut buf);
                f.write_str(&buf)
            }
            Host::Ipv6(address) => {
                let mut buf = String::with_capacity(41);
                buf.push('[');
                write_ipv6(&address.segments(), &mut buf);
                buf.push(']');
                f.write_str(&buf)
            }
        }
    }
}

/// Parse `input` as a host and append its canonical serialization to
/// `out`, returning the host kind. This is the host-parser dispatch of
/// the standard; the caller records the kind and the null/non-null state.
pub(crate) fn write_host(
    input: &str,
    is_special: bool,
    out: &mut String,
) -> Result<HostType, ParseError> {
    if input.is_empty() {
        // Only non-special URLs can have an empty host; the parser
        // rejects empty special hosts before getting here.
        return if is_special {
            Err(ParseError::EmptyHost)
        } else {
            Ok(HostType::Empty)
        };
    }
    if let Some(rest) = input.strip_prefix('[') {
        let inside = match rest.strip_suffix(']') {
            Some(inside) => inside,
            None => return Err(ParseError::InvalidIpv6Address),
        };
        let pieces = parse_ipv6(inside)?;
        out.push('[');
        write_ipv6(&pieces, out);
        out.push(']');
        return Ok(HostType::Ipv6);
    }
    if !is_special {
        return write_opaque_host(input, out);
    }

    // Fast path: an all-ASCII domain with nothing to decode and no
    // punycode label only needs lower-casing.
    let ascii_fast_path = input
        .bytes()
        .all(|byte| byte.is_ascii() && byte != b'%' && !FORBIDDEN_DOMAIN.contains(byte))
        && !has_punycode_label(input);
    let domain = if ascii_fast_path {
        let mut domain = input.to_owned();
        domain.make_ascii_lowercase();
        domain
    } else {
        let decoded = percent_decode_utf8_lossy(input);
        let domain = idna::domain_to_ascii(&decoded).map_err(|_| ParseError::IdnaError)?;
        if domain.is_empty() {
            return Err(ParseError::IdnaError);
        }
        if domain.bytes().any(|byte| FORBIDDEN_DOMAIN.contains(byte)) {
            return Err(ParseError::InvalidDomainCharacter);
        }
        domain
    };

    if ends_in_a_number(&domain) {
        let address = parse_ipv4(&domain)?;
        write_ipv4(address, out);
        Ok(HostType::Ipv4)
    } else {
        out.push_str(&domain);
        Ok(HostType::Domain)
    }
}

fn has_punycode_label(domain: &str) -> bool {
    domain.split('.').any(|label| {
        label.len() >= 4 && label.as_bytes()[..4].eq_ignore_ascii_case(b"xn--")
    })
}

fn write_opaque_host(input: &str, out: &mut String) -> Result<HostType, ParseError> {
    if input.bytes().any(|byte| FORBIDDEN_HOST.contains(byte)) {
        return Err(ParseError::InvalidDomainCharacter);
    }
    append_percent_encoded(input, C0_CONTROLS, out);
    Ok(HostType::Opaque)
}

/// Whether the domain's last label reads as a number, in which case the
/// host must be parsed as IPv4.
///
/// <https://url.spec.whatwg.org/#ends-in-a-number-checker>
pub(crate) fn ends_in_a_number(domain: &str) -> bool {
    let mut labels: Vec<&str> = domain.split('.').collect();
    if labels.last() == Some(&"") {
        if labels.len() == 1 {
            return false;
        }
        labels.pop();
    }
    let last = match labels.last() {
        Some(&last) if !last.is_empty() => last,
        _ => return false,
    };
    if last.bytes().all(|byte| byte.is_ascii_digit()) {
        return true;
    }
    if let Some(hex) = strip_radix_16_prefix(last) {
        return hex.bytes().all(|byte| byte.is_ascii_hexdigit());
    }
    false
}

#[inline]
fn strip_radix_16_prefix(s: &str) -> Option<&str> {
    if s.len() >= 2 && (s.starts_with("0x") || s.starts_with("0X")) {
        Some(&s[2..])
    } else {
        None
    }
}

/// Parse an IPv4 address in its 1-to-4-part decimal/octal/hex spellings.
///
/// <https://url.spec.whatwg.org/#concept-ipv4-parser>
pub(crate) fn parse_ipv4(input: &str) -> Result<u32, ParseError> {
    let mut parts: Vec<&str> = input.split('.').collect();
    if parts.last() == Some(&"") && parts.len() > 1 {
        parts.pop();
    }
    if parts.is_empty() || parts.len() > 4 {
        return Err(ParseError::InvalidIpv4Address);
    }
    let mut numbers = [0u32; 4];
    for (i, part) in parts.iter().enumerate() {
        numbers[i] = parse_ipv4_number(part).ok_or(ParseError::InvalidIpv4Address)?;
    }
    let count = parts.len();
    if numbers[..count - 1].iter().any(|&n| n > 255) {
        return Err(ParseError::InvalidIpv4Address);
    }
    let last = numbers[count - 1];
    if u64::from(last) >= 256u64.pow(5 - count as u32) {
        return Err(ParseError::InvalidIpv4Address);
    }
    let mut address = last;
    for (i, &n) in numbers[..count - 1].iter().enumerate() {
        address += n * 256u32.pow(3 - i as u32);
    }
    Ok(address)
}

/// Parse one dot-separated part: `0x` prefix means hex, a leading zero
/// means octal, anything else decimal. `None` on a malformed or
/// overflowing part.
///
/// <https://url.spec.whatwg.org/#ipv4-number-parser>
fn parse_ipv4_number(part: &str) -> Option<u32> {
    if part.is_empty() {
        return None;
    }
    let (digits, radix) = if let Some(hex) = strip_radix_16_prefix(part) {
        (hex, 16)
    } else if part.len() >= 2 && part.starts_with('0') {
        (&part[1..], 8)
    } else {
        (part, 10)
    };
    if digits.is_empty() {
        return Some(0);
    }
    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }
    Some(value)
}

/// Serialize as four dotted decimal octets.
pub(crate) fn write_ipv4(address: u32, out: &mut String) {
    for i in (0..4).rev() {
        push_decimal(out, (address >> (i * 8)) & 0xff);
        if i > 0 {
            out.push('.');
        }
    }
}

/// Parse an IPv6 address (without the square brackets) into its eight
/// 16-bit pieces.
///
/// <https://url.spec.whatwg.org/#concept-ipv6-parser>
pub(crate) fn parse_ipv6(input: &str) -> Result<[u16; 8], ParseError> {
    const ERR: ParseError = ParseError::InvalidIpv6Address;
    let s = input.as_bytes();
    let len = s.len();
    let mut pieces = [0u16; 8];
    let mut piece_index = 0;
    let mut compress = None;
    let mut i = 0;

    if len == 0 {
        return Err(ERR);
    }
    if s[0] == b':' {
        if len < 2 || s[1] != b':' {
            return Err(ERR);
        }
        i = 2;
        piece_index = 1;
        compress = Some(1);
    }

    'pieces: while i < len {
        if piece_index == 8 {
            return Err(ERR);
        }
        if s[i] == b':' {
            if compress.is_some() {
                return Err(ERR);
            }
            i += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }
        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 && i < len {
            match (s[i] as char).to_digit(16) {
                Some(digit) => {
                    value = value * 0x10 + digit as u16;
                    i += 1;
                    length += 1;
                }
                None => break,
            }
        }
        if i < len {
            match s[i] {
                b'.' => {
                    // An embedded IPv4 address fills the last two pieces.
                    if length == 0 {
                        return Err(ERR);
                    }
                    i -= length;
                    if piece_index > 6 {
                        return Err(ERR);
                    }
                    let mut numbers_seen = 0;
                    while i < len {
                        if numbers_seen > 0 {
                            if s[i] == b'.' && numbers_seen < 4 {
                                i += 1;
                            } else {
                                return Err(ERR);
                            }
                        }
                        if i >= len || !s[i].is_ascii_digit() {
                            return Err(ERR);
                        }
                        let mut ipv4_piece: Option<u16> = None;
                        while i < len && s[i].is_ascii_digit() {
                            let digit = u16::from(s[i] - b'0');
                            ipv4_piece = match ipv4_piece {
                                None => Some(digit),
                                // No leading zeros in the dotted parts.
                                Some(0) => return Err(ERR),
                                Some(v) => Some(v * 10 + digit),
                            };
                            if ipv4_piece > Some(255) {
                                return Err(ERR);
                            }
                            i += 1;
                        }
                        match ipv4_piece {
                            Some(v) => pieces[piece_index] = pieces[piece_index] * 0x100 + v,
                            None => return Err(ERR),
                        }
                        numbers_seen += 1;
                        if numbers_seen == 2 || numbers_seen == 4 {
                            piece_index += 1;
                        }
                    }
                    if numbers_seen != 4 {
                        return Err(ERR);
                    }
                    break 'pieces;
                }
                b':' => {
                    i += 1;
                    if i == len {
                        return Err(ERR);
                    }
                }
                _ => return Err(ERR),
            }
        }
        pieces[piece_index] = value;
        piece_index += 1;
    }

    match compress {
        Some(compress) => {
            let mut swaps = piece_index - compress;
            let mut swap_to = 7;
            while swap_to != 0 && swaps > 0 {
                pieces.swap(swap_to, compress + swaps - 1);
                swap_to -= 1;
                swaps -= 1;
            }
        }
        None if piece_index != 8 => return Err(ERR),
        None => {}
    }
    Ok(pieces)
}

/// Serialize with the longest run of two or more zero pieces (leftmost
/// on a tie) compressed to `::`, other pieces as bare lower-case hex.
///
/// <https://url.spec.whatwg.org/#concept-ipv6-serializer>
pub(crate) fn write_ipv6(pieces: &[u16; 8], out: &mut String) {
    let zero_run = longest_zero_run(pieces);
    match zero_run {
        Some((start, end)) => {
            for (i, &piece) in pieces[..start].iter().enumerate() {
                if i > 0 {
                    out.push(':');
                }
                push_hex_piece(out, piece);
            }
            out.push_str("::");
            for (i, &piece) in pieces[end..].iter().enumerate() {
                if i > 0 {
                    out.push(':');
                }
                push_hex_piece(out, piece);
            }
        }
        None => {
            for (i, &piece) in pieces.iter().enumerate() {
                if i > 0 {
                    out.push(':');
                }
                push_hex_piece(out, piece);
            }
        }
    }
}

fn longest_zero_run(pieces: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = None;
    for i in 0..=8 {
        if i < 8 && pieces[i] == 0 {
            run_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = run_start.take() {
            let longer = match best {
                Some((s, e)) => i - start > e - s,
                None => true,
            };
            if longer {
                best = Some((start, i));
            }
        }
    }
    best.filter(|&(start, end)| end - start >= 2)
}

fn push_hex_piece(out: &mut String, piece: u16) {
    const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
    if piece == 0 {
        out.push('0');
        return;
    }
    let mut shift = 16;
    let mut significant = false;
    while shift > 0 {
        shift -= 4;
        let digit = ((piece >> shift) & 0xf) as usize;
        if digit != 0 || significant {
            significant = true;
            out.push(HEX_LOWER[digit] as char);
        }
    }
}

fn push_decimal(out: &mut String, mut value: u32) {
    let mut digits = [0u8; 10];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
        if value == 0 {
            break;
        }
    }
    while n > 0 {
        n -= 1;
        out.push(digits[n] as char);
    }
}

pub(crate) fn ipv4_from_canonical(text: &str) -> Option<Ipv4Addr> {
    parse_ipv4(text).ok().map(Ipv4Addr::from)
}

pub(crate) fn ipv6_from_canonical(text: &str) -> Option<Ipv6Addr> {
    let inside = text.strip_prefix('[')?.strip_suffix(']')?;
    let p = parse_ipv6(inside).ok()?;
    Some(Ipv6Addr::new(p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipv4(input: &str) -> Result<String, ParseError> {
        parse_ipv4(input).map(|address| {
            let mut out = String::new();
            write_ipv4(address, &mut out);
            out
        })
    }

    fn ipv6(input: &str) -> Result<String, ParseError> {
        parse_ipv6(input).map(|pieces| {
            let mut out = String::new();
            write_ipv6(&pieces, &mut out);
            out
        })
    }

    #[test]
    fn ipv4_number_forms() {
        assert_eq!(ipv4("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(ipv4("0x7f.1").unwrap(), "127.0.0.1");
        assert_eq!(ipv4("0x7f000001").unwrap(), "127.0.0.1");
        assert_eq!(ipv4("017700000001").unwrap(), "127.0.0.1");
        assert_eq!(ipv4("192.168.0x10").unwrap(), "192.168.0.16");
        assert_eq!(ipv4("1.1").unwrap(), "1.0.0.1");
        assert_eq!(ipv4("4294967295").unwrap(), "255.255.255.255");
        // Trailing dot is dropped.
        assert_eq!(ipv4("127.0.0.1.").unwrap(), "127.0.0.1");
    }

    #[test]
    fn ipv4_bounds() {
        // Part > 255 is only allowed in the last position.
        assert!(ipv4("256.1.1.1").is_err());
        assert_eq!(ipv4("1.1.1.256").err(), Some(ParseError::InvalidIpv4Address));
        assert_eq!(ipv4("1.1.65535").unwrap(), "1.1.255.255");
        assert!(ipv4("1.1.65536.1").is_err());
        assert!(ipv4("4294967296").is_err());
        assert!(ipv4("1.2.3.4.5").is_err());
        assert!(ipv4("1..2").is_err());
        assert!(ipv4("0x").is_ok()); // bare prefix is zero
    }

    #[test]
    fn ipv4_round_trips() {
        for &n in &[0u32, 1, 0x7f000001, 0xc0a80010, u32::MAX, 0x00ff00ff] {
            let mut out = String::new();
            write_ipv4(n, &mut out);
            assert_eq!(parse_ipv4(&out).unwrap(), n);
        }
    }

    #[test]
    fn ends_in_a_number_checker() {
        assert!(ends_in_a_number("127.0.0.1"));
        assert!(ends_in_a_number("example.0x2f"));
        assert!(ends_in_a_number("example.12."));
        assert!(ends_in_a_number("0X"));
        assert!(!ends_in_a_number("example.com"));
        assert!(!ends_in_a_number("example.1x"));
        assert!(!ends_in_a_number("12.com"));
        assert!(!ends_in_a_number("."));
        assert!(!ends_in_a_number("example.."));
    }

    #[test]
    fn ipv6_canonical_compression() {
        assert_eq!(ipv6("::ffff:1.2.3.4").unwrap(), "::ffff:102:304");
        assert_eq!(ipv6("1:0:0:2:0:0:0:3").unwrap(), "1:0:0:2::3");
        assert_eq!(ipv6("0:0:1:0:0:1:0:0").unwrap(), "::1:0:0:1:0:0");
        assert_eq!(ipv6("1:2:3:4:5:6:7:8").unwrap(), "1:2:3:4:5:6:7:8");
        assert_eq!(ipv6("::").unwrap(), "::");
        assert_eq!(ipv6("::1").unwrap(), "::1");
        assert_eq!(ipv6("1::").unwrap(), "1::");
        assert_eq!(ipv6("ABCD::EF12").unwrap(), "abcd::ef12");
    }

    #[test]
    fn ipv6_rejects() {
        assert!(ipv6("").is_err());
        assert!(ipv6(":::").is_err());
        assert!(ipv6("1:2:3:4:5:6:7").is_err());
        assert!(ipv6("1:2:3:4:5:6:7:8:9").is_err());
        assert!(ipv6("1::2::3").is_err());
        assert!(ipv6("12345::").is_err());
        assert!(ipv6("1:2:3:4:5:6:7:1.2.3.4").is_err());
        assert!(ipv6("::1.2.3").is_err());
        assert!(ipv6("::1.2.3.4.5").is_err());
        assert!(ipv6("::01.2.3.4").is_err()); // no leading zeros
        assert!(ipv6("::256.2.3.4").is_err());
        assert!(ipv6("1:2:").is_err());
    }

    #[test]
    fn host_dispatch() {
        assert_eq!(
            Host::parse("EXAMPLE.com").unwrap(),
            Host::Domain("example.com".to_owned())
        );
        assert_eq!(
            Host::parse("0x7f.1").unwrap(),
            Host::Ipv4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(
            Host::parse("[::1]").unwrap(),
            Host::Ipv6(Ipv6Addr::LOCALHOST)
        );
        assert_eq!(Host::parse("[::1").err(), Some(ParseError::InvalidIpv6Address));
        assert_eq!(Host::parse("").err(), Some(ParseError::EmptyHost));
        assert_eq!(Host::parse("a b").err(), Some(ParseError::InvalidDomainCharacter));
        assert_eq!(Host::parse("a%23b").err(), Some(ParseError::InvalidDomainCharacter));
    }

    #[test]
    fn host_idna() {
        assert_eq!(
            Host::parse("bücher.de").unwrap(),
            Host::Domain("xn--bcher-kva.de".to_owned())
        );
        assert_eq!(
            Host::parse("xn--bcher-kva.de").unwrap(),
            Host::Domain("xn--bcher-kva.de".to_owned())
        );
        // Percent-encoded UTF-8 is decoded before IDNA.
        assert_eq!(
            Host::parse("b%C3%BCcher.de").unwrap(),
            Host::Domain("xn--bcher-kva.de".to_owned())
        );
        assert!(Host::parse("xn--a.a").is_err());
    }

    #[test]
    fn opaque_hosts() {
        assert_eq!(
            Host::parse_opaque("ho st").err(),
            Some(ParseError::InvalidDomainCharacter)
        );
        assert_eq!(
            Host::parse_opaque("EXAMPLE.com").unwrap(),
            Host::Opaque("EXAMPLE.com".to_owned())
        );
        assert_eq!(
            Host::parse_opaque("%c3%a9").unwrap(),
            Host::Opaque("%c3%a9".to_owned())
        );
        assert_eq!(
            Host::parse_opaque("é").unwrap(),
            Host::Opaque("%C3%A9".to_owned())
        );
        assert_eq!(
            Host::parse_opaque("[::ffff:1.2.3.4]").unwrap(),
            Host::Ipv6("::ffff:1.2.3.4".parse().unwrap())
        );
    }

    #[test]
    fn display_matches_canonical_form() {
        assert_eq!(Host::parse("[1:0:0:2::3]").unwrap().to_string(), "[1:0:0:2::3]");
        assert_eq!(Host::parse("0x10.0.0.1").unwrap().to_string(), "16.0.0.1");
        assert_eq!(Host::parse("ExAmPlE.CoM").unwrap().to_string(), "example.com");
    }
}
