// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Storage layer for the URL record: one canonical string plus an array
//! of non-decreasing end offsets, one per part, and a bitmask telling
//! null parts apart from empty ones.
//!
//! The parser writes through one of two sinks. [`RecordBuilder`] appends
//! parts left to right while parsing a complete URL string.
//! [`RecordEditor`] re-enters the same parser on an existing record with
//! a state override and splices the re-parsed part into the middle of
//! the canonical string, keeping every later offset consistent.

use crate::host::HostType;
use crate::parser::get_scheme_info;
use crate::Url;

/// The parts of a URL record, in serialization order.
///
/// Each part's bytes run from the previous part's end offset to its own.
/// A part whose content carries a fixed separator prefix (`:` before
/// password and port, `?` before query, `#` before fragment) stores the
/// separator inside its range; `PART_BEGIN` gives the prefix length.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum Part {
    Scheme = 0,
    SchemeSep, // ":" or "://"
    Username,
    Password,
    HostStart, // "@" when credentials are present
    Host,
    Port,
    PathPrefix, // "/." when a host-less path would start with "//"
    Path,
    Query,
    Fragment,
}

pub(crate) const PART_COUNT: usize = 11;

const ALL_PARTS: [Part; PART_COUNT] = [
    Part::Scheme,
    Part::SchemeSep,
    Part::Username,
    Part::Password,
    Part::HostStart,
    Part::Host,
    Part::Port,
    Part::PathPrefix,
    Part::Path,
    Part::Query,
    Part::Fragment,
];

/// Separator prefix length stored inside each part's range.
pub(crate) const PART_BEGIN: [u32; PART_COUNT] = [0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1];

impl Part {
    #[inline]
    pub(crate) fn i(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_index(i: usize) -> Part {
        ALL_PARTS[i]
    }
}

pub(crate) const fn part_flag(part: Part) -> u32 {
    1 << (part as u32)
}

pub(crate) const CANNOT_BE_BASE_FLAG: u32 = 1 << (PART_COUNT as u32);
const HOST_TYPE_SHIFT: u32 = PART_COUNT as u32 + 1;
const HOST_TYPE_MASK: u32 = 7 << HOST_TYPE_SHIFT;

/// A fresh record starts with scheme, username, password and path
/// present-but-empty; everything else is null.
pub(crate) const INITIAL_FLAGS: u32 = part_flag(Part::Scheme)
    | part_flag(Part::Username)
    | part_flag(Part::Password)
    | part_flag(Part::Path);

const fn host_type_bits(kind: HostType) -> u32 {
    match kind {
        HostType::Empty => 0,
        HostType::Opaque => 1,
        HostType::Domain => 2,
        HostType::Ipv4 => 3,
        HostType::Ipv6 => 4,
    }
}

/// How to transform the path while copying parts from another record.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathOp {
    Copy,
    /// Drop the last segment unconditionally.
    RemoveLast,
    /// <https://url.spec.whatwg.org/#shorten-a-urls-path>
    Shorten,
}

impl Url {
    /// Byte position where `part`'s range (including its separator
    /// prefix) begins.
    #[inline]
    pub(crate) fn part_pos(&self, part: Part) -> u32 {
        match part {
            Part::Scheme => 0,
            _ => self.part_end[part.i() - 1],
        }
    }

    /// The content of `part`, without its separator prefix. Empty for
    /// null or never-written parts.
    pub(crate) fn part_view(&self, part: Part) -> &str {
        let b = self.part_pos(part) + PART_BEGIN[part.i()];
        let e = self.part_end[part.i()];
        if e > b {
            &self.serialization[b as usize..e as usize]
        } else {
            ""
        }
    }

    #[inline]
    pub(crate) fn is_empty_part(&self, part: Part) -> bool {
        self.part_pos(part) + PART_BEGIN[part.i()] >= self.part_end[part.i()]
    }

    #[inline]
    pub(crate) fn is_null_part(&self, part: Part) -> bool {
        self.flags & part_flag(part) == 0
    }

    #[inline]
    pub(crate) fn set_part_nonnull(&mut self, part: Part) {
        self.flags |= part_flag(part);
    }

    #[inline]
    pub(crate) fn cannot_be_a_base_flag(&self) -> bool {
        self.flags & CANNOT_BE_BASE_FLAG != 0
    }

    pub(crate) fn record_host_type(&self) -> Option<HostType> {
        if self.is_null_part(Part::Host) {
            return None;
        }
        Some(match (self.flags & HOST_TYPE_MASK) >> HOST_TYPE_SHIFT {
            0 => HostType::Empty,
            1 => HostType::Opaque,
            2 => HostType::Domain,
            3 => HostType::Ipv4,
            _ => HostType::Ipv6,
        })
    }

    pub(crate) fn set_host_type(&mut self, kind: HostType) {
        self.flags = (self.flags & !HOST_TYPE_MASK)
            | part_flag(Part::Host)
            | (host_type_bits(kind) << HOST_TYPE_SHIFT);
    }

    /// Whether the URL has a non-empty username or password.
    pub fn has_credentials(&self) -> bool {
        !self.is_empty_part(Part::Username) || !self.is_empty_part(Part::Password)
    }

    /// The recorded port as a number, when one is present.
    pub(crate) fn port_number(&self) -> Option<u16> {
        if self.is_null_part(Part::Port) {
            return None;
        }
        let mut port: u16 = 0;
        for byte in self.part_view(Part::Port).bytes() {
            port = port.wrapping_mul(10).wrapping_add(u16::from(byte - b'0'));
        }
        Some(port)
    }

    /// The first path segment when it is exactly two characters long
    /// (used for the Windows drive letter checks of `file:` URLs).
    pub(crate) fn path_first_two(&self) -> Option<&str> {
        if self.cannot_be_a_base_flag() {
            return None;
        }
        let path = self.part_view(Part::Path);
        let rest = path.strip_prefix('/')?;
        if rest.len() == 2 || rest.as_bytes().get(2) == Some(&b'/') {
            Some(&rest[..2])
        } else {
            None
        }
    }

    /// End offset and segment count after removing the path's last
    /// segment, or `None` when the path has no segments.
    pub(crate) fn path_rem_last(&self) -> Option<(u32, u32)> {
        if self.path_segment_count == 0 {
            return None;
        }
        let b = self.part_end[Part::Path.i() - 1];
        let e = self.part_end[Part::Path.i()];
        let range = &self.serialization.as_bytes()[b as usize..e as usize];
        let cut = match range.iter().rposition(|&byte| byte == b'/') {
            Some(slash) => b + slash as u32,
            None => b,
        };
        Some((cut, self.path_segment_count - 1))
    }

    /// Like `path_rem_last`, but protects a lone Windows drive letter
    /// under the `file` scheme.
    pub(crate) fn path_shorten(&self) -> Option<(u32, u32)> {
        if self.path_segment_count == 0 {
            return None;
        }
        if self.is_file_scheme() && self.path_segment_count == 1 {
            if let Some(first) = self.path_first_two() {
                if is_normalized_windows_drive(first) {
                    return None;
                }
            }
        }
        self.path_rem_last()
    }

    /// Replace the content of one part, shifting every later offset.
    pub(crate) fn replace_part(&mut self, part: Part, new: &str) {
        self.replace_part_spanning(part, new, part, 0);
    }

    /// Replace the range from `first`'s start through `last`'s end with
    /// `new`, setting the offsets of the parts in between to `fill_len`
    /// bytes past the start of the replaced range.
    pub(crate) fn replace_part_spanning(&mut self, last: Part, new: &str, first: Part, fill_len: u32) {
        let b = self.part_pos(first);
        let old_len = self.part_end[last.i()] - b;
        self.serialization
            .replace_range(b as usize..(b + old_len) as usize, new);
        for i in first.i()..last.i() {
            self.part_end[i] = b + fill_len;
        }
        let diff = new.len() as i64 - i64::from(old_len);
        if diff != 0 {
            for i in last.i()..PART_COUNT {
                if self.part_end[i] == 0 {
                    break;
                }
                self.part_end[i] = (i64::from(self.part_end[i]) + diff) as u32;
            }
        }
    }

    /// Recompute the `/.` path prefix: present exactly when the host is
    /// null and a multi-segment path would otherwise serialize starting
    /// with `//`.
    ///
    /// <https://url.spec.whatwg.org/#url-serializing> step 3
    pub(crate) fn adjust_path_prefix(&mut self) {
        let path = self.part_view(Part::Path);
        let needs_prefix = self.is_null_part(Part::Host)
            && self.path_segment_count > 1
            && path.starts_with("//");
        if self.is_empty_part(Part::PathPrefix) == needs_prefix {
            self.replace_part(Part::PathPrefix, if needs_prefix { "/." } else { "" });
        }
    }
}

pub(crate) fn is_windows_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

pub(crate) fn is_normalized_windows_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Sink the parser writes URL parts through.
pub(crate) trait UrlWriter {
    fn u(&self) -> &Url;
    fn record_mut(&mut self) -> &mut Url;
    fn reserve(&mut self, additional: usize);

    fn start_scheme(&mut self) -> &mut String;
    fn save_scheme(&mut self);
    /// Replace the scheme with `src`'s (relative states).
    fn copy_scheme(&mut self, src: &Url);
    /// Force the scheme to `file` (file state entered through a base).
    fn set_file_scheme(&mut self);

    fn start_part(&mut self, part: Part) -> &mut String;
    fn save_part(&mut self);
    fn clear_part(&mut self, part: Part);

    fn start_path_segment(&mut self) -> &mut String;
    fn save_path_segment(&mut self);
    fn shorten_path(&mut self);
    fn path_is_empty(&self) -> bool;
    fn start_opaque_path(&mut self) -> &mut String;
    fn save_opaque_path(&mut self);
    fn commit_path(&mut self);

    fn append_parts(&mut self, src: &Url, first: Part, last: Part, op: PathOp);

    /// Commit the host part and record its kind. A non-null host makes
    /// any `/.` path prefix obsolete.
    fn finish_host(&mut self, kind: HostType) {
        self.save_part();
        self.record_mut().set_host_type(kind);
        if !self.u().is_empty_part(Part::PathPrefix) {
            self.record_mut().replace_part(Part::PathPrefix, "");
        }
    }

    /// Ensure the host is non-null (but empty), as every `file:` URL
    /// requires.
    fn set_empty_host(&mut self) {
        self.start_part(Part::Host);
        self.finish_host(HostType::Empty);
    }

    /// Shrink an already-written host to the empty host.
    fn empty_host(&mut self) {
        if self.u().part_end[Part::Host.i()] != 0 {
            self.record_mut().replace_part(Part::Host, "");
        }
        self.record_mut().set_host_type(HostType::Empty);
    }

    fn append_empty_segment(&mut self) {
        self.start_path_segment();
        self.save_path_segment();
    }

    fn set_part_nonnull(&mut self, part: Part) {
        self.record_mut().set_part_nonnull(part);
    }

    fn set_cannot_be_a_base(&mut self) {
        self.record_mut().flags |= CANNOT_BE_BASE_FLAG;
    }
}

/// Append-mode sink used when parsing a complete URL string: parts are
/// written strictly left to right and earlier offsets are filled in as
/// each new part starts.
pub(crate) struct RecordBuilder {
    url: Url,
    last_part: Part,
}

impl RecordBuilder {
    pub(crate) fn new() -> Self {
        RecordBuilder {
            url: Url::empty_record(),
            last_part: Part::Scheme,
        }
    }

    pub(crate) fn into_url(self) -> Url {
        self.url
    }
}

/// Start `new` in append mode: emit the structural separator for the
/// transition out of `last_part`, fill the offsets of the parts skipped
/// over, then hand out the tail of the canonical string.
fn start_part_append<'a>(url: &'a mut Url, last_part: &mut Part, new: Part) -> &'a mut String {
    debug_assert!(new > Part::Scheme);
    if new == *last_part {
        // Re-opening the part just written; only allowed while it is
        // still empty (empty host, continued opaque path).
        debug_assert!(new == Part::Path || url.is_empty_part(new));
        return &mut url.serialization;
    }
    debug_assert!(new > *last_part);
    let mut fill_from = last_part.i() + 1;
    match *last_part {
        Part::Scheme => {
            if new <= Part::Host {
                url.serialization.push_str("//");
            }
        }
        Part::Username => {
            if new == Part::Password {
                url.serialization.push(':');
            } else {
                url.part_end[Part::Password.i()] = url.serialization.len() as u32;
                fill_from = Part::HostStart.i();
                if new == Part::Host {
                    url.serialization.push('@');
                }
            }
        }
        Part::Password => {
            if new == Part::Host {
                url.serialization.push('@');
            }
        }
        Part::Host => {
            if new == Part::Port {
                url.serialization.push(':');
            }
        }
        _ => {}
    }
    let len = url.serialization.len() as u32;
    for i in fill_from..new.i() {
        url.part_end[i] = len;
    }
    match new {
        Part::Query => url.serialization.push('?'),
        Part::Fragment => url.serialization.push('#'),
        _ => {}
    }
    *last_part = new;
    &mut url.serialization
}

impl UrlWriter for RecordBuilder {
    fn u(&self) -> &Url {
        &self.url
    }

    fn record_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    fn reserve(&mut self, additional: usize) {
        self.url.serialization.reserve(additional);
    }

    fn start_scheme(&mut self) -> &mut String {
        self.url.serialization.clear();
        &mut self.url.serialization
    }

    fn save_scheme(&mut self) {
        let len = self.url.serialization.len() as u32;
        self.url.part_end[Part::Scheme.i()] = len;
        self.url.scheme_inf = get_scheme_info(&self.url.serialization);
        self.url.serialization.push(':');
    }

    fn copy_scheme(&mut self, src: &Url) {
        self.url.serialization.clear();
        self.url
            .serialization
            .push_str(src.part_view(Part::Scheme));
        self.url.part_end[Part::Scheme.i()] = self.url.serialization.len() as u32;
        self.url.serialization.push(':');
        self.url.scheme_inf = src.scheme_inf;
        self.last_part = Part::Scheme;
    }

    fn set_file_scheme(&mut self) {
        self.url.serialization.clear();
        self.url.serialization.push_str("file:");
        self.url.part_end[Part::Scheme.i()] = 4;
        self.url.scheme_inf = get_scheme_info("file");
        self.last_part = Part::Scheme;
    }

    fn start_part(&mut self, part: Part) -> &mut String {
        start_part_append(&mut self.url, &mut self.last_part, part)
    }

    fn save_part(&mut self) {
        self.url.part_end[self.last_part.i()] = self.url.serialization.len() as u32;
    }

    fn clear_part(&mut self, _part: Part) {
        // Nothing to clear while building left to right.
    }

    fn start_path_segment(&mut self) -> &mut String {
        let s = start_part_append(&mut self.url, &mut self.last_part, Part::Path);
        s.push('/');
        s
    }

    fn save_path_segment(&mut self) {
        self.save_part();
        self.url.path_segment_count += 1;
    }

    fn shorten_path(&mut self) {
        debug_assert!(self.last_part <= Part::Path);
        if let Some((end, count)) = self.url.path_shorten() {
            self.url.serialization.truncate(end as usize);
            self.url.part_end[Part::Path.i()] = end;
            self.url.path_segment_count = count;
        }
    }

    fn path_is_empty(&self) -> bool {
        self.url.path_segment_count == 0
    }

    fn start_opaque_path(&mut self) -> &mut String {
        start_part_append(&mut self.url, &mut self.last_part, Part::Path)
    }

    fn save_opaque_path(&mut self) {
        self.save_part();
        self.url.path_segment_count = 1;
    }

    fn commit_path(&mut self) {
        self.url.adjust_path_prefix();
    }

    fn append_parts(&mut self, src: &Url, first: Part, last: Part, op: PathOp) {
        // Where the copy actually starts: skip null authority parts and
        // an absent `@` separator.
        let ifirst = if first <= Part::Host {
            if !src.is_null_part(Part::Host) {
                if first == Part::Username && src.has_credentials() {
                    Part::Username
                } else {
                    Part::Host
                }
            } else {
                Part::PathPrefix
            }
        } else {
            first
        };

        let mut ilast_i = last.i();
        while ilast_i >= ifirst.i() && src.part_end[ilast_i] == 0 {
            ilast_i -= 1;
        }
        if ifirst.i() <= ilast_i {
            let ilast = Part::from_index(ilast_i);
            let mut src_end = src.part_end[ilast_i];
            let mut segment_count = src.path_segment_count;
            if op != PathOp::Copy && ilast == Part::Path {
                let shortened = match op {
                    PathOp::RemoveLast => src.path_rem_last(),
                    PathOp::Shorten => src.path_shorten(),
                    PathOp::Copy => None,
                };
                if let Some((end, count)) = shortened {
                    src_end = end;
                    segment_count = count;
                }
            }
            let offset = src.part_pos(ifirst) + PART_BEGIN[ifirst.i()];
            self.start_part(ifirst);
            let delta = self.url.serialization.len() as i64 - i64::from(offset);
            self.url
                .serialization
                .push_str(&src.serialization[offset as usize..src_end as usize]);
            for i in ifirst.i()..ilast_i {
                self.url.part_end[i] = (i64::from(src.part_end[i]) + delta) as u32;
            }
            self.url.part_end[ilast_i] = (i64::from(src_end) + delta) as u32;
            self.last_part = ilast;
            if ifirst <= Part::Path && Part::Path <= ilast {
                self.url.path_segment_count = segment_count;
            }
        }

        // Host type and null flags travel with the parts.
        let mut mask = HOST_TYPE_MASK;
        for i in first.i()..=last.i() {
            mask |= 1 << i;
        }
        self.url.flags = (self.url.flags & !mask) | (src.flags & mask);
    }
}

/// Splice-mode sink for setter re-entry: the re-parsed part is staged in
/// a scratch string (with its separator prefix) and swapped into the
/// existing canonical string on save.
pub(crate) struct RecordEditor {
    url: Url,
    scratch: String,
    cur: Part,
    use_scratch: bool,
    last_part: Part,
    path_segs: Vec<u32>,
}

impl RecordEditor {
    pub(crate) fn new(url: Url) -> Self {
        RecordEditor {
            url,
            scratch: String::new(),
            cur: Part::Scheme,
            use_scratch: false,
            last_part: Part::Scheme,
            path_segs: Vec::new(),
        }
    }

    pub(crate) fn into_url(self) -> Url {
        self.url
    }

    fn find_last_part(&self, part: Part) -> Part {
        for i in (1..=part.i()).rev() {
            if self.url.part_end[i] != 0 {
                return Part::from_index(i);
            }
        }
        Part::Scheme
    }

    fn scheme_sep_len(&self) -> u32 {
        self.url.part_end[Part::SchemeSep.i()] - self.url.part_end[Part::Scheme.i()]
    }
}

impl UrlWriter for RecordEditor {
    fn u(&self) -> &Url {
        &self.url
    }

    fn record_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    fn reserve(&mut self, additional: usize) {
        self.scratch.reserve(additional);
    }

    fn start_scheme(&mut self) -> &mut String {
        self.scratch.clear();
        &mut self.scratch
    }

    fn save_scheme(&mut self) {
        let new_scheme = std::mem::take(&mut self.scratch);
        self.url.replace_part(Part::Scheme, &new_scheme);
        self.url.scheme_inf = get_scheme_info(&new_scheme);
    }

    fn copy_scheme(&mut self, _src: &Url) {
        unreachable!("relative states are not reachable with a state override")
    }

    fn set_file_scheme(&mut self) {
        unreachable!("the file state is not reachable with a state override")
    }

    fn start_part(&mut self, part: Part) -> &mut String {
        debug_assert!(part > Part::Scheme);
        self.cur = part;
        if self.url.part_end[part.i()] != 0 {
            self.use_scratch = true;
            self.scratch.clear();
            match part {
                Part::Host if self.scheme_sep_len() < 3 => self.scratch.push_str("://"),
                Part::Password | Part::Port => self.scratch.push(':'),
                Part::Query => self.scratch.push('?'),
                Part::Fragment => self.scratch.push('#'),
                _ => {}
            }
            &mut self.scratch
        } else {
            self.use_scratch = false;
            self.last_part = self.find_last_part(part);
            start_part_append(&mut self.url, &mut self.last_part, part)
        }
    }

    fn save_part(&mut self) {
        if !self.use_scratch {
            self.url.part_end[self.last_part.i()] = self.url.serialization.len() as u32;
            return;
        }
        let scratch = std::mem::take(&mut self.scratch);
        let cur = self.cur;
        if cur == Part::Host {
            if self.scheme_sep_len() < 3 {
                // The record had no authority: widen ":" to "://host".
                self.url
                    .replace_part_spanning(Part::Host, &scratch, Part::SchemeSep, 3);
            } else {
                self.url.replace_part(Part::Host, &scratch);
            }
            return;
        }
        let empty_val = scratch.len() as u32 <= PART_BEGIN[cur.i()];
        match cur {
            Part::Username | Part::Password => {
                let other = if cur == Part::Username {
                    Part::Password
                } else {
                    Part::Username
                };
                if !empty_val && !self.url.has_credentials() {
                    let mut with_at = scratch;
                    with_at.push('@');
                    let keep = with_at.len() as u32 - 1;
                    self.url
                        .replace_part_spanning(Part::HostStart, &with_at, cur, keep);
                } else if empty_val && self.url.is_empty_part(other) {
                    // Both credentials gone: drop the "@" as well.
                    self.url.replace_part_spanning(Part::HostStart, "", cur, 0);
                } else {
                    let value = if empty_val && cur == Part::Password {
                        "" // drop the ":"
                    } else {
                        scratch.as_str()
                    };
                    self.url.replace_part(cur, value);
                }
            }
            Part::Port if empty_val => self.url.replace_part(cur, ""),
            _ => self.url.replace_part(cur, &scratch),
        }
    }

    fn clear_part(&mut self, part: Part) {
        if self.url.part_end[part.i()] != 0 {
            self.url.replace_part(part, "");
            self.url.flags &= !part_flag(part);
        }
    }

    fn start_path_segment(&mut self) -> &mut String {
        self.scratch.push('/');
        &mut self.scratch
    }

    fn save_path_segment(&mut self) {
        self.path_segs.push(self.scratch.len() as u32);
    }

    fn shorten_path(&mut self) {
        match self.path_segs.len() {
            0 => {}
            1 => {
                if self.u().is_file_scheme()
                    && self.scratch.len() == 3
                    && is_normalized_windows_drive(&self.scratch[1..])
                {
                    return;
                }
                self.path_segs.pop();
                self.scratch.clear();
            }
            _ => {
                self.path_segs.pop();
                let end = *self.path_segs.last().unwrap_or(&0);
                self.scratch.truncate(end as usize);
            }
        }
    }

    fn path_is_empty(&self) -> bool {
        self.path_segs.is_empty()
    }

    fn start_opaque_path(&mut self) -> &mut String {
        unreachable!("opaque paths are not reachable with a state override")
    }

    fn save_opaque_path(&mut self) {
        unreachable!("opaque paths are not reachable with a state override")
    }

    fn commit_path(&mut self) {
        let total = self.url.serialization.len() as u32;
        for i in (1..=Part::Path.i()).rev() {
            if self.url.part_end[i] != 0 {
                break;
            }
            self.url.part_end[i] = total;
        }
        let path = std::mem::take(&mut self.scratch);
        self.url.replace_part(Part::Path, &path);
        self.url.path_segment_count = self.path_segs.len() as u32;
        self.url.adjust_path_prefix();
    }

    fn append_parts(&mut self, _src: &Url, _first: Part, _last: Part, _op: PathOp) {
        unreachable!("relative states are not reachable with a state override")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_drive_detection() {
        assert!(is_windows_drive("c:"));
        assert!(is_windows_drive("Z|"));
        assert!(!is_windows_drive("c"));
        assert!(!is_windows_drive("cc:"));
        assert!(!is_windows_drive("1:"));
        assert!(is_normalized_windows_drive("c:"));
        assert!(!is_normalized_windows_drive("c|"));
    }
}
