// Copyright 2023-2026 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interactive URL parser: reads URL strings from stdin, one per line,
//! resolves each against the base URL given as the first argument (if
//! any) and prints the component breakdown.

use std::io::{self, BufRead, Write};
use std::process::exit;

use whatwg_url::{quirks, Url};

fn print_name_str(name: &str, value: &str) {
    if !value.is_empty() {
        println!("{}: {}", name, value);
    }
}

fn print_host_type(url: &Url) {
    let host_type = match url.host_type() {
        None => "null",
        Some(whatwg_url::HostType::Empty) => "Empty",
        Some(whatwg_url::HostType::Opaque) => "Opaque",
        Some(whatwg_url::HostType::Domain) => "Domain",
        Some(whatwg_url::HostType::Ipv4) => "IPv4",
        Some(whatwg_url::HostType::Ipv6) => "IPv6",
    };
    println!("host_type: {}", host_type);
}

fn print_url(url: &Url) {
    print_name_str("HREF", quirks::href(url));
    print_name_str("origin", &quirks::origin(url));

    print_name_str("protocol", quirks::protocol(url));
    print_name_str("username", quirks::username(url));
    print_name_str("password", quirks::password(url));
    print_host_type(url);
    print_name_str("host", quirks::host(url));
    print_name_str("hostname", quirks::hostname(url));
    print_name_str("port", quirks::port(url));
    print_name_str("pathname", quirks::pathname(url));
    print_name_str("search", quirks::search(url));
    print_name_str("hash", quirks::hash(url));
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let base = match args.first() {
        Some(base_str) => match Url::parse(base_str) {
            Ok(base) => Some(base),
            Err(err) => {
                eprintln!("invalid base URL {:?}: {}", base_str, err);
                exit(1);
            }
        },
        None => None,
    };

    if let Some(base) = &base {
        println!("BASE: {}", base.as_str());
    }
    println!("Enter URL; an empty line ends the session");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("read error: {}", err);
                break;
            }
        }
        let input = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if input.is_empty() {
            break;
        }
        let result = match &base {
            Some(base) => base.join(input),
            None => Url::parse(input),
        };
        match result {
            Ok(url) => print_url(&url),
            Err(err) => println!(" ^--FAILURE: {}", err),
        }
        println!();
    }
}
