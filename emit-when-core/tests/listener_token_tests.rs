// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

use emit_when_core::TokenSource;
use std::collections::HashSet;

#[test]
fn tokens_from_one_source_are_unique() {
    let tokens = TokenSource::new();

    let minted: HashSet<_> = (0..100).map(|_| tokens.mint()).collect();

    assert_eq!(minted.len(), 100);
}

#[test]
fn tokens_are_copyable_and_comparable() {
    let tokens = TokenSource::new();
    let token = tokens.mint();
    let copy = token;

    assert_eq!(token, copy);
    assert_ne!(token, tokens.mint());
}

#[test]
fn raw_values_are_monotonic() {
    let tokens = TokenSource::new();

    let first = tokens.mint();
    let second = tokens.mint();

    assert!(first.raw() < second.raw());
}
